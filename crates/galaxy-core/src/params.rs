use serde::Deserialize;

/// Static configuration of one animated object.
///
/// Values are fixed once the scene is assembled; the evaluator only reads
/// them. Any real value is accepted: a negative speed reverses direction and
/// a zero radius pins the object above the galaxy centre.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationParams {
    pub orbit_radius: f32,
    /// Angular velocity in rad/s at a speed multiplier of 1.
    pub orbit_speed: f32,
    pub orbit_height: f32,
    pub rotation_speed: f32,
    /// Initial phase angle in radians.
    pub orbit_offset: f32,
    pub size: f32,
    pub color_rgb: [f32; 3],
    /// When set, self rotation advances by a fixed step every rendered frame;
    /// otherwise it is scaled by the frame delta.
    pub frame_rate_dependent: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            orbit_radius: 0.0,
            orbit_speed: 0.0,
            orbit_height: 0.0,
            rotation_speed: 1.0,
            orbit_offset: 0.0,
            size: 1.0,
            color_rgb: [1.0, 1.0, 1.0],
            frame_rate_dependent: true,
        }
    }
}

impl AnimationParams {
    pub fn orbiting(
        orbit_radius: f32,
        orbit_speed: f32,
        orbit_height: f32,
        orbit_offset: f32,
    ) -> Self {
        Self {
            orbit_radius,
            orbit_speed,
            orbit_height,
            orbit_offset,
            ..Self::default()
        }
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color_rgb: [f32; 3]) -> Self {
        self.color_rgb = color_rgb;
        self
    }

    pub fn with_frame_rate_dependent(mut self, frame_rate_dependent: bool) -> Self {
        self.frame_rate_dependent = frame_rate_dependent;
        self
    }

    pub(crate) fn numbers(&self) -> [f32; 9] {
        [
            self.orbit_radius,
            self.orbit_speed,
            self.orbit_height,
            self.rotation_speed,
            self.orbit_offset,
            self.size,
            self.color_rgb[0],
            self.color_rgb[1],
            self.color_rgb[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_orbit_fields() {
        let p = AnimationParams::orbiting(2.0, 1.5, 0.5, 0.25)
            .with_size(0.3)
            .with_rotation_speed(-2.0)
            .with_color([0.2, 0.4, 0.6]);
        assert_eq!(p.orbit_radius, 2.0);
        assert_eq!(p.orbit_speed, 1.5);
        assert_eq!(p.orbit_height, 0.5);
        assert_eq!(p.orbit_offset, 0.25);
        assert_eq!(p.rotation_speed, -2.0);
        assert_eq!(p.size, 0.3);
        assert!(p.frame_rate_dependent);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let p: AnimationParams = serde_json::from_str(r#"{ "orbit_radius": 3.0 }"#).unwrap();
        assert_eq!(p.orbit_radius, 3.0);
        assert_eq!(p.size, 1.0);
        assert_eq!(p.rotation_speed, 1.0);
        assert!(p.frame_rate_dependent);
    }
}
