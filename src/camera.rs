use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at a fixed target.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: [f32; 3], target: [f32; 3], fovy_deg: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::from_array(eye),
            target: Vec3::from_array(target),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fovy_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// Keep the projection in step with the canvas backing size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
