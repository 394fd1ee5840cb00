use crate::constants::MAX_PARTICLES_PER_LAYER;
use crate::effects::FieldSpec;
use crate::params::AnimationParams;
use serde::Deserialize;
use thiserror::Error;

/// Preset bundled with the crate.
pub static GALAXY_PRESET_JSON: &str = include_str!("../presets/galaxy.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("preset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} has a non-finite value")]
    NonFinite { what: String },
    #[error("{what} must have a positive size, got {size}")]
    NonPositiveSize { what: String, size: f32 },
    #[error("{what} asks for {count} particles, limit is {limit}")]
    TooManyParticles {
        what: String,
        count: usize,
        limit: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GlowSpec {
    pub color_rgb: [f32; 3],
    pub size: f32,
}

/// Scene content: which objects exist and how they move.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub orbiters: Vec<AnimationParams>,
    pub center: Option<AnimationParams>,
    pub glow: Option<GlowSpec>,
    pub dust: Option<FieldSpec>,
    pub sparkles: Option<FieldSpec>,
    pub nebula: Option<FieldSpec>,
    /// Attach a trail to every orbiter.
    pub trails: bool,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn galaxy() -> Result<Self, ConfigError> {
        let config = Self::from_json(GALAXY_PRESET_JSON)?;
        log::info!(
            "[config] galaxy preset: {} orbiters, trails={}",
            config.orbiters.len(),
            config.trails
        );
        Ok(config)
    }

    /// Reject values the renderer cannot draw. Negative radii and speeds are
    /// fine; they only change direction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, p) in self.orbiters.iter().enumerate() {
            check_params(&format!("orbiter {i}"), p)?;
        }
        if let Some(center) = &self.center {
            check_params("center", center)?;
        }
        if let Some(glow) = &self.glow {
            let mut nums = glow.color_rgb.to_vec();
            nums.push(glow.size);
            check_finite("glow", &nums)?;
            check_size("glow", glow.size)?;
        }
        let fields = [
            ("dust", &self.dust),
            ("sparkles", &self.sparkles),
            ("nebula", &self.nebula),
        ];
        for (what, spec) in fields {
            if let Some(spec) = spec {
                check_field(what, spec)?;
            }
        }
        Ok(())
    }
}

fn check_params(what: &str, p: &AnimationParams) -> Result<(), ConfigError> {
    check_finite(what, &p.numbers())?;
    check_size(what, p.size)
}

fn check_field(what: &str, spec: &FieldSpec) -> Result<(), ConfigError> {
    let mut nums = vec![
        spec.inner_radius,
        spec.outer_radius,
        spec.flatten,
        spec.particle_size,
    ];
    nums.extend_from_slice(&spec.color_rgb);
    check_finite(what, &nums)?;
    check_size(what, spec.particle_size)?;
    if spec.count > MAX_PARTICLES_PER_LAYER {
        return Err(ConfigError::TooManyParticles {
            what: what.to_string(),
            count: spec.count,
            limit: MAX_PARTICLES_PER_LAYER,
        });
    }
    Ok(())
}

fn check_finite(what: &str, nums: &[f32]) -> Result<(), ConfigError> {
    if nums.iter().all(|n| n.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            what: what.to_string(),
        })
    }
}

fn check_size(what: &str, size: f32) -> Result<(), ConfigError> {
    if size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveSize {
            what: what.to_string(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_preset_loads() {
        let config = SceneConfig::galaxy().expect("bundled preset must parse");
        assert!(!config.orbiters.is_empty());
        assert!(config.center.is_some());
        assert!(config.glow.is_some());
        assert!(config.trails);
        // orbiters tick once per frame, the centre cube follows wall time
        assert!(config.orbiters.iter().all(|o| o.frame_rate_dependent));
        assert!(!config.center.as_ref().unwrap().frame_rate_dependent);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = SceneConfig::from_json(r#"{ "orbiters": [ { "size": 0.0 } ] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveSize { .. }));
    }

    #[test]
    fn negative_radius_is_accepted() {
        let json = r#"{ "orbiters": [ { "orbit_radius": -2.0, "orbit_speed": -1.0 } ] }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.orbiters[0].orbit_radius, -2.0);
    }

    #[test]
    fn oversized_field_is_rejected() {
        let json = format!(r#"{{ "dust": {{ "count": {} }} }}"#, MAX_PARTICLES_PER_LAYER + 1);
        let err = SceneConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyParticles { .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = SceneConfig::from_json("{ orbiters: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
