use crate::constants::*;
use crate::controls::VisualLayer;
use crate::pose::phase;
use glam::Vec3;
use rand::prelude::*;
use serde::Deserialize;

/// Shape and look of one particle layer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Vertical squash applied to the shell; 1 keeps it spherical.
    pub flatten: f32,
    pub particle_size: f32,
    pub color_rgb: [f32; 3],
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            count: 0,
            inner_radius: 0.0,
            outer_radius: 1.0,
            flatten: 1.0,
            particle_size: 0.02,
            color_rgb: [1.0, 1.0, 1.0],
        }
    }
}

/// A static cloud of particles belonging to one layer.
///
/// Positions are generated once from a fixed seed; per-frame animation is
/// either a whole-field pose from the composer or, for sparkles, a
/// per-particle twinkle computed from the stored phase.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub layer: VisualLayer,
    pub particle_size: f32,
    pub color_rgb: [f32; 3],
    positions: Vec<Vec3>,
    phases: Vec<f32>,
}

impl ParticleField {
    pub fn generate(layer: VisualLayer, spec: &FieldSpec, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = spec.count.min(MAX_PARTICLES_PER_LAYER);
        let lo = spec.inner_radius.min(spec.outer_radius);
        let hi = spec.inner_radius.max(spec.outer_radius);
        let mut positions = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        for _ in 0..count {
            // rejection-sample the unit ball for a uniform direction
            let dir = loop {
                let v = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                );
                let len2 = v.length_squared();
                if len2 > 1e-4 && len2 <= 1.0 {
                    break v / len2.sqrt();
                }
            };
            let r = if hi > lo { rng.gen_range(lo..hi) } else { lo };
            let mut p = dir * r;
            p.y *= spec.flatten;
            positions.push(p);
            phases.push(rng.gen_range(0.0..std::f32::consts::TAU));
        }
        Self {
            layer,
            particle_size: spec.particle_size,
            color_rgb: spec.color_rgb,
            positions,
            phases,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Opacity of particle `index` at time `t`. Sparkles twinkle, other
    /// layers use a flat per-layer value.
    pub fn particle_opacity(&self, index: usize, t: f64) -> f32 {
        match self.layer {
            VisualLayer::Sparkles => {
                let offset = self.phases.get(index).copied().unwrap_or(0.0);
                0.5 + 0.5 * (phase(t, SPARKLE_TWINKLE_RATE) + offset).sin()
            }
            VisualLayer::Nebula => NEBULA_OPACITY,
            _ => DUST_OPACITY,
        }
    }
}
