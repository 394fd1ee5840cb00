use glam::Vec3;

// Animation tuning shared by the evaluator, the composer and the front-end.

// Orbit bob (not scaled by the speed multiplier)
pub const BOB_FREQUENCY: f32 = 2.0; // rad/s
pub const BOB_AMPLITUDE: f32 = 0.3;

// Self rotation step applied once per rendered frame at rotation_speed = 1
pub const ROTATION_STEP_PER_FRAME: Vec3 = Vec3::new(0.01, 0.01, 0.005);
// Reference rate used to express the per-frame step per second
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

// Glow pulse
pub const GLOW_SCALE_FREQUENCY: f32 = 2.0;
pub const GLOW_SCALE_AMPLITUDE: f32 = 0.1;
pub const GLOW_OPACITY_FREQUENCY: f32 = 3.0;
pub const GLOW_OPACITY_BASE: f32 = 0.3;
pub const GLOW_OPACITY_AMPLITUDE: f32 = 0.2;

// Speed tiers offered by the control panel
pub const SPEED_TIERS: [f32; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;

// Particle layers
pub const DUST_SPIN_RATE: f32 = 0.02; // rad/s around Y
pub const DUST_OPACITY: f32 = 0.6;
pub const SPARKLE_TWINKLE_RATE: f32 = 2.5;
pub const NEBULA_SPIN_RATE: f32 = 0.01;
pub const NEBULA_OPACITY: f32 = 0.15;
pub const MAX_PARTICLES_PER_LAYER: usize = 4096;

// Trails
pub const TRAIL_SAMPLES: usize = 16;
pub const TRAIL_SPACING_SEC: f64 = 0.05;

// Seeds for the deterministic particle fields
pub const DUST_SEED: u64 = 0x5EED_D057;
pub const SPARKLE_SEED: u64 = 0x5EED_5BA4;
pub const NEBULA_SEED: u64 = 0x5EED_0E8A;
