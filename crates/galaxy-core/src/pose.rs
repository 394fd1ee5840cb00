//! Per-frame pose evaluation.
//!
//! Every function here is total and side-effect free: it maps parameters,
//! controls and time to a `Transform`. Applying the result to a scene node
//! is the caller's job (see `scene::PoseSink`).

use crate::clock::FrameTick;
use crate::constants::*;
use crate::controls::AnimationControls;
use crate::params::AnimationParams;
use glam::Vec3;
use std::f64::consts::TAU;

/// Instantaneous pose for one animated object.
///
/// `rotation_delta` is added to the node's accumulated rotation; it is not an
/// absolute orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_delta: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_delta: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// `t * rate` reduced to one turn before narrowing to `f32`.
#[inline]
pub fn phase(t: f64, rate: f32) -> f32 {
    (t * rate as f64).rem_euclid(TAU) as f32
}

/// Orbit phase at time `t`, modulo a full turn.
#[inline]
pub fn orbit_angle(params: &AnimationParams, speed_multiplier: f32, t: f64) -> f32 {
    phase(t, params.orbit_speed * speed_multiplier) + params.orbit_offset
}

/// Vertical bob around the orbit height. Runs at a fixed frequency regardless
/// of the speed multiplier.
#[inline]
pub fn bob_offset(t: f64) -> f32 {
    phase(t, BOB_FREQUENCY).sin() * BOB_AMPLITUDE
}

/// Position on the XZ circle around the galaxy centre, plus bob.
pub fn orbit_position(params: &AnimationParams, speed_multiplier: f32, t: f64) -> Vec3 {
    let angle = orbit_angle(params, speed_multiplier, t);
    Vec3::new(
        angle.cos() * params.orbit_radius,
        params.orbit_height + bob_offset(t),
        angle.sin() * params.orbit_radius,
    )
}

/// Rotation to add this frame.
///
/// Frame-rate dependent objects step by a constant per frame; the others
/// scale the same rate (expressed per second at the reference frame rate) by
/// the frame delta.
pub fn rotation_delta(params: &AnimationParams, speed_multiplier: f32, delta: f32) -> Vec3 {
    let step = ROTATION_STEP_PER_FRAME * params.rotation_speed * speed_multiplier;
    if params.frame_rate_dependent {
        step
    } else {
        step * REFERENCE_FRAME_RATE * delta
    }
}

pub fn orbit_pose(
    params: &AnimationParams,
    controls: &AnimationControls,
    tick: FrameTick,
) -> Transform {
    let m = controls.speed_multiplier();
    Transform {
        position: orbit_position(params, m, tick.elapsed),
        rotation_delta: rotation_delta(params, m, tick.delta),
        ..Transform::default()
    }
}

/// Pose for an object that spins in place above the galaxy centre.
pub fn spin_pose(
    params: &AnimationParams,
    controls: &AnimationControls,
    tick: FrameTick,
) -> Transform {
    Transform {
        position: Vec3::new(0.0, params.orbit_height, 0.0),
        rotation_delta: rotation_delta(params, controls.speed_multiplier(), tick.delta),
        ..Transform::default()
    }
}

/// Scale in [0.9, 1.1].
#[inline]
pub fn glow_scale(t: f64) -> f32 {
    1.0 + phase(t, GLOW_SCALE_FREQUENCY).sin() * GLOW_SCALE_AMPLITUDE
}

/// Opacity in [0.1, 0.5].
#[inline]
pub fn glow_opacity(t: f64) -> f32 {
    GLOW_OPACITY_BASE + phase(t, GLOW_OPACITY_FREQUENCY).sin() * GLOW_OPACITY_AMPLITUDE
}

pub fn glow_pose(t: f64) -> Transform {
    Transform {
        scale: glow_scale(t),
        opacity: glow_opacity(t),
        ..Transform::default()
    }
}

/// Whole-field pose for a slowly turning particle layer.
pub fn field_spin_pose(
    rate: f32,
    opacity: f32,
    controls: &AnimationControls,
    tick: FrameTick,
) -> Transform {
    Transform {
        rotation_delta: Vec3::new(0.0, rate * controls.speed_multiplier() * tick.delta, 0.0),
        opacity,
        ..Transform::default()
    }
}

/// Recent orbit positions, newest first, spaced `spacing` seconds apart.
pub fn trail_points(
    params: &AnimationParams,
    speed_multiplier: f32,
    t: f64,
    spacing: f64,
    out: &mut impl Extend<Vec3>,
) {
    out.extend((0..TRAIL_SAMPLES).map(|k| {
        let sample_t = (t - k as f64 * spacing).max(0.0);
        orbit_position(params, speed_multiplier, sample_t)
    }));
}
