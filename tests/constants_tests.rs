// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
fn camera_sees_the_outer_dust_shell() {
    // dust reaches 14 units from the centre in the bundled preset
    let eye = glam::Vec3::from_array(CAMERA_EYE);
    let target = glam::Vec3::from_array(CAMERA_TARGET);
    let dist = (eye - target).length();
    assert!(dist + 14.0 < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shading_and_trail_fractions_are_in_unit_range() {
    for v in [AMBIENT, TRAIL_HEAD_ALPHA, TRAIL_SIZE_FACTOR, TRAIL_TAIL_SHRINK] {
        assert!((0.0..=1.0).contains(&v), "{v} out of range");
    }
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!(glam::Vec3::from_array(LIGHT_DIR).length() > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_capacity_is_a_power_of_two() {
    assert!(INITIAL_INSTANCE_CAPACITY.is_power_of_two());
}

#[test]
fn xr_event_names_are_distinct() {
    assert_ne!(XR_REQUEST_EVENT, XR_END_EVENT);
    assert_ne!(XR_END_EVENT, XR_ENDED_EVENT);
    assert_ne!(XR_REQUEST_EVENT, XR_ENDED_EVENT);
}
