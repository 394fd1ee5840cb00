// Host-side tests for the scene camera.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::Camera;
use glam::{Vec3, Vec4Swizzles};

fn camera() -> Camera {
    Camera::new([0.0, 4.5, 12.0], [0.0, 0.0, 0.0], 50.0, 0.1, 100.0)
}

#[test]
fn target_projects_to_screen_centre() {
    let mut cam = camera();
    cam.set_viewport(1280, 720);
    let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn viewport_sets_aspect_and_ignores_zero_size() {
    let mut cam = camera();
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn point_behind_camera_has_negative_w() {
    let cam = camera();
    let clip = cam.view_proj() * Vec3::new(0.0, 4.5, 20.0).extend(1.0);
    assert!(clip.w < 0.0);
}
