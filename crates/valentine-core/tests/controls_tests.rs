use glam::{Vec2, Vec3};
use valentine_core::camera::Camera;
use valentine_core::config::CameraConfig;
use valentine_core::controls::{DragMode, OrbitSettings};
use valentine_core::{Modifiers, OrbitControls, PointerButton, Viewport};

fn camera() -> Camera {
    Camera::new(&CameraConfig::default(), &Viewport::new(800.0, 600.0, 1.0))
}

#[test]
fn camera_starts_from_default_config() {
    let cam = camera();
    assert_eq!(cam.eye, Vec3::new(1.0, 1.0, 2.0));
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert_eq!((cam.znear, cam.zfar), (0.1, 100.0));
}

#[test]
fn viewport_caps_pixel_ratio_at_two() {
    let v = Viewport::new(800.0, 600.0, 3.0);
    assert_eq!(v.pixel_ratio(), 2.0);
    assert_eq!(v.backing_size(), (1600, 1200));
    let v = Viewport::new(800.0, 600.0, 1.5);
    assert_eq!(v.backing_size(), (1200, 900));
}

#[test]
fn viewport_handles_degenerate_sizes() {
    let v = Viewport::new(0.0, 0.0, 0.0);
    assert_eq!(v.pixel_ratio(), 1.0);
    assert_eq!(v.aspect(), 1.0);
    assert_eq!(v.backing_size(), (1, 1));
}

#[test]
fn idle_controls_leave_camera_alone() {
    let mut cam = camera();
    let before = cam.clone();
    let mut controls = OrbitControls::default();
    controls.update(&mut cam);
    assert!((cam.eye - before.eye).length() < 1e-5);
    assert_eq!(cam.target, before.target);
}

#[test]
fn drag_rotates_and_keeps_distance() {
    let mut cam = camera();
    let radius = cam.eye.length();
    let mut controls = OrbitControls::default();
    controls.pointer_down(PointerButton::Primary, Modifiers::default(), Vec2::new(400.0, 300.0));
    assert_eq!(controls.mode(), DragMode::Rotate);
    controls.pointer_move(Vec2::new(500.0, 300.0), &cam, 600.0);
    controls.pointer_up();
    assert_eq!(controls.mode(), DragMode::None);

    let start = cam.eye;
    assert!(controls.update(&mut cam));
    assert!((cam.eye.length() - radius).abs() < 1e-4);
    assert!((cam.eye - start).length() > 1e-4);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn damping_eases_motion_out() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.rotate_left(0.5);
    let mut prev = cam.eye;
    let mut steps = Vec::new();
    for _ in 0..20 {
        controls.update(&mut cam);
        steps.push((cam.eye - prev).length());
        prev = cam.eye;
    }
    assert!(steps.windows(2).all(|w| w[1] < w[0]));
    assert!(controls.is_settling());
    for _ in 0..2000 {
        controls.update(&mut cam);
    }
    assert!(!controls.is_settling());
}

#[test]
fn without_damping_motion_applies_at_once() {
    let settings = OrbitSettings {
        enable_damping: false,
        ..Default::default()
    };
    let mut controls = OrbitControls::new(settings);
    let mut cam = camera();
    controls.rotate_left(0.3);
    assert!(controls.update(&mut cam));
    assert!(!controls.is_settling());
    let after = cam.eye;
    controls.update(&mut cam);
    assert!((cam.eye - after).length() < 1e-5);
}

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    let mut cam = camera();
    let r0 = cam.eye.length();
    let mut controls = OrbitControls::default();
    controls.wheel(-100.0);
    controls.update(&mut cam);
    let r1 = cam.eye.length();
    assert!((r1 - r0 * 0.95).abs() < 1e-4);
    controls.wheel(100.0);
    controls.update(&mut cam);
    assert!((cam.eye.length() - r0).abs() < 1e-4);
}

#[test]
fn zoom_respects_distance_limits() {
    let settings = OrbitSettings {
        min_distance: 2.0,
        max_distance: 3.0,
        ..Default::default()
    };
    let mut controls = OrbitControls::new(settings);
    let mut cam = camera();
    for _ in 0..50 {
        controls.wheel(-1.0);
        controls.update(&mut cam);
    }
    assert!((cam.eye.length() - 2.0).abs() < 1e-4);
    for _ in 0..50 {
        controls.wheel(1.0);
        controls.update(&mut cam);
    }
    assert!((cam.eye.length() - 3.0).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    for _ in 0..200 {
        controls.rotate_up(1.0);
        controls.update(&mut cam);
    }
    assert!(cam.eye.y > 0.0);
    assert!(Vec2::new(cam.eye.x, cam.eye.z).length() > 0.0);
}

#[test]
fn secondary_and_modified_drags_pan() {
    let mut controls = OrbitControls::default();
    controls.pointer_down(PointerButton::Secondary, Modifiers::default(), Vec2::ZERO);
    assert_eq!(controls.mode(), DragMode::Pan);
    let shift = Modifiers {
        shift: true,
        ..Default::default()
    };
    controls.pointer_down(PointerButton::Primary, shift, Vec2::ZERO);
    assert_eq!(controls.mode(), DragMode::Pan);
    controls.pointer_down(PointerButton::Middle, Modifiers::default(), Vec2::ZERO);
    assert_eq!(controls.mode(), DragMode::Dolly);
}

#[test]
fn pan_moves_target_and_eye_together() {
    let mut cam = camera();
    let offset = cam.eye - cam.target;
    let mut controls = OrbitControls::default();
    controls.pointer_down(PointerButton::Secondary, Modifiers::default(), Vec2::ZERO);
    controls.pointer_move(Vec2::new(50.0, 0.0), &cam, 600.0);
    controls.update(&mut cam);
    assert!(cam.target.length() > 0.0);
    assert!(((cam.eye - cam.target) - offset).length() < 1e-4);
}
