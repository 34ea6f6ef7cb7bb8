mod common;

use common::fixture_assets;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use valentine_core::{
    Camera, LoopHandle, Renderer, Scene, SceneConfig, Session, Tick, Viewport,
};

#[derive(Default)]
struct RecordingRenderer {
    resizes: Vec<(u32, u32)>,
    frames: usize,
    last_mesh_count: usize,
    fail: bool,
}

impl Renderer for RecordingRenderer {
    type Error = String;

    fn resize(&mut self, viewport: &Viewport) {
        self.resizes.push(viewport.backing_size());
    }

    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<(), String> {
        self.frames += 1;
        self.last_mesh_count = scene.meshes().count();
        if self.fail {
            Err("lost device".to_string())
        } else {
            Ok(())
        }
    }
}

fn session() -> Session<RecordingRenderer> {
    Session::new(
        RecordingRenderer::default(),
        Viewport::new(1280.0, 720.0, 1.0),
        SceneConfig::default(),
    )
}

fn populated() -> Session<RecordingRenderer> {
    let mut s = session();
    let mut rng = StdRng::seed_from_u64(2024);
    s.populate(&fixture_assets(), Some("Sam"), &mut rng).unwrap();
    s
}

#[test]
fn new_session_sizes_renderer_once() {
    let s = session();
    assert_eq!(s.renderer().resizes, vec![(1280, 720)]);
    assert!(s.scene.is_empty());
}

#[test]
fn empty_scene_still_renders() {
    let mut s = session();
    let handle = LoopHandle::new();
    assert_eq!(s.frame(&handle), Tick::Continue);
    assert_eq!(s.renderer().frames, 1);
    assert_eq!(s.renderer().last_mesh_count, 0);
}

#[test]
fn each_frame_spins_every_heart() {
    let mut s = populated();
    let before: Vec<_> = s.scene.hearts().iter().map(|h| h.transform.rotation).collect();
    let handle = LoopHandle::new();
    for _ in 0..3 {
        assert_eq!(s.frame(&handle), Tick::Continue);
    }
    for (h, r0) in s.scene.hearts().iter().zip(&before) {
        let r = h.transform.rotation;
        assert!((r.x - (r0.x + 0.03)).abs() < 1e-5);
        assert!((r.y - (r0.y + 0.03)).abs() < 1e-5);
        assert_eq!(r.z, r0.z);
    }
    assert_eq!(handle.frames(), 3);
    assert_eq!(s.renderer().last_mesh_count, 101);
}

#[test]
fn text_does_not_spin() {
    let mut s = populated();
    let before = s.scene.text().unwrap().transform;
    let handle = LoopHandle::new();
    s.frame(&handle);
    assert_eq!(s.scene.text().unwrap().transform, before);
}

#[test]
fn stopped_loop_neither_renders_nor_animates() {
    let mut s = populated();
    let handle = LoopHandle::new();
    s.frame(&handle);
    let clone = handle.clone();
    clone.stop();
    assert!(!handle.is_running());
    let rotation = s.scene.hearts()[0].transform.rotation;
    assert_eq!(s.frame(&handle), Tick::Stop);
    assert_eq!(s.renderer().frames, 1);
    assert_eq!(handle.frames(), 1);
    assert_eq!(s.scene.hearts()[0].transform.rotation, rotation);
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    let mut s = Session::new(
        RecordingRenderer {
            fail: true,
            ..Default::default()
        },
        Viewport::new(640.0, 480.0, 1.0),
        SceneConfig::default(),
    );
    let handle = LoopHandle::new();
    assert_eq!(s.frame(&handle), Tick::Continue);
    assert_eq!(s.frame(&handle), Tick::Continue);
    assert_eq!(s.renderer().frames, 2);
    assert_eq!(handle.frames(), 2);
}

#[test]
fn resize_updates_aspect_and_backing_size() {
    let mut s = session();
    s.resize(Viewport::new(500.0, 1000.0, 3.0));
    assert!((s.camera.aspect - 0.5).abs() < 1e-6);
    assert_eq!(s.renderer().resizes.last(), Some(&(1000, 2000)));
    assert_eq!(s.viewport().pixel_ratio(), 2.0);
}

#[test]
fn minimized_window_keeps_sane_aspect() {
    let mut s = session();
    s.resize(Viewport::new(800.0, 0.0, 1.0));
    assert_eq!(s.camera.aspect, 1.0);
    assert_eq!(s.renderer().resizes.last(), Some(&(800, 1)));
}

#[test]
fn frame_applies_pending_orbit_motion() {
    let mut s = populated();
    let eye = s.camera.eye;
    s.controls.wheel(-1.0);
    s.frame(&LoopHandle::new());
    assert!(s.camera.eye.length() < eye.length());
}

#[test]
fn long_running_spin_keeps_exact_step() {
    let mut s = populated();
    // about five days of frames at 60 Hz
    for t in s.scene.heart_transforms_mut() {
        t.rotation.x = 259_199.97;
        t.rotation.y = 259_199.97;
    }
    let handle = LoopHandle::new();
    s.frame(&handle);
    let before: Vec<_> = s.scene.hearts().iter().map(|h| h.transform.rotation).collect();
    s.frame(&handle);
    for (h, r0) in s.scene.hearts().iter().zip(&before) {
        let r = h.transform.rotation;
        assert!(r.x >= 0.0 && r.x < TAU);
        let dx = (r.x - r0.x).rem_euclid(TAU);
        let dy = (r.y - r0.y).rem_euclid(TAU);
        assert!((dx - 0.01).abs() < 1e-5, "step was {dx}");
        assert!((dy - 0.01).abs() < 1e-5, "step was {dy}");
    }
}

#[test]
fn spin_wraps_past_full_turn() {
    let mut s = populated();
    for t in s.scene.heart_transforms_mut() {
        t.rotation.x = TAU - 0.004;
    }
    s.frame(&LoopHandle::new());
    for h in s.scene.hearts() {
        assert!((h.transform.rotation.x - 0.006).abs() < 1e-5);
    }
}

#[test]
fn populating_twice_keeps_one_hundred_hearts() {
    let mut s = populated();
    let mut rng = StdRng::seed_from_u64(7);
    s.populate(&fixture_assets(), Some("Sam"), &mut rng).unwrap();
    assert_eq!(s.scene.hearts().len(), 100);
    assert_eq!(s.scene.meshes().count(), 101);
}
