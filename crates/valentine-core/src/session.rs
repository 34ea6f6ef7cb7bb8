//! Session state and the per-frame tick.
//!
//! A [`Session`] owns everything the frame loop touches: scene, camera,
//! orbit controls, viewport and the renderer. The host (browser RAF loop or
//! a test) calls [`Session::frame`] once per display refresh and stops
//! scheduling when it returns [`Tick::Stop`].

use crate::assets::Assets;
use crate::builder::build_scene;
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::controls::OrbitControls;
use crate::error::BuildError;
use crate::scene::Scene;
use crate::viewport::Viewport;
use rand::Rng;
use std::cell::Cell;
use std::f32::consts::TAU;
use std::fmt::Debug;
use std::rc::Rc;

/// Draws a scene through a camera onto some surface.
pub trait Renderer {
    type Error: Debug;

    /// Resizes the output surface to the viewport's backing size.
    fn resize(&mut self, viewport: &Viewport);

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Cloneable stop switch shared between the frame loop and its owner.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Frames completed since the loop started.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    fn count_frame(&self) {
        self.frames.set(self.frames.get() + 1);
    }
}

pub struct Session<R: Renderer> {
    pub scene: Scene,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub config: SceneConfig,
    viewport: Viewport,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    pub fn new(mut renderer: R, viewport: Viewport, config: SceneConfig) -> Self {
        let camera = Camera::new(&config.camera, &viewport);
        let controls = OrbitControls::new(config.orbit.clone());
        renderer.resize(&viewport);
        Self {
            scene: Scene::new(),
            camera,
            controls,
            config,
            viewport,
            renderer,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Updates camera aspect and renderer surface together.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(&viewport);
        self.renderer.resize(&viewport);
        log::debug!(
            "[session] resize {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio()
        );
    }

    /// Builds the greeting text and hearts from loaded assets. Calling it
    /// again replaces both.
    pub fn populate<G: Rng>(
        &mut self,
        assets: &Assets,
        name: Option<&str>,
        rng: &mut G,
    ) -> Result<(), BuildError> {
        build_scene(&mut self.scene, assets, name, &self.config, rng)
    }

    /// One frame: ease the controls, draw, then spin every heart.
    pub fn frame(&mut self, handle: &LoopHandle) -> Tick {
        if !handle.is_running() {
            return Tick::Stop;
        }
        self.controls.update(&mut self.camera);
        if let Err(e) = self.renderer.render(&self.scene, &self.camera) {
            log::error!("render error: {:?}", e);
        }
        let step = self.config.hearts.rotation_step;
        // Kept in [0, 2pi) so the f32 step stays exact over long sessions.
        for t in self.scene.heart_transforms_mut() {
            t.rotation.x = (t.rotation.x + step).rem_euclid(TAU);
            t.rotation.y = (t.rotation.y + step).rem_euclid(TAU);
        }
        handle.count_frame();
        Tick::Continue
    }
}
