//! Damped orbit navigation around a focus point.
//!
//! Pointer input only accumulates deltas; [`OrbitControls::update`] applies a
//! `damping_factor` share of them to the camera and decays the rest, so it
//! has to run once per frame for motion to ease out.

use crate::camera::Camera;
use crate::constants::{ORBIT_DAMPING_FACTOR, ORBIT_ZOOM_BASE};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

// Keeps the polar angle off the poles where look-at degenerates.
const POLE_EPS: f32 = 1e-6;
const MOVE_EPS: f32 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Dolly,
    Pan,
}

/// Spherical coordinates with y up: `theta` around y from +z, `phi` from +y.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
    mode: DragMode,
    last_pointer: Vec2,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            settings,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            mode: DragMode::None,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// True while rotation or pan deltas are still being eased out.
    pub fn is_settling(&self) -> bool {
        self.delta_theta.abs() > MOVE_EPS
            || self.delta_phi.abs() > MOVE_EPS
            || self.pan_offset.length_squared() > MOVE_EPS * MOVE_EPS
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    pub fn dolly_in(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn dolly_out(&mut self, factor: f32) {
        self.scale /= factor;
    }

    fn zoom_scale(&self) -> f32 {
        ORBIT_ZOOM_BASE.powf(self.settings.zoom_speed)
    }

    /// Screen-space pan by a pixel delta, scaled so the point under the
    /// cursor at the focus distance follows the pointer.
    pub fn pan(&mut self, dx: f32, dy: f32, camera: &Camera, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let offset = camera.eye - camera.target;
        let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
        let forward = (camera.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let left = 2.0 * dx * target_distance / viewport_height;
        let upward = 2.0 * dy * target_distance / viewport_height;
        self.pan_offset += right * -left + up * upward;
    }

    pub fn pointer_down(&mut self, button: PointerButton, mods: Modifiers, pos: Vec2) {
        self.mode = match button {
            PointerButton::Primary if mods.ctrl || mods.meta || mods.shift => DragMode::Pan,
            PointerButton::Primary => DragMode::Rotate,
            PointerButton::Middle => DragMode::Dolly,
            PointerButton::Secondary => DragMode::Pan,
        };
        self.last_pointer = pos;
    }

    pub fn pointer_move(&mut self, pos: Vec2, camera: &Camera, viewport_height: f32) {
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        if viewport_height <= 0.0 {
            return;
        }
        match self.mode {
            DragMode::None => {}
            DragMode::Rotate => {
                let d = delta * self.settings.rotate_speed;
                self.rotate_left(TAU * d.x / viewport_height);
                self.rotate_up(TAU * d.y / viewport_height);
            }
            DragMode::Dolly => {
                let s = self.zoom_scale();
                if delta.y > 0.0 {
                    self.dolly_out(s);
                } else if delta.y < 0.0 {
                    self.dolly_in(s);
                }
            }
            DragMode::Pan => {
                let d = delta * self.settings.pan_speed;
                self.pan(d.x, d.y, camera, viewport_height);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.mode = DragMode::None;
    }

    /// Scrolling up (negative `delta_y`) moves the camera closer.
    pub fn wheel(&mut self, delta_y: f32) {
        let s = self.zoom_scale();
        if delta_y < 0.0 {
            self.dolly_in(s);
        } else if delta_y > 0.0 {
            self.dolly_out(s);
        }
    }

    /// Applies pending motion to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let s = &self.settings;
        let k = if s.enable_damping { s.damping_factor } else { 1.0 };

        let mut sph = Spherical::from_offset(camera.eye - camera.target);
        sph.theta += self.delta_theta * k;
        sph.phi += self.delta_phi * k;
        sph.phi = sph
            .phi
            .clamp(s.min_polar_angle, s.max_polar_angle)
            .clamp(POLE_EPS, PI - POLE_EPS);
        sph.radius = (sph.radius * self.scale).clamp(s.min_distance, s.max_distance);

        let target = camera.target + self.pan_offset * k;
        let eye = target + sph.to_offset();
        let moved = eye.distance_squared(camera.eye) > MOVE_EPS * MOVE_EPS
            || target.distance_squared(camera.target) > MOVE_EPS * MOVE_EPS;
        camera.target = target;
        camera.eye = eye;

        if s.enable_damping {
            let decay = 1.0 - s.damping_factor;
            self.delta_theta *= decay;
            self.delta_phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;
        moved
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitSettings::default())
    }
}
