//! Scene configuration. Defaults come from `constants.rs`; the page has no
//! other configuration source.

use crate::constants::*;
use crate::controls::OrbitSettings;
use crate::extrude::ExtrudeSettings;
use crate::text::TextGeometryParams;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct HeartField {
    pub count: usize,
    /// Side of the origin-centered cube the hearts are scattered in.
    pub spread: f32,
    pub scale: f32,
    /// Radians added to rotation x and y per frame.
    pub rotation_step: f32,
}

impl Default for HeartField {
    fn default() -> Self {
        Self {
            count: HEART_COUNT,
            spread: HEART_SPREAD,
            scale: HEART_SCALE,
            rotation_step: ROTATION_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::from(CAMERA_START),
            target: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetPaths {
    pub font: String,
    pub matcap: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            font: FONT_PATH.to_string(),
            matcap: MATCAP_PATH.to_string(),
        }
    }
}

pub fn heart_extrude_settings() -> ExtrudeSettings {
    ExtrudeSettings {
        depth: HEART_DEPTH,
        steps: HEART_STEPS,
        bevel_enabled: true,
        bevel_thickness: HEART_BEVEL_THICKNESS,
        bevel_size: HEART_BEVEL_SIZE,
        bevel_offset: 0.0,
        bevel_segments: HEART_BEVEL_SEGMENTS,
        curve_segments: HEART_CURVE_SEGMENTS,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub text: TextGeometryParams,
    pub heart_extrude: ExtrudeSettings,
    pub hearts: HeartField,
    pub camera: CameraConfig,
    pub orbit: OrbitSettings,
    pub assets: AssetPaths,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            text: TextGeometryParams::default(),
            heart_extrude: heart_extrude_settings(),
            hearts: HeartField::default(),
            camera: CameraConfig::default(),
            orbit: OrbitSettings::default(),
            assets: AssetPaths::default(),
        }
    }
}
