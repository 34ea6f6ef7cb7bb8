//! Scene graph: meshes referencing shared geometry and materials.

use crate::geometry::Geometry;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::rc::Rc;

/// Decoded RGBA8 image.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Decodes a PNG (or any format the `image` build supports) into RGBA8.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

/// Matcap material: shading is looked up from a spherical reflectance image
/// indexed by the view-space normal; no scene lights involved.
#[derive(Clone, Debug)]
pub struct Material {
    pub matcap: Rc<Texture>,
}

impl Material {
    pub fn matcap(texture: Rc<Texture>) -> Self {
        Self { matcap: texture }
    }
}

/// Position, Euler XYZ rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Rc<Geometry>,
    pub material: Rc<Material>,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: Rc<Geometry>, material: Rc<Material>) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }
}

/// Scene container: the greeting text and the heart field.
#[derive(Debug, Default)]
pub struct Scene {
    text: Option<Mesh>,
    hearts: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, mesh: Mesh) {
        if self.text.is_some() {
            log::warn!("[scene] replacing existing text mesh");
        }
        self.text = Some(mesh);
    }

    /// Replaces the whole heart field.
    pub fn set_hearts(&mut self, hearts: Vec<Mesh>) {
        if !self.hearts.is_empty() {
            log::warn!("[scene] replacing {} existing hearts", self.hearts.len());
        }
        self.hearts = hearts;
    }

    pub fn text(&self) -> Option<&Mesh> {
        self.text.as_ref()
    }

    pub fn hearts(&self) -> &[Mesh] {
        &self.hearts
    }

    /// Mutable access to heart transforms only; the heart set itself cannot
    /// grow or shrink through this.
    pub fn heart_transforms_mut(&mut self) -> impl Iterator<Item = &mut Transform> {
        self.hearts.iter_mut().map(|m| &mut m.transform)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.hearts.is_empty()
    }

    /// Every mesh in draw order: text first, then hearts.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.text.iter().chain(self.hearts.iter())
    }
}
