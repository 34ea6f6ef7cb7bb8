//! Builds the greeting scene once the font and matcap are available.

use crate::assets::Assets;
use crate::config::{HeartField, SceneConfig};
use crate::error::BuildError;
use crate::extrude::extrude_shapes;
use crate::geometry::Geometry;
use crate::params::greeting_text;
use crate::scene::{Material, Mesh, Scene, Transform};
use crate::shape::heart_shape;
use crate::text::text_geometry;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;
use std::rc::Rc;

/// Random placement of one heart: position uniform in the cube of side
/// `field.spread` around the origin, rotation x/y uniform in [0, pi).
pub fn random_heart_transform<R: Rng>(rng: &mut R, field: &HeartField) -> Transform {
    let mut coord = || (rng.gen::<f32>() - 0.5) * field.spread;
    let position = Vec3::new(coord(), coord(), coord());
    let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
    Transform {
        position,
        rotation,
        scale: Vec3::splat(field.scale),
    }
}

/// Centered 3D text geometry for the greeting.
pub fn greeting_geometry(
    assets: &Assets,
    name: Option<&str>,
    config: &SceneConfig,
) -> Result<Geometry, BuildError> {
    let text = greeting_text(name);
    let mut geometry = text_geometry(&assets.font, &text, &config.text)?;
    geometry.center();
    Ok(geometry)
}

pub fn heart_geometry(config: &SceneConfig) -> Result<Geometry, BuildError> {
    Ok(extrude_shapes(&[heart_shape()], &config.heart_extrude)?)
}

/// Inserts the text mesh and the heart field into `scene`, replacing any
/// previous build.
///
/// All meshes share a single matcap material and all hearts share a single
/// geometry.
pub fn build_scene<R: Rng>(
    scene: &mut Scene,
    assets: &Assets,
    name: Option<&str>,
    config: &SceneConfig,
    rng: &mut R,
) -> Result<(), BuildError> {
    let material = Rc::new(Material::matcap(Rc::new(assets.matcap.clone())));

    let text = Rc::new(greeting_geometry(assets, name, config)?);
    log::info!("[scene] text mesh: {} triangles", text.triangle_count());
    scene.set_text(Mesh::new(text, material.clone()));

    let heart = Rc::new(heart_geometry(config)?);
    log::info!(
        "[scene] heart template: {} triangles x {} instances",
        heart.triangle_count(),
        config.hearts.count
    );
    let hearts = (0..config.hearts.count)
        .map(|_| {
            let mut mesh = Mesh::new(heart.clone(), material.clone());
            mesh.transform = random_heart_transform(rng, &config.hearts);
            mesh
        })
        .collect();
    scene.set_hearts(hearts);
    Ok(())
}
