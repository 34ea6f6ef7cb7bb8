pub mod assets;
pub mod builder;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod extrude;
pub mod font;
pub mod geometry;
pub mod params;
pub mod path;
pub mod scene;
pub mod session;
pub mod shape;
pub mod shape_utils;
pub mod text;
pub mod viewport;

pub use assets::Assets;
pub use camera::Camera;
pub use config::SceneConfig;
pub use constants::*;
pub use controls::{Modifiers, OrbitControls, PointerButton};
pub use error::{AssetError, BuildError, FontError, GeometryError};
pub use geometry::Geometry;
pub use scene::{Material, Mesh, Scene, Texture, Transform};
pub use session::{LoopHandle, Renderer, Session, Tick};
pub use viewport::Viewport;

// Matcap mesh shader, bundled for the web renderer
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
