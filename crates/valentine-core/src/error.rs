use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("extrude depth must be positive, got {0}")]
    InvalidDepth(f32),
    #[error("extrude needs at least one step")]
    NoSteps,
    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("typeface json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("typeface resolution must be positive, got {0}")]
    Resolution(f32),
    #[error("glyph {glyph:?}: bad outline token {token:?}")]
    Outline { glyph: char, token: String },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("matcap image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Font(#[from] FontError),
}
