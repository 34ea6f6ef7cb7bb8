use crate::constants::*;
use crate::error::GeometryError;
use crate::extrude::{extrude_shapes, ExtrudeSettings};
use crate::font::Font;
use crate::geometry::Geometry;

/// Sizing of extruded 3D text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextGeometryParams {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
}

impl Default for TextGeometryParams {
    fn default() -> Self {
        Self {
            size: TEXT_SIZE,
            depth: TEXT_DEPTH,
            curve_segments: TEXT_CURVE_SEGMENTS,
            bevel_enabled: true,
            bevel_thickness: TEXT_BEVEL_THICKNESS,
            bevel_size: TEXT_BEVEL_SIZE,
            bevel_offset: TEXT_BEVEL_OFFSET,
            bevel_segments: TEXT_BEVEL_SEGMENTS,
        }
    }
}

impl TextGeometryParams {
    pub fn extrude_settings(&self) -> ExtrudeSettings {
        ExtrudeSettings {
            depth: self.depth,
            steps: 1,
            bevel_enabled: self.bevel_enabled,
            bevel_thickness: self.bevel_thickness,
            bevel_size: self.bevel_size,
            bevel_offset: self.bevel_offset,
            bevel_segments: self.bevel_segments,
            curve_segments: self.curve_segments,
        }
    }
}

/// Extrudes `text` set in `font`. The result is not centered.
pub fn text_geometry(
    font: &Font,
    text: &str,
    params: &TextGeometryParams,
) -> Result<Geometry, GeometryError> {
    let shapes = font.generate_shapes(text, params.size);
    extrude_shapes(&shapes, &params.extrude_settings())
}
