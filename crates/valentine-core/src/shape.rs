//! Planar shapes: an outline with optional holes, ready for extrusion.

use crate::path::{Path, ShapePath};
use crate::shape_utils::{is_clockwise, point_in_polygon};
use glam::Vec2;
use smallvec::SmallVec;

// Sample count used only to decide winding and containment of glyph sub paths.
const CLASSIFY_DIVISIONS: u32 = 12;

#[derive(Clone, Debug, Default)]
pub struct Shape {
    pub outline: Path,
    pub holes: SmallVec<[Path; 2]>,
}

/// Sampled outline and hole polylines of a [`Shape`].
#[derive(Clone, Debug, Default)]
pub struct ShapePoints {
    pub outline: Vec<Vec2>,
    pub holes: Vec<Vec<Vec2>>,
}

impl Shape {
    pub fn new(outline: Path) -> Self {
        Self {
            outline,
            holes: SmallVec::new(),
        }
    }

    pub fn extract_points(&self, divisions: u32) -> ShapePoints {
        ShapePoints {
            outline: self.outline.points(divisions),
            holes: self.holes.iter().map(|h| h.points(divisions)).collect(),
        }
    }
}

impl ShapePath {
    /// Groups sub paths into solids and holes.
    ///
    /// Clockwise sub paths are solids, counter-clockwise ones are holes and
    /// are attached to the first solid containing their first point. A glyph
    /// with no clockwise contour at all is read with the opposite convention.
    pub fn to_shapes(&self) -> Vec<Shape> {
        let paths: Vec<&Path> = self.sub_paths.iter().filter(|p| !p.is_empty()).collect();
        if paths.is_empty() {
            return Vec::new();
        }
        if paths.len() == 1 {
            return vec![Shape::new(paths[0].clone())];
        }

        let sampled: Vec<(&Path, Vec<Vec2>, bool)> = paths
            .into_iter()
            .map(|p| {
                let pts = p.points(CLASSIFY_DIVISIONS);
                let cw = is_clockwise(&pts);
                (p, pts, cw)
            })
            .collect();
        let solid_winding = sampled.iter().any(|(_, _, cw)| *cw);

        let mut shapes: Vec<(Shape, &[Vec2])> = Vec::new();
        for (path, pts, cw) in &sampled {
            if *cw == solid_winding {
                shapes.push((Shape::new((*path).clone()), pts.as_slice()));
            }
        }
        for (path, pts, cw) in &sampled {
            if *cw == solid_winding {
                continue;
            }
            let Some(first) = pts.first().copied() else {
                continue;
            };
            match shapes
                .iter_mut()
                .find(|(_, outline)| point_in_polygon(first, outline))
            {
                Some((shape, _)) => shape.holes.push((*path).clone()),
                None => log::debug!("[shape] dropping hole outside every solid"),
            }
        }
        shapes.into_iter().map(|(s, _)| s).collect()
    }
}

/// The fixed heart outline, roughly 110 x 95 units.
pub fn heart_shape() -> Shape {
    let mut p = Path::new();
    p.move_to(25.0, 25.0)
        .bezier_curve_to(25.0, 25.0, 20.0, 0.0, 0.0, 0.0)
        .bezier_curve_to(-30.0, 0.0, -30.0, 35.0, -30.0, 35.0)
        .bezier_curve_to(-30.0, 55.0, -10.0, 77.0, 25.0, 95.0)
        .bezier_curve_to(60.0, 77.0, 80.0, 55.0, 80.0, 35.0)
        .bezier_curve_to(80.0, 35.0, 80.0, 0.0, 50.0, 0.0)
        .bezier_curve_to(35.0, 0.0, 25.0, 25.0, 25.0, 25.0);
    Shape::new(p)
}
