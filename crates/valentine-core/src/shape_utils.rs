use crate::error::GeometryError;
use earcutr::earcut;
use glam::Vec2;

/// Signed area of a closed polygon; positive for counter-clockwise winding.
pub fn area(contour: &[Vec2]) -> f32 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    let mut p = n - 1;
    for q in 0..n {
        a += contour[p].x * contour[q].y - contour[q].x * contour[p].y;
        p = q;
    }
    a * 0.5
}

#[inline]
pub fn is_clockwise(contour: &[Vec2]) -> bool {
    area(contour) < 0.0
}

/// Even-odd containment test.
pub fn point_in_polygon(pt: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > pt.y) != (b.y > pt.y) && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Drops a closing point that repeats the first one.
pub fn remove_dup_end(points: &mut Vec<Vec2>) {
    if points.len() > 2 && points.first() == points.last() {
        points.pop();
    }
}

/// Triangulates `contour` with `holes` cut out.
///
/// Indices refer to the concatenation `contour ++ holes[0] ++ holes[1] ...`.
/// Callers are expected to have removed duplicated closing points.
pub fn triangulate_shape(
    contour: &[Vec2],
    holes: &[Vec<Vec2>],
) -> Result<Vec<[usize; 3]>, GeometryError> {
    if contour.len() < 3 {
        return Ok(Vec::new());
    }
    let total = contour.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut coords: Vec<f64> = Vec::with_capacity(total * 2);
    let mut hole_indices: Vec<usize> = Vec::with_capacity(holes.len());
    for p in contour {
        coords.push(p.x as f64);
        coords.push(p.y as f64);
    }
    let mut offset = contour.len();
    for hole in holes {
        hole_indices.push(offset);
        for p in hole {
            coords.push(p.x as f64);
            coords.push(p.y as f64);
        }
        offset += hole.len();
    }

    let indices = earcut(&coords, &hole_indices, 2)
        .map_err(|e| GeometryError::Triangulation(format!("{:?}", e)))?;
    Ok(indices
        .chunks_exact(3)
        .map(|tri| [tri[0], tri[1], tri[2]])
        .collect())
}
