//! Extrusion of planar shapes into beveled solids.
//!
//! The solid is built as a stack of rings ("layers"), each holding every
//! outline and hole vertex once. Front bevel rings come first, then the base
//! ring at z = 0, the stepped rings up to `depth`, and finally the mirrored
//! back bevel rings. Caps close the first and last ring; quads join each pair
//! of neighbouring rings.

use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::shape::Shape;
use crate::shape_utils::{is_clockwise, remove_dup_end, triangulate_shape};
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub steps: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
    pub curve_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: 1.0,
            steps: 1,
            bevel_enabled: true,
            bevel_thickness: 0.2,
            bevel_size: 0.1,
            bevel_offset: 0.0,
            bevel_segments: 3,
            curve_segments: 12,
        }
    }
}

impl ExtrudeSettings {
    /// Bevel parameters with a disabled bevel collapsed to zero.
    fn effective_bevel(&self) -> (u32, f32, f32, f32) {
        if self.bevel_enabled {
            (
                self.bevel_segments,
                self.bevel_thickness,
                self.bevel_size,
                self.bevel_offset,
            )
        } else {
            (0, 0.0, 0.0, 0.0)
        }
    }

    /// Number of rings stacked along z for these settings.
    pub fn layer_count(&self) -> usize {
        let (segments, ..) = self.effective_bevel();
        self.steps as usize + 2 * segments as usize + 1
    }
}

/// Extrudes every shape and merges the results into one geometry with flat
/// normals.
pub fn extrude_shapes(shapes: &[Shape], settings: &ExtrudeSettings) -> Result<Geometry, GeometryError> {
    if !(settings.depth > 0.0) {
        return Err(GeometryError::InvalidDepth(settings.depth));
    }
    if settings.steps == 0 {
        return Err(GeometryError::NoSteps);
    }
    let mut out = Geometry::new();
    for shape in shapes {
        extrude_one(shape, settings, &mut out)?;
    }
    out.compute_flat_normals();
    Ok(out)
}

fn extrude_one(shape: &Shape, s: &ExtrudeSettings, out: &mut Geometry) -> Result<(), GeometryError> {
    let pts = shape.extract_points(s.curve_segments);
    let mut contour = pts.outline;
    remove_dup_end(&mut contour);
    if contour.len() < 3 {
        return Ok(());
    }
    let mut holes: Vec<Vec<Vec2>> = pts
        .holes
        .into_iter()
        .map(|mut h| {
            remove_dup_end(&mut h);
            h
        })
        .filter(|h| h.len() >= 3)
        .collect();

    // Outline clockwise, holes counter-clockwise.
    if !is_clockwise(&contour) {
        contour.reverse();
    }
    for h in &mut holes {
        if is_clockwise(h) {
            h.reverse();
        }
    }

    let faces = triangulate_shape(&contour, &holes)?;

    let mut ring: Vec<Vec2> = contour.clone();
    let mut movements: Vec<Vec2> = bevel_movements(&contour);
    for h in &holes {
        ring.extend_from_slice(h);
        movements.extend(bevel_movements(h));
    }
    let vlen = ring.len();

    let (segments, thickness, size, offset) = s.effective_bevel();
    let steps = s.steps;
    let mut layers: Vec<Vec3> = Vec::with_capacity(vlen * s.layer_count());
    let push_ring = |layers: &mut Vec<Vec3>, bs: f32, z: f32| {
        for (p, m) in ring.iter().zip(&movements) {
            let v = *p + *m * bs;
            layers.push(Vec3::new(v.x, v.y, z));
        }
    };

    for b in 0..segments {
        let t = b as f32 / segments as f32;
        let z = thickness * (t * FRAC_PI_2).cos();
        let bs = size * (t * FRAC_PI_2).sin() + offset;
        push_ring(&mut layers, bs, -z);
    }
    let bs = size + offset;
    push_ring(&mut layers, bs, 0.0);
    for step in 1..=steps {
        push_ring(&mut layers, bs, s.depth / steps as f32 * step as f32);
    }
    for b in (0..segments).rev() {
        let t = b as f32 / segments as f32;
        let z = thickness * (t * FRAC_PI_2).cos();
        let bs = size * (t * FRAC_PI_2).sin() + offset;
        push_ring(&mut layers, bs, s.depth + z);
    }

    let last = (steps + 2 * segments) as usize;

    // Caps: the front cap (first ring) faces -z, the back cap (last ring) +z.
    for f in &faces {
        let [a, b, c] = oriented(&ring, *f);
        out.push_triangle(layers[c], layers[b], layers[a]);
        let top = vlen * last;
        out.push_triangle(layers[a + top], layers[b + top], layers[c + top]);
    }

    // Side walls, one quad strip per closed ring of the shape.
    let mut ring_start = 0usize;
    let mut ring_lens = Vec::with_capacity(1 + holes.len());
    ring_lens.push(contour.len());
    ring_lens.extend(holes.iter().map(Vec::len));
    for len in ring_lens {
        for i in 0..len {
            let j = ring_start + i;
            let k = ring_start + if i == 0 { len - 1 } else { i - 1 };
            for layer in 0..last {
                let lo = vlen * layer;
                let hi = vlen * (layer + 1);
                let (a, b, c, d) = (j + lo, k + lo, k + hi, j + hi);
                out.push_triangle(layers[a], layers[b], layers[d]);
                out.push_triangle(layers[b], layers[c], layers[d]);
            }
        }
        ring_start += len;
    }
    Ok(())
}

/// Orders a cap triangle counter-clockwise in the xy plane.
fn oriented(ring: &[Vec2], [a, b, c]: [usize; 3]) -> [usize; 3] {
    let (pa, pb, pc) = (ring[a], ring[b], ring[c]);
    if (pb - pa).perp_dot(pc - pa) < 0.0 {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

fn bevel_movements(contour: &[Vec2]) -> Vec<Vec2> {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let prev = contour[(i + n - 1) % n];
            let next = contour[(i + 1) % n];
            bevel_vec(contour[i], prev, next)
        })
        .collect()
}

/// Direction to move `pt` so both adjacent edges shift by one unit to their
/// left. Not normalized, so sharp corners keep their shape, but capped at a
/// length of sqrt(2) to avoid spikes.
pub fn bevel_vec(pt: Vec2, prev: Vec2, next: Vec2) -> Vec2 {
    let v_prev = pt - prev;
    let v_next = next - pt;
    let v_prev_lensq = v_prev.length_squared();
    let collinear = v_prev.perp_dot(v_next);

    let (trans, shrink_by) = if collinear.abs() > f32::EPSILON {
        let v_prev_len = v_prev_lensq.sqrt();
        let v_next_len = v_next.length();
        let prev_shift = Vec2::new(prev.x - v_prev.y / v_prev_len, prev.y + v_prev.x / v_prev_len);
        let next_shift = Vec2::new(next.x - v_next.y / v_next_len, next.y + v_next.x / v_next_len);
        let sf = ((next_shift.x - prev_shift.x) * v_next.y - (next_shift.y - prev_shift.y) * v_next.x)
            / (v_prev.x * v_next.y - v_prev.y * v_next.x);
        let trans = prev_shift + v_prev * sf - pt;
        let lensq = trans.length_squared();
        if lensq <= 2.0 {
            return trans;
        }
        (trans, (lensq / 2.0).sqrt())
    } else {
        let same_direction = if v_prev.x > f32::EPSILON {
            v_next.x > f32::EPSILON
        } else if v_prev.x < -f32::EPSILON {
            v_next.x < -f32::EPSILON
        } else {
            v_prev.y.signum() == v_next.y.signum()
        };
        if same_direction {
            (Vec2::new(-v_prev.y, v_prev.x), v_prev_lensq.sqrt())
        } else {
            (v_prev, (v_prev_lensq / 2.0).sqrt())
        }
    };
    trans / shrink_by
}
