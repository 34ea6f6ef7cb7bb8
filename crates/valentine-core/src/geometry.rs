//! Triangle-list geometry shared by the text and heart meshes.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Non-indexed triangle list: every three consecutive positions form one
/// triangle, `normals` runs parallel to `positions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.positions.extend_from_slice(&[a, b, c]);
    }

    /// Appends all triangles of `other`.
    pub fn merge(&mut self, other: Geometry) {
        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let (min, max) = self
            .positions
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Aabb { min, max })
    }

    /// Flat per-face normals. Degenerate triangles get a zero normal.
    pub fn compute_flat_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.positions.len());
        for tri in self.positions.chunks_exact(3) {
            let n = (tri[1] - tri[0])
                .cross(tri[2] - tri[0])
                .normalize_or_zero();
            self.normals.extend_from_slice(&[n, n, n]);
        }
    }

    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Moves the bounding-box center to the origin and returns the offset
    /// that was applied.
    pub fn center(&mut self) -> Vec3 {
        match self.bounding_box() {
            Some(bb) => {
                let offset = -bb.center();
                self.translate(offset);
                offset
            }
            None => Vec3::ZERO,
        }
    }

    /// Interleaved `[px, py, pz, nx, ny, nz]` vertex stream for upload.
    pub fn interleaved(&self) -> Vec<[f32; 6]> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| [p.x, p.y, p.z, n.x, n.y, n.z])
            .collect()
    }
}
