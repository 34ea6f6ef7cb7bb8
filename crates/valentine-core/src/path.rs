use glam::Vec2;

/// A single 2D segment of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Line {
        from: Vec2,
        to: Vec2,
    },
    Quadratic {
        from: Vec2,
        ctrl: Vec2,
        to: Vec2,
    },
    Cubic {
        from: Vec2,
        ctrl1: Vec2,
        ctrl2: Vec2,
        to: Vec2,
    },
}

impl Curve {
    /// Point on the curve at parameter `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            Curve::Line { from, to } => from.lerp(to, t),
            Curve::Quadratic { from, ctrl, to } => {
                let k = 1.0 - t;
                from * (k * k) + ctrl * (2.0 * k * t) + to * (t * t)
            }
            Curve::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let k = 1.0 - t;
                from * (k * k * k)
                    + ctrl1 * (3.0 * k * k * t)
                    + ctrl2 * (3.0 * k * t * t)
                    + to * (t * t * t)
            }
        }
    }

    /// `divisions + 1` evenly spaced samples including both end points.
    pub fn points(&self, divisions: u32) -> impl Iterator<Item = Vec2> + '_ {
        let d = divisions.max(1);
        (0..=d).map(move |i| self.point_at(i as f32 / d as f32))
    }

    fn resolution(&self, divisions: u32) -> u32 {
        match self {
            Curve::Line { .. } => 1,
            _ => divisions,
        }
    }
}

/// Connected sequence of curves starting at the last `move_to`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub curves: Vec<Curve>,
    current: Vec2,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.current = Vec2::new(x, y);
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        let to = Vec2::new(x, y);
        self.curves.push(Curve::Line {
            from: self.current,
            to,
        });
        self.current = to;
        self
    }

    pub fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        let to = Vec2::new(x, y);
        self.curves.push(Curve::Quadratic {
            from: self.current,
            ctrl: Vec2::new(cx, cy),
            to,
        });
        self.current = to;
        self
    }

    pub fn bezier_curve_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        let to = Vec2::new(x, y);
        self.curves.push(Curve::Cubic {
            from: self.current,
            ctrl1: Vec2::new(c1x, c1y),
            ctrl2: Vec2::new(c2x, c2y),
            to,
        });
        self.current = to;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Samples the path into a polyline.
    ///
    /// Lines contribute only their end points; curves are split into
    /// `divisions` segments. Consecutive duplicates are dropped so shared
    /// curve end points appear once.
    pub fn points(&self, divisions: u32) -> Vec<Vec2> {
        let mut out: Vec<Vec2> = Vec::new();
        for curve in &self.curves {
            for p in curve.points(curve.resolution(divisions)) {
                if out.last() == Some(&p) {
                    continue;
                }
                out.push(p);
            }
        }
        out
    }
}

/// Collection of sub paths, as produced by one glyph outline.
#[derive(Clone, Debug, Default)]
pub struct ShapePath {
    pub sub_paths: Vec<Path>,
}

impl ShapePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sub path at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let mut p = Path::new();
        p.move_to(x, y);
        self.sub_paths.push(p);
        self
    }

    fn current(&mut self) -> &mut Path {
        if self.sub_paths.is_empty() {
            self.sub_paths.push(Path::new());
        }
        let last = self.sub_paths.len() - 1;
        &mut self.sub_paths[last]
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.current().line_to(x, y);
        self
    }

    pub fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.current().quadratic_curve_to(cx, cy, x, y);
        self
    }

    pub fn bezier_curve_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.current().bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        self
    }
}
