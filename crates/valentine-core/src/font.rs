//! Typeface fonts: the JSON glyph-outline format (`*.typeface.json`).
//!
//! Each glyph carries an advance (`ha`) and an outline command string `o`
//! made of `m x y`, `l x y`, `q x y cx cy` and `b x y c1x c1y c2x c2y`
//! tokens in font units. Curve commands list the end point first.

use crate::error::FontError;
use crate::path::ShapePath;
use crate::shape::Shape;
use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;

const FALLBACK_GLYPH: char = '?';

#[derive(Deserialize)]
struct TypefaceJson {
    glyphs: FnvHashMap<String, GlyphJson>,
    #[serde(rename = "familyName", default)]
    family_name: String,
    resolution: f32,
    #[serde(rename = "boundingBox")]
    bounding_box: BoundingBoxJson,
    #[serde(rename = "underlineThickness", default)]
    underline_thickness: f32,
}

#[derive(Deserialize)]
struct GlyphJson {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

#[derive(Deserialize)]
struct BoundingBoxJson {
    #[serde(rename = "yMin")]
    y_min: f32,
    #[serde(rename = "yMax")]
    y_max: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub advance: f32,
    pub outline: Vec<OutlineCmd>,
}

#[derive(Clone, Debug)]
pub struct Font {
    pub family_name: String,
    resolution: f32,
    line_height_units: f32,
    glyphs: FnvHashMap<char, Glyph>,
}

impl Font {
    /// Parses a typeface document. Outlines are validated up front so text
    /// layout itself cannot fail.
    pub fn from_json(src: &str) -> Result<Self, FontError> {
        let raw: TypefaceJson = serde_json::from_str(src)?;
        Self::from_raw(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FontError> {
        let raw: TypefaceJson = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: TypefaceJson) -> Result<Self, FontError> {
        if !(raw.resolution > 0.0) {
            return Err(FontError::Resolution(raw.resolution));
        }
        let mut glyphs = FnvHashMap::default();
        for (key, g) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                log::debug!("[font] skipping multi-char glyph key {:?}", key);
                continue;
            };
            let outline = match &g.o {
                Some(o) => parse_outline(ch, o)?,
                None => Vec::new(),
            };
            glyphs.insert(
                ch,
                Glyph {
                    advance: g.ha,
                    outline,
                },
            );
        }
        Ok(Self {
            family_name: raw.family_name,
            resolution: raw.resolution,
            line_height_units: raw.bounding_box.y_max - raw.bounding_box.y_min
                + raw.underline_thickness,
            glyphs,
        })
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch).or_else(|| self.glyphs.get(&FALLBACK_GLYPH))
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Distance between baselines for glyphs of the given size.
    pub fn line_height(&self, size: f32) -> f32 {
        self.line_height_units * size / self.resolution
    }

    /// One [`ShapePath`] per drawable character, laid out left to right with
    /// `\n` starting a new line below.
    pub fn layout_paths(&self, text: &str, size: f32) -> Vec<ShapePath> {
        let scale = size / self.resolution;
        let line_height = self.line_height(size);
        let mut pen = Vec2::ZERO;
        let mut paths = Vec::new();
        for ch in text.chars() {
            if ch == '\n' {
                pen.x = 0.0;
                pen.y -= line_height;
                continue;
            }
            let Some(glyph) = self.glyph(ch) else {
                log::warn!("[font] no glyph for {:?} in {}", ch, self.family_name);
                continue;
            };
            paths.push(glyph_path(glyph, scale, pen));
            pen.x += glyph.advance * scale;
        }
        paths
    }

    pub fn generate_shapes(&self, text: &str, size: f32) -> Vec<Shape> {
        self.layout_paths(text, size)
            .iter()
            .flat_map(ShapePath::to_shapes)
            .collect()
    }
}

fn glyph_path(glyph: &Glyph, scale: f32, offset: Vec2) -> ShapePath {
    let t = |p: Vec2| p * scale + offset;
    let mut path = ShapePath::new();
    for cmd in &glyph.outline {
        match *cmd {
            OutlineCmd::MoveTo(p) => {
                let p = t(p);
                path.move_to(p.x, p.y);
            }
            OutlineCmd::LineTo(p) => {
                let p = t(p);
                path.line_to(p.x, p.y);
            }
            OutlineCmd::QuadTo { ctrl, to } => {
                let (c, p) = (t(ctrl), t(to));
                path.quadratic_curve_to(c.x, c.y, p.x, p.y);
            }
            OutlineCmd::CubicTo { ctrl1, ctrl2, to } => {
                let (c1, c2, p) = (t(ctrl1), t(ctrl2), t(to));
                path.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
            }
        }
    }
    path
}

/// Parses an outline command string into commands in font units.
pub fn parse_outline(glyph: char, src: &str) -> Result<Vec<OutlineCmd>, FontError> {
    let mut tokens = src.split_whitespace();
    let bad = |token: &str| FontError::Outline {
        glyph,
        token: token.to_string(),
    };
    let point = |tokens: &mut std::str::SplitWhitespace<'_>| -> Result<Vec2, FontError> {
        let x = tokens.next().ok_or_else(|| bad("<eof>"))?;
        let y = tokens.next().ok_or_else(|| bad("<eof>"))?;
        let x: f32 = x.parse().map_err(|_| bad(x))?;
        let y: f32 = y.parse().map_err(|_| bad(y))?;
        Ok(Vec2::new(x, y))
    };

    let mut cmds = Vec::new();
    while let Some(action) = tokens.next() {
        let cmd = match action {
            "m" => OutlineCmd::MoveTo(point(&mut tokens)?),
            "l" => OutlineCmd::LineTo(point(&mut tokens)?),
            "q" => {
                let to = point(&mut tokens)?;
                let ctrl = point(&mut tokens)?;
                OutlineCmd::QuadTo { ctrl, to }
            }
            "b" => {
                let to = point(&mut tokens)?;
                let ctrl1 = point(&mut tokens)?;
                let ctrl2 = point(&mut tokens)?;
                OutlineCmd::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => continue,
            other => return Err(bad(other)),
        };
        cmds.push(cmd);
    }
    Ok(cmds)
}
