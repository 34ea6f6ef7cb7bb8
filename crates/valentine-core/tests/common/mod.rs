// Shared fixtures: a tiny typeface with a solid glyph, a glyph with a hole,
// a space and the '?' fallback.

#![allow(dead_code)]
use valentine_core::font::Font;
use valentine_core::{Assets, Texture};

pub const FONT_JSON: &str = r#"{
  "familyName": "Fixture",
  "resolution": 1000,
  "boundingBox": { "xMin": 0, "xMax": 800, "yMin": -300, "yMax": 1000 },
  "underlineThickness": 50,
  "glyphs": {
    "H": { "ha": 800, "o": "m 0 0 l 0 700 l 100 700 l 100 0 z" },
    "o": { "ha": 600, "o": "m 0 0 l 0 500 l 500 500 l 500 0 z m 100 100 l 400 100 l 400 400 l 100 400 z" },
    " ": { "ha": 250 },
    "?": { "ha": 500, "o": "m 0 0 l 0 100 l 100 100 l 100 0 z" },
    "ff": { "ha": 900, "o": "m 0 0 l 0 1 l 1 1 z" }
  }
}"#;

pub fn fixture_font() -> Font {
    Font::from_json(FONT_JSON).expect("fixture font parses")
}

pub fn fixture_assets() -> Assets {
    Assets {
        font: fixture_font(),
        matcap: Texture {
            width: 1,
            height: 1,
            pixels: vec![200, 120, 140, 255],
        },
    }
}
