mod common;

use common::{fixture_font, FONT_JSON};
use glam::{Vec2, Vec3};
use valentine_core::font::{parse_outline, Font, OutlineCmd};
use valentine_core::text::{text_geometry, TextGeometryParams};
use valentine_core::FontError;

#[test]
fn parses_glyph_table() {
    let font = fixture_font();
    assert_eq!(font.family_name, "Fixture");
    // multi-character keys are skipped
    assert_eq!(font.glyph_count(), 4);
    assert_eq!(font.glyph('H').unwrap().advance, 800.0);
    assert!(font.glyph(' ').unwrap().outline.is_empty());
}

#[test]
fn missing_glyph_falls_back_to_question_mark() {
    let font = fixture_font();
    let q = font.glyph('?').unwrap().clone();
    assert_eq!(font.glyph('Z'), Some(&q));
    assert_eq!(font.glyph('é'), Some(&q));
}

#[test]
fn line_height_scales_with_size() {
    let font = fixture_font();
    // (yMax - yMin + underlineThickness) / resolution
    assert!((font.line_height(1.0) - 1.35).abs() < 1e-6);
    assert!((font.line_height(0.5) - 0.675).abs() < 1e-6);
}

#[test]
fn layout_advances_pen_and_breaks_lines() {
    let font = fixture_font();
    let paths = font.layout_paths("HH\nH", 1.0);
    assert_eq!(paths.len(), 3);
    let first = |i: usize| paths[i].to_shapes()[0].outline.points(1)[0];
    assert_eq!(first(0), Vec2::ZERO);
    assert!((first(1) - Vec2::new(0.8, 0.0)).length() < 1e-6);
    assert!((first(2) - Vec2::new(0.0, -1.35)).length() < 1e-6);
}

#[test]
fn glyph_with_counter_becomes_shape_with_hole() {
    let font = fixture_font();
    let shapes = font.generate_shapes("o", 1.0);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].holes.len(), 1);
}

#[test]
fn spaces_produce_no_shapes() {
    let font = fixture_font();
    assert!(font.generate_shapes("   ", 1.0).is_empty());
    assert_eq!(font.generate_shapes("H H", 1.0).len(), 2);
}

#[test]
fn curve_commands_list_end_point_first() {
    let cmds = parse_outline('x', "m 0 0 q 10 0 5 5 b 20 0 12 4 16 4").unwrap();
    assert_eq!(cmds[0], OutlineCmd::MoveTo(Vec2::ZERO));
    assert_eq!(
        cmds[1],
        OutlineCmd::QuadTo {
            ctrl: Vec2::new(5.0, 5.0),
            to: Vec2::new(10.0, 0.0)
        }
    );
    assert_eq!(
        cmds[2],
        OutlineCmd::CubicTo {
            ctrl1: Vec2::new(12.0, 4.0),
            ctrl2: Vec2::new(16.0, 4.0),
            to: Vec2::new(20.0, 0.0)
        }
    );
}

#[test]
fn bad_outline_tokens_are_reported() {
    let err = parse_outline('k', "m 0 0 x 1 1").unwrap_err();
    match err {
        FontError::Outline { glyph, token } => {
            assert_eq!(glyph, 'k');
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(parse_outline('k', "m 0").is_err());
    assert!(parse_outline('k', "l a b").is_err());
}

#[test]
fn rejects_invalid_documents() {
    assert!(matches!(Font::from_json("{"), Err(FontError::Json(_))));
    let zero_res = FONT_JSON.replace("\"resolution\": 1000", "\"resolution\": 0");
    assert!(matches!(
        Font::from_json(&zero_res),
        Err(FontError::Resolution(_))
    ));
}

#[test]
fn text_geometry_spans_both_lines() {
    let font = fixture_font();
    let params = TextGeometryParams::default();
    let g = text_geometry(&font, "Ho\nH", &params).unwrap();
    assert!(!g.is_empty());
    let bb = g.bounding_box().unwrap();
    // 'o' starts at 0.4 and is 0.25 wide at size 0.5
    assert!(bb.max.x > 0.64);
    // second line sits one line height (0.675) lower
    assert!(bb.min.y < -0.6);
    assert!((bb.min.z + params.bevel_thickness).abs() < 1e-4);
    assert!((bb.max.z - (params.depth + params.bevel_thickness)).abs() < 1e-4);
}

#[test]
fn glyph_with_counter_is_wound_outward() {
    let g = text_geometry(&fixture_font(), "o", &TextGeometryParams::default()).unwrap();
    let volume: f32 = g
        .positions
        .chunks(3)
        .map(|t: &[Vec3]| t[0].dot(t[1].cross(t[2])) / 6.0)
        .sum();
    assert!(volume > 0.0);
}
