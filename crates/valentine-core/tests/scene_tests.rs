mod common;

use common::fixture_assets;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;
use std::rc::Rc;
use valentine_core::builder::{build_scene, random_heart_transform};
use valentine_core::config::HeartField;
use valentine_core::text::{text_geometry, TextGeometryParams};
use valentine_core::{Assets, AssetError, SceneConfig, Scene};

fn built(seed: u64, name: Option<&str>) -> Scene {
    let mut scene = Scene::new();
    let mut rng = StdRng::seed_from_u64(seed);
    build_scene(
        &mut scene,
        &fixture_assets(),
        name,
        &SceneConfig::default(),
        &mut rng,
    )
    .unwrap();
    scene
}

#[test]
fn builds_text_and_one_hundred_hearts() {
    let scene = built(7, Some("Sam"));
    assert!(scene.text().is_some());
    assert_eq!(scene.hearts().len(), 100);
    assert_eq!(scene.meshes().count(), 101);
}

#[test]
fn hearts_share_geometry_and_material() {
    let scene = built(7, None);
    let text = scene.text().unwrap();
    let first = &scene.hearts()[0];
    for h in scene.hearts() {
        assert!(Rc::ptr_eq(&h.geometry, &first.geometry));
        assert!(Rc::ptr_eq(&h.material, &first.material));
    }
    assert!(Rc::ptr_eq(&text.material, &first.material));
    assert!(!Rc::ptr_eq(&text.geometry, &first.geometry));
}

#[test]
fn text_geometry_is_centered() {
    let scene = built(1, Some("Sam"));
    let bb = scene.text().unwrap().geometry.bounding_box().unwrap();
    assert!(bb.center().length() < 1e-4);
}

#[test]
fn heart_placements_stay_in_bounds() {
    let scene = built(42, None);
    for h in scene.hearts() {
        let t = &h.transform;
        assert!(t.position.abs().max_element() <= 7.5);
        assert!(t.rotation.x >= 0.0 && t.rotation.x < PI);
        assert!(t.rotation.y >= 0.0 && t.rotation.y < PI);
        assert_eq!(t.rotation.z, 0.0);
        assert_eq!(t.scale, Vec3::splat(0.005));
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = built(99, None);
    let b = built(99, None);
    let c = built(100, None);
    let pos = |s: &Scene| s.hearts().iter().map(|h| h.transform.position).collect::<Vec<_>>();
    assert_eq!(pos(&a), pos(&b));
    assert_ne!(pos(&a), pos(&c));
}

#[test]
fn random_transform_follows_field_settings() {
    let field = HeartField {
        count: 1,
        spread: 2.0,
        scale: 0.5,
        rotation_step: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let t = random_heart_transform(&mut rng, &field);
        assert!(t.position.abs().max_element() <= 1.0);
        assert_eq!(t.scale, Vec3::splat(0.5));
    }
}

#[test]
fn replacing_text_keeps_single_text_mesh() {
    let mut scene = built(5, Some("A"));
    let text = scene.text().unwrap().clone();
    scene.set_text(text);
    assert_eq!(scene.meshes().count(), 101);
}

#[test]
fn transform_matrix_applies_scale_then_rotation_then_translation() {
    let scene = built(11, None);
    let t = &scene.hearts()[0].transform;
    let m = t.matrix();
    let p = m.transform_point3(Vec3::X);
    let expected = t.quat() * (Vec3::X * t.scale) + t.position;
    assert!((p - expected).length() < 1e-5);
}

#[test]
fn assets_decode_font_and_png() {
    let mut png = Vec::new();
    let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
    img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    let assets = Assets::from_bytes(common::FONT_JSON.as_bytes(), &png).unwrap();
    assert_eq!((assets.matcap.width, assets.matcap.height), (2, 3));
    assert_eq!(assets.matcap.pixels.len(), 2 * 3 * 4);
    assert_eq!(&assets.matcap.pixels[..4], &[10, 20, 30, 255]);
    assert_eq!(assets.font.glyph_count(), 4);
}

#[test]
fn asset_errors_name_the_failing_part() {
    let font_err = Assets::from_bytes(b"not json", &[]).unwrap_err();
    assert!(matches!(font_err, AssetError::Font(_)));
    let image_err = Assets::from_bytes(common::FONT_JSON.as_bytes(), b"not a png").unwrap_err();
    assert!(matches!(image_err, AssetError::Image(_)));
}

fn text_triangles(name: Option<&str>) -> usize {
    built(1, name).text().unwrap().geometry.triangle_count()
}

#[test]
fn greeting_mesh_carries_the_given_name() {
    let font = common::fixture_font();
    let params = TextGeometryParams::default();
    let h = text_geometry(&font, "H", &params).unwrap().triangle_count();
    let o = text_geometry(&font, "o", &params).unwrap().triangle_count();
    let q = text_geometry(&font, "?", &params).unwrap().triangle_count();
    assert_ne!(o, q);
    assert_eq!(text_triangles(Some("HH")) - text_triangles(Some("H")), h);
    assert_eq!(text_triangles(Some("Ho")) - text_triangles(Some("H")), o);
    assert_eq!(text_triangles(Some("H")) - text_triangles(Some("")), h);
    // "null" has no glyphs in the fixture and falls back to '?'
    assert_eq!(text_triangles(None) - text_triangles(Some("")), 4 * q);
}

#[test]
fn rebuilding_replaces_previous_scene() {
    let mut scene = built(3, Some("H"));
    let mut rng = StdRng::seed_from_u64(4);
    build_scene(
        &mut scene,
        &fixture_assets(),
        Some("HH"),
        &SceneConfig::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(scene.hearts().len(), 100);
    assert_eq!(scene.meshes().count(), 101);
    assert_eq!(
        scene.text().unwrap().geometry.triangle_count(),
        text_triangles(Some("HH"))
    );
}
