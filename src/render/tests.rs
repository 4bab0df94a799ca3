use std::path::{Path, PathBuf};

use image::RgbaImage;
use tempfile::TempDir;

use super::projection::{PixelPoint, Projection};
use super::*;
use crate::mapper::GeoPosition;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::new(width, height).save(&path).unwrap();
    path
}

#[test]
fn origin_maps_to_centre() {
    let projection = Projection::globe(720, 360);
    let p = projection.project(GeoPosition::new(0.0, 0.0));
    assert_eq!(p, PixelPoint { x: 360.0, y: 180.0 });
}

#[test]
fn corners_follow_world_bounds() {
    let projection = Projection::globe(720, 360);

    let top_left = projection.project(GeoPosition::new(90.0, -180.0));
    assert_eq!(top_left, PixelPoint { x: 0.0, y: 0.0 });

    let bottom_right = projection.project(GeoPosition::new(-90.0, 180.0));
    assert_eq!(bottom_right, PixelPoint { x: 720.0, y: 360.0 });

    let bottom_left = projection.world_to_pixel(-180.0, -90.0);
    assert_eq!(bottom_left, PixelPoint { x: 0.0, y: 360.0 });
}

#[test]
fn longitude_is_horizontal() {
    let projection = Projection::globe(720, 360);
    // Indianapolis sits west of Greenwich and north of the equator.
    let p = projection.project(GeoPosition::new(39.768403, -86.158068));
    assert!((p.x - (180.0 - 86.158068) * 2.0).abs() < 1e-9);
    assert!((p.y - (90.0 - 39.768403) * 2.0).abs() < 1e-9);
    assert!(p.x < 360.0 && p.y < 180.0);
}

#[test]
fn non_square_canvas_scales_axes_independently() {
    let projection = Projection::globe(1000, 250);
    let p = projection.project(GeoPosition::new(45.0, 90.0));
    assert!((p.x - 750.0).abs() < 1e-9);
    assert!((p.y - 62.5).abs() < 1e-9);
}

#[test]
fn canvas_loads_background() {
    let dir = TempDir::new().unwrap();
    let map = write_png(dir.path(), "map.png", 36, 18);

    let canvas = Canvas::init(720, 360, &map).unwrap();
    assert_eq!(canvas.background().width, 36);
    assert_eq!(canvas.background().height, 18);
    assert_eq!(canvas.background().mime, "image/png");
    assert_eq!(canvas.projection().width_px(), 720);
    assert!(canvas.markers().is_empty());
}

#[test]
fn missing_background_fails() {
    let dir = TempDir::new().unwrap();
    let err = Canvas::init(720, 360, &dir.path().join("map.gif")).unwrap_err();
    assert!(matches!(err, RenderError::Image { .. }));
    assert!(err.to_string().contains("map.gif"));
}

#[test]
fn garbage_background_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.gif");
    std::fs::write(&path, b"definitely not an image").unwrap();
    assert!(matches!(
        Canvas::init(720, 360, &path),
        Err(RenderError::Image { .. })
    ));
}

#[test]
fn zero_sized_canvas_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_png(dir.path(), "map.png", 4, 2);
    assert!(matches!(
        Canvas::init(0, 360, &map),
        Err(RenderError::EmptyCanvas { width: 0, .. })
    ));
}

#[test]
fn markers_accumulate_in_order() {
    let dir = TempDir::new().unwrap();
    let map = write_png(dir.path(), "map.png", 4, 2);
    let icon = write_png(dir.path(), "iss.png", 3, 3);

    let mut canvas = Canvas::init(720, 360, &map).unwrap();
    let shape = canvas.register_shape(&icon).unwrap();
    assert_eq!(shape.index(), 0);
    assert_eq!(canvas.shape(shape).unwrap().width, 3);

    let iss = GeoPosition::new(10.0, 20.0);
    let indy = GeoPosition::new(39.768403, -86.158068);
    canvas.place_marker(iss, Glyph::Icon(shape), Some(90.0));
    canvas.place_labeled_dot(indy, MarkerColor::Yellow, 5, "Tue Nov 14 22:13:20 2023");

    let markers = canvas.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].glyph, Glyph::Icon(shape));
    assert_eq!(markers[0].heading_deg, Some(90.0));
    assert_eq!(markers[0].label, None);
    assert_eq!(markers[1].glyph, Glyph::Dot { radius_px: 5 });
    assert_eq!(markers[1].color, Some(MarkerColor::Yellow));
    assert_eq!(markers[1].label.as_deref(), Some("Tue Nov 14 22:13:20 2023"));
}

#[test]
fn missing_icon_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_png(dir.path(), "map.png", 4, 2);
    let mut canvas = Canvas::init(720, 360, &map).unwrap();
    assert!(canvas.register_shape(&dir.path().join("iss.gif")).is_err());
}

#[test]
fn colours_render_as_css_names() {
    assert_eq!(MarkerColor::Yellow.to_string(), "yellow");
    assert_eq!(MarkerColor::default(), MarkerColor::Yellow);
}
