mod common;

use image::{Rgb, RgbImage};

use matte_core::buffer::{PackedImage, Plane};
use matte_core::io::image_io::{load_rgba, save_plane, save_rgba, to_rgba_image};

use common::rgba;

#[test]
fn test_save_load_roundtrip_rgba() {
    let image = PackedImage::from_shape_fn((5, 7), |(r, c)| {
        rgba((r * 40) as u8, (c * 30) as u8, 17, if (r + c) % 2 == 0 { 255 } else { 0 })
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.png");

    save_rgba(&image, &path).unwrap();
    let loaded = load_rgba(&path).unwrap();

    assert_eq!(loaded.dim(), (5, 7));
    assert_eq!(loaded, image);
}

#[test]
fn test_lane_zero_is_red() {
    let image = PackedImage::from_elem((1, 1), rgba(200, 10, 20, 255));
    let img = to_rgba_image(&image).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [200, 10, 20, 255]);
}

#[test]
fn test_load_rgb_adds_opaque_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([1, 2, 3]));
    img.put_pixel(1, 0, Rgb([250, 251, 252]));
    img.save(&path).unwrap();

    let loaded = load_rgba(&path).unwrap();
    assert_eq!(loaded[[0, 0]], rgba(1, 2, 3, 255));
    assert_eq!(loaded[[0, 1]], rgba(250, 251, 252, 255));
}

#[test]
fn test_save_plane_grayscale() {
    let plane = Plane::from_shape_fn((3, 4), |(r, c)| (r * 4 + c) as u8 * 20);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");
    save_plane(&plane, &path).unwrap();

    let gray = image::open(&path).unwrap().to_luma8();
    assert_eq!(gray.dimensions(), (4, 3));
    assert_eq!(gray.get_pixel(1, 2).0[0], plane[[2, 1]]);
    assert_eq!(gray.into_raw(), plane.iter().copied().collect::<Vec<u8>>());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_rgba(&dir.path().join("missing.png")).is_err());
}
