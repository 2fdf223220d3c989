use matte_core::color::{generate_palette, hsv_to_rgb24, hue_sector};

const GOLDEN: f64 = 0.618_033_988_749_895;

#[test]
fn test_palette_length_and_background() {
    for count in [0usize, 1, 5, 64] {
        let palette = generate_palette(count);
        assert_eq!(palette.len(), count + 1);
        assert_eq!(palette[0], 0x000000);
    }
}

#[test]
fn test_palette_first_five_colors() {
    let palette = generate_palette(5);
    assert_eq!(
        &palette[1..],
        &[0xF28355, 0x55F2B1, 0xDF55F2, 0xD8F255, 0x55AAF2]
    );
}

#[test]
fn test_palette_hues_follow_golden_ratio() {
    let palette = generate_palette(5);
    for k in 1..=5 {
        let hue = (k as f64 * GOLDEN).fract();
        assert_eq!(palette[k], hsv_to_rgb24(hue, 0.65, 0.95), "k = {k}");
    }
}

#[test]
fn test_first_hue_is_in_sector_three() {
    assert_eq!(hue_sector(GOLDEN), 3);
}

#[test]
fn test_palette_is_deterministic() {
    assert_eq!(generate_palette(20), generate_palette(20));
    assert_eq!(&generate_palette(20)[..6], &generate_palette(5)[..]);
}

#[test]
fn test_generated_colors_are_distinct() {
    let palette = generate_palette(32);
    for i in 1..palette.len() {
        for j in i + 1..palette.len() {
            assert_ne!(palette[i], palette[j], "entries {i} and {j}");
        }
    }
}

#[test]
fn test_hsv_primaries() {
    assert_eq!(hsv_to_rgb24(0.0, 1.0, 1.0), 0x0000FF);
    assert_eq!(hsv_to_rgb24(1.0 / 3.0 + 1e-9, 1.0, 1.0), 0x00FF00);
    assert_eq!(hsv_to_rgb24(0.0, 0.0, 1.0), 0xFFFFFF);
    assert_eq!(hsv_to_rgb24(0.5, 0.3, 0.0), 0x000000);
}

#[test]
fn test_hue_one_wraps_to_red() {
    assert_eq!(hsv_to_rgb24(1.0, 1.0, 1.0), 0x0000FF);
}
