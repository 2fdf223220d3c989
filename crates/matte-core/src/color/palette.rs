use crate::consts::{
    GOLDEN_RATIO_CONJUGATE, PALETTE_BACKGROUND, PALETTE_SATURATION, PALETTE_VALUE,
};

/// Generate `count + 1` packed RGB24 colors (0xBBGGRR).
///
/// Entry 0 is black and stands for "no label". Entry `k` has hue
/// `frac(k * 0.618...)`, saturation 0.65 and value 0.95, so neighboring ids
/// land far apart on the color wheel.
pub fn generate_palette(count: usize) -> Vec<u32> {
    let mut palette = Vec::with_capacity(count + 1);
    palette.push(PALETTE_BACKGROUND);

    let mut hue = 0.0_f64;
    for _ in 0..count {
        hue = (hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
        palette.push(hsv_to_rgb24(hue, PALETTE_SATURATION, PALETTE_VALUE));
    }
    palette
}

/// Convert HSV (each in [0, 1]) to a packed RGB24 value with red in the low
/// byte.
pub fn hsv_to_rgb24(h: f64, s: f64, v: f64) -> u32 {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match hue_sector(h) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    to_byte(r) | (to_byte(g) << 8) | (to_byte(b) << 16)
}

/// Sector (0..6) of the HSV wheel a hue falls in.
pub fn hue_sector(h: f64) -> u32 {
    ((h * 6.0).floor() as i64).rem_euclid(6) as u32
}

fn to_byte(c: f64) -> u32 {
    (c * 255.0).round().clamp(0.0, 255.0) as u32
}
