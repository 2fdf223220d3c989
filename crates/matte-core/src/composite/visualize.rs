use crate::buffer::{map_pixels, PackedImage};
use crate::color::palette::generate_palette;
use crate::consts::OPAQUE_ALPHA;
use crate::error::{MatteError, Result};
use crate::labeling::LabelMap;

/// Render labels as opaque colors: pixel = `palette[label] | 0xFF000000`.
///
/// Label 0 uses `palette[0]`. Fails if any label has no palette entry.
pub fn visualize(map: &LabelMap, palette: &[u32]) -> Result<PackedImage> {
    let needed = map.labels.iter().copied().max().unwrap_or(0).max(map.count) as usize;
    if needed >= palette.len() {
        return Err(MatteError::InvalidArgument(format!(
            "palette has {} entries but label {} needs one",
            palette.len(),
            needed
        )));
    }
    Ok(map_pixels(&map.labels, |&label| {
        palette[label as usize] | OPAQUE_ALPHA
    }))
}

/// Render labels with a freshly generated palette of `map.count` colors.
pub fn visualize_labels(map: &LabelMap) -> Result<PackedImage> {
    let palette = generate_palette(map.count as usize);
    visualize(map, &palette)
}
