/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Bit that marks a mask sample as foreground (values >= 128).
pub const FOREGROUND_BIT: u8 = 0x80;

/// Value written to binary masks where a test holds.
pub const MASK_ON: u8 = 0xFF;

/// Label id reserved for unlabeled / background cells.
pub const BACKGROUND_LABEL: u32 = 0;

/// Number of 8-bit lanes in a packed pixel (R, G, B, A).
pub const PACKED_LANE_COUNT: usize = 4;

/// Lane index of the alpha channel in a packed pixel.
pub const ALPHA_LANE: usize = 3;

/// Mask selecting the R, G and B lanes of a packed pixel.
pub const RGB_LANES_MASK: u32 = 0x00FF_FFFF;

/// Fully opaque alpha lane.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Golden ratio conjugate, used to step palette hues.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// HSV saturation of generated palette colors.
pub const PALETTE_SATURATION: f64 = 0.65;

/// HSV value of generated palette colors.
pub const PALETTE_VALUE: f64 = 0.95;

/// Palette entry reserved for label 0 (black).
pub const PALETTE_BACKGROUND: u32 = 0x00_0000;

/// Default brightness threshold for the initial mask.
pub const DEFAULT_THRESHOLD: u32 = 200;

/// Default disc radius used to break thin bridges before labeling.
pub const DEFAULT_ISLAND_EROSION_RADIUS: i32 = 10;

/// Default disc radius used to clean up the final mask edges.
pub const DEFAULT_CLEANUP_EROSION_RADIUS: i32 = 3;
