use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLEANUP_EROSION_RADIUS, DEFAULT_ISLAND_EROSION_RADIUS, DEFAULT_THRESHOLD,
    PACKED_LANE_COUNT,
};
use crate::error::{MatteError, Result};
use crate::labeling::LabelStrategy;

/// Where the initial foreground mask comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskSource {
    /// `min(R² + G² + B², 255) > threshold`.
    #[default]
    Brightness,
    /// One lane of the packed image used as-is (3 = alpha).
    Channel(usize),
}

impl std::fmt::Display for MaskSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brightness => write!(f, "Brightness"),
            Self::Channel(lane) => write!(f, "Channel {lane}"),
        }
    }
}

/// Parameters for foreground isolation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsolationConfig {
    /// Brightness threshold in [0, 255] for `MaskSource::Brightness`.
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    /// Disc radius of the erosion that splits the mask into islands.
    #[serde(default = "default_island_erosion_radius")]
    pub island_erosion_radius: i32,
    /// Disc radius of the erosion that trims the final mask edges.
    #[serde(default = "default_cleanup_erosion_radius")]
    pub cleanup_erosion_radius: i32,
    #[serde(default)]
    pub labeling: LabelStrategy,
    #[serde(default)]
    pub mask_source: MaskSource,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}
fn default_island_erosion_radius() -> i32 {
    DEFAULT_ISLAND_EROSION_RADIUS
}
fn default_cleanup_erosion_radius() -> i32 {
    DEFAULT_CLEANUP_EROSION_RADIUS
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            island_erosion_radius: DEFAULT_ISLAND_EROSION_RADIUS,
            cleanup_erosion_radius: DEFAULT_CLEANUP_EROSION_RADIUS,
            labeling: LabelStrategy::default(),
            mask_source: MaskSource::default(),
        }
    }
}

impl IsolationConfig {
    /// Check every parameter range.
    pub fn validate(&self) -> Result<()> {
        self.threshold_u8()?;
        for (name, radius) in [
            ("island_erosion_radius", self.island_erosion_radius),
            ("cleanup_erosion_radius", self.cleanup_erosion_radius),
        ] {
            if radius < 0 {
                return Err(MatteError::InvalidArgument(format!(
                    "{name} must be >= 0, got {radius}"
                )));
            }
        }
        if let MaskSource::Channel(lane) = self.mask_source {
            if lane >= PACKED_LANE_COUNT {
                return Err(MatteError::InvalidArgument(format!(
                    "mask channel must be in 0..{PACKED_LANE_COUNT}, got {lane}"
                )));
            }
        }
        Ok(())
    }

    pub fn threshold_u8(&self) -> Result<u8> {
        u8::try_from(self.threshold).map_err(|_| {
            MatteError::InvalidArgument(format!(
                "threshold must be in [0, 255], got {}",
                self.threshold
            ))
        })
    }
}
