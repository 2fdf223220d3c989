use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::{is_foreground, Labels, Plane};
use crate::consts::BACKGROUND_LABEL;
use crate::error::{MatteError, Result};

use super::relaxation::{neighbors, relax, touches_color};

/// How a discovered component is filled.
///
/// Both strategies yield the same label map; `Relaxation` is the sweep
/// algorithm and is much slower on large images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStrategy {
    /// Breadth-first fill from the seed.
    #[default]
    FloodFill,
    /// Repeated forward/backward sweeps until the label stops spreading.
    Relaxation,
}

impl std::fmt::Display for LabelStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FloodFill => write!(f, "Flood Fill"),
            Self::Relaxation => write!(f, "Relaxation"),
        }
    }
}

/// Connected-component labels of a mask.
///
/// Ids `1..=count` are dense and follow raster discovery order; 0 is
/// background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    pub count: u32,
    pub labels: Labels,
}

/// Statistics for a single connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentStats {
    /// Label id of this component.
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
}

impl LabelMap {
    pub fn width(&self) -> usize {
        self.labels.ncols()
    }

    pub fn height(&self) -> usize {
        self.labels.nrows()
    }

    /// Per-label area and bounding box, ordered by label id.
    ///
    /// Labels that own no pixel are left out.
    pub fn component_stats(&self) -> Vec<ComponentStats> {
        let mut slots: Vec<Option<ComponentStats>> = vec![None; self.count as usize];

        for ((row, col), &label) in self.labels.indexed_iter() {
            if label == BACKGROUND_LABEL || label > self.count {
                continue;
            }
            let entry = slots[label as usize - 1].get_or_insert(ComponentStats {
                label,
                area: 0,
                bbox: (row, row, col, col),
            });
            entry.area += 1;
            entry.bbox.0 = entry.bbox.0.min(row);
            entry.bbox.1 = entry.bbox.1.max(row);
            entry.bbox.2 = entry.bbox.2.min(col);
            entry.bbox.3 = entry.bbox.3.max(col);
        }

        slots.into_iter().flatten().collect()
    }
}

/// Label the 4-connected foreground regions of `mask` with the default
/// strategy.
pub fn label_components(mask: &Plane) -> Result<LabelMap> {
    label_components_with(mask, LabelStrategy::default())
}

/// Label the 4-connected foreground regions of `mask`.
///
/// Cells are scanned in raster order; each foreground cell that is still
/// unlabeled seeds the next id, which is then filled across its component
/// before the scan continues. Every cell before the scan position is already
/// resolved, so continuing the scan finds the same seeds as restarting it.
pub fn label_components_with(mask: &Plane, strategy: LabelStrategy) -> Result<LabelMap> {
    let (h, w) = mask.dim();
    let mut labels = Labels::zeros((h, w));
    let mut count: u32 = 0;

    for row in 0..h {
        for col in 0..w {
            if !is_foreground(mask[[row, col]]) || labels[[row, col]] != BACKGROUND_LABEL {
                continue;
            }
            count = count.checked_add(1).ok_or(MatteError::LabelOverflow {
                limit: u32::MAX as u64,
            })?;

            match strategy {
                LabelStrategy::FloodFill => queue_fill(mask, &mut labels, row, col, count),
                LabelStrategy::Relaxation => {
                    let passes = relaxation_fill(mask, &mut labels, row, col, count)?;
                    debug!(label = count, passes, "Relaxation fill converged");
                }
            }
        }
    }

    debug!(labels = count, h, w, strategy = %strategy, "Connected components labeled");
    Ok(LabelMap { count, labels })
}

fn queue_fill(mask: &Plane, labels: &mut Labels, row: usize, col: usize, color: u32) {
    let (h, w) = mask.dim();
    let mut queue = VecDeque::new();
    labels[[row, col]] = color;
    queue.push_back((row, col));

    while let Some((r, c)) = queue.pop_front() {
        for (nr, nc) in neighbors(h, w, r, c) {
            if labels[[nr, nc]] == BACKGROUND_LABEL && is_foreground(mask[[nr, nc]]) {
                labels[[nr, nc]] = color;
                queue.push_back((nr, nc));
            }
        }
    }
}

fn relaxation_fill(
    mask: &Plane,
    labels: &mut Labels,
    row: usize,
    col: usize,
    color: u32,
) -> Result<usize> {
    labels[[row, col]] = color;
    relax(labels, |labels, r, c| {
        (is_foreground(mask[[r, c]]) && touches_color(mask, labels, r, c, color)).then_some(color)
    })
}
