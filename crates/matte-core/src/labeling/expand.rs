use tracing::debug;

use crate::buffer::{ensure_same_shape, is_foreground, Labels, Plane};
use crate::error::Result;

use super::relaxation::{first_labeled_neighbor, relax};

/// Regrow labels outward through the foreground of `mask`.
///
/// Returns a new label buffer; see [`expand_labels_in_place`].
pub fn expand_labels(mask: &Plane, labels: &Labels) -> Result<Labels> {
    let mut grown = labels.clone();
    expand_labels_in_place(mask, &mut grown)?;
    Ok(grown)
}

/// Regrow labels outward through the foreground of `mask`, in place.
///
/// Each unlabeled foreground cell takes the label of its first labeled
/// 4-neighbor (left, right, up, down) during forward/backward sweeps until a
/// pass assigns nothing. Non-zero cells are never changed. Where two
/// regions reach the same cell in one sweep, the sweep order decides which
/// label it gets. Returns the number of passes.
pub fn expand_labels_in_place(mask: &Plane, labels: &mut Labels) -> Result<usize> {
    ensure_same_shape(mask, labels)?;

    let passes = relax(labels, |labels, row, col| {
        if is_foreground(mask[[row, col]]) {
            first_labeled_neighbor(labels, row, col)
        } else {
            None
        }
    })?;

    debug!(passes, "Labels expanded");
    Ok(passes)
}
