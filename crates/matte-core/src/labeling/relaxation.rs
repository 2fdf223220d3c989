//! Forward/backward sweep relaxation shared by the labeler and the expander.
//!
//! A pass is one forward raster sweep (top to bottom, left to right)
//! followed by one backward sweep (bottom to top, right to left). Within a
//! sweep, assignments are visible to the cells visited after them. Passes
//! repeat until one makes no assignment.

use crate::buffer::{is_foreground, Labels, Plane};
use crate::consts::BACKGROUND_LABEL;
use crate::error::{MatteError, Result};

/// Upper bound on passes for an `h x w` buffer.
///
/// Every pass except the last assigns at least one of the `h * w` cells, so
/// exceeding this means the assignment rule is not monotonic.
pub fn pass_limit(h: usize, w: usize) -> usize {
    h.saturating_mul(w).saturating_add(1)
}

/// Run sweeps until no unlabeled cell is assigned.
///
/// `assign` is asked about every cell whose label is still 0 and returns the
/// label to give it, if any. Labeled cells are never revisited. Returns the
/// number of passes performed, including the final quiet one.
pub fn relax<F>(labels: &mut Labels, assign: F) -> Result<usize>
where
    F: FnMut(&Labels, usize, usize) -> Option<u32>,
{
    let (h, w) = labels.dim();
    relax_bounded(labels, pass_limit(h, w), assign)
}

/// [`relax`] with an explicit pass budget; fails with `NonTermination` when
/// the budget is spent before a quiet pass.
pub fn relax_bounded<F>(labels: &mut Labels, max_passes: usize, mut assign: F) -> Result<usize>
where
    F: FnMut(&Labels, usize, usize) -> Option<u32>,
{
    let (h, w) = labels.dim();

    for pass in 1..=max_passes {
        let mut changed = false;

        for row in 0..h {
            for col in 0..w {
                changed |= visit(labels, &mut assign, row, col);
            }
        }
        for row in (0..h).rev() {
            for col in (0..w).rev() {
                changed |= visit(labels, &mut assign, row, col);
            }
        }

        if !changed {
            return Ok(pass);
        }
    }

    Err(MatteError::NonTermination { passes: max_passes })
}

fn visit<F>(labels: &mut Labels, assign: &mut F, row: usize, col: usize) -> bool
where
    F: FnMut(&Labels, usize, usize) -> Option<u32>,
{
    if labels[[row, col]] != BACKGROUND_LABEL {
        return false;
    }
    match assign(labels, row, col) {
        Some(label) if label != BACKGROUND_LABEL => {
            labels[[row, col]] = label;
            true
        }
        _ => false,
    }
}

/// 4-connected neighbors of `(row, col)` inside an `h x w` grid, in the
/// order left, right, up, down.
pub fn neighbors(
    h: usize,
    w: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let left = (col > 0).then(|| (row, col - 1));
    let right = (col + 1 < w).then(|| (row, col + 1));
    let up = (row > 0).then(|| (row - 1, col));
    let down = (row + 1 < h).then(|| (row + 1, col));
    [left, right, up, down].into_iter().flatten()
}

/// True if any foreground 4-neighbor of `(row, col)` carries `color`.
pub fn touches_color(mask: &Plane, labels: &Labels, row: usize, col: usize, color: u32) -> bool {
    let (h, w) = labels.dim();
    neighbors(h, w, row, col).any(|(r, c)| labels[[r, c]] == color && is_foreground(mask[[r, c]]))
}

/// First non-zero label among the 4-neighbors of `(row, col)`, checked left,
/// right, up, down.
pub fn first_labeled_neighbor(labels: &Labels, row: usize, col: usize) -> Option<u32> {
    let (h, w) = labels.dim();
    neighbors(h, w, row, col)
        .map(|(r, c)| labels[[r, c]])
        .find(|&label| label != BACKGROUND_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_order_and_edges() {
        let inner: Vec<_> = neighbors(3, 3, 1, 1).collect();
        assert_eq!(inner, vec![(1, 0), (1, 2), (0, 1), (2, 1)]);

        let corner: Vec<_> = neighbors(3, 3, 0, 0).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn first_labeled_neighbor_prefers_left() {
        let mut labels = Labels::zeros((3, 3));
        labels[[1, 0]] = 7;
        labels[[0, 1]] = 4;
        assert_eq!(first_labeled_neighbor(&labels, 1, 1), Some(7));
        assert_eq!(first_labeled_neighbor(&labels, 2, 2), None);
    }

    fn grow_from_right(labels: &Labels, row: usize, col: usize) -> Option<u32> {
        let (_, w) = labels.dim();
        (col + 1 < w && labels[[row, col + 1]] == 1).then_some(1)
    }

    #[test]
    fn relax_reaches_fixed_point() {
        let mut labels = Labels::zeros((1, 3));
        labels[[0, 2]] = 1;
        let passes = relax(&mut labels, grow_from_right).unwrap();
        assert_eq!(passes, 2);
        assert!(labels.iter().all(|&l| l == 1));
    }

    #[test]
    fn exhausted_budget_is_non_termination() {
        let mut labels = Labels::zeros((1, 3));
        labels[[0, 2]] = 1;
        let err = relax_bounded(&mut labels, 1, grow_from_right).unwrap_err();
        assert!(matches!(err, MatteError::NonTermination { passes: 1 }));
    }
}
