use ndarray::{Array2, ArrayViewMut1, Axis};
use rayon::prelude::*;
use tracing::debug;

use crate::buffer::Plane;
use crate::consts::{MASK_ON, PARALLEL_PIXEL_THRESHOLD};

use super::kernel::StructuringElement;

/// Threshold-weighted erosion of an 8-bit mask.
///
/// For every position where the kernel's bounding box fits entirely inside
/// the image, the raw samples under the whole box are summed into `w` and
/// the output is 255 iff `(w >> 8) >= kernel.sum()`. Positions whose box would
/// overhang an edge are never visited and stay 0, so the result always
/// carries a zero border as wide as the kernel reaches past its origin.
pub fn erode(mask: &Plane, kernel: &StructuringElement) -> Plane {
    let (h, w) = mask.dim();
    let (kh, kw) = (kernel.height(), kernel.width());
    let mut out = Plane::zeros((h, w));

    if kh > h || kw > w {
        debug!(radius = kernel.radius(), h, w, "Kernel larger than image, erosion clears the mask");
        return out;
    }

    // Kernels only come from `build_disc`, so both offsets are `-radius`.
    let origin_row = kernel.offset_y().unsigned_abs();
    let origin_col = kernel.offset_x().unsigned_abs();
    let table = integral_table(mask);
    let window = Window {
        origin_row,
        origin_col,
        kh,
        kw,
        last_row: h - kh + origin_row,
        last_col: w - kw + origin_col,
        threshold: kernel.sum() as u64,
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, line)| window.fill_row(&table, row, line));
    } else {
        for (row, line) in out.axis_iter_mut(Axis(0)).enumerate() {
            window.fill_row(&table, row, line);
        }
    }

    out
}

/// Placement of the kernel's bounding box over the image.
struct Window {
    origin_row: usize,
    origin_col: usize,
    kh: usize,
    kw: usize,
    /// Last output row/column whose box still fits inside the image.
    last_row: usize,
    last_col: usize,
    threshold: u64,
}

impl Window {
    fn fill_row(&self, table: &Array2<u64>, row: usize, mut line: ArrayViewMut1<u8>) {
        if row < self.origin_row || row > self.last_row {
            return;
        }
        let top = row - self.origin_row;
        for col in self.origin_col..=self.last_col {
            let weight = window_sum(table, top, col - self.origin_col, self.kh, self.kw);
            line[col] = if (weight >> 8) >= self.threshold { MASK_ON } else { 0 };
        }
    }
}

/// Summed-area table with a zero top row and left column: shape (h+1, w+1).
fn integral_table(mask: &Plane) -> Array2<u64> {
    let (h, w) = mask.dim();
    let mut table = Array2::<u64>::zeros((h + 1, w + 1));
    for row in 0..h {
        let mut running = 0u64;
        for col in 0..w {
            running += mask[[row, col]] as u64;
            table[[row + 1, col + 1]] = table[[row, col + 1]] + running;
        }
    }
    table
}

/// Sum of the `kh x kw` window whose top-left sample is `(top, left)`.
fn window_sum(table: &Array2<u64>, top: usize, left: usize, kh: usize, kw: usize) -> u64 {
    let bottom = top + kh;
    let right = left + kw;
    table[[bottom, right]] + table[[top, left]] - table[[top, right]] - table[[bottom, left]]
}
