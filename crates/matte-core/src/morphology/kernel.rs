use ndarray::Array2;

use crate::error::{MatteError, Result};

/// Boolean footprint used to test local mask coverage during erosion.
///
/// The origin sits at the center, so `offset_x == offset_y == -radius`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    radius: usize,
    offset_x: isize,
    offset_y: isize,
    cells: Array2<bool>,
    sum: usize,
}

impl StructuringElement {
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Column offset of the footprint's left edge relative to the origin.
    pub fn offset_x(&self) -> isize {
        self.offset_x
    }

    /// Row offset of the footprint's top edge relative to the origin.
    pub fn offset_y(&self) -> isize {
        self.offset_y
    }

    /// Footprint cells, shape = (side, side).
    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Number of "on" cells.
    pub fn sum(&self) -> usize {
        self.sum
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }
}

/// Side length `2 * radius + 1` of a disc's bounding box, or `None` when it
/// does not fit in `usize`.
pub fn disc_side(radius: i32) -> Option<usize> {
    usize::try_from(radius).ok()?.checked_mul(2)?.checked_add(1)
}

/// Build a disc of the given radius: cell `(x, y)` relative to the center is
/// on iff `x² + y² <= radius²`.
pub fn build_disc(radius: i32) -> Result<StructuringElement> {
    if radius < 0 {
        return Err(MatteError::InvalidArgument(format!(
            "disc radius must be >= 0, got {radius}"
        )));
    }
    let side = disc_side(radius)
        .filter(|side| {
            side.checked_mul(*side)
                .is_some_and(|cells| cells <= isize::MAX as usize)
        })
        .ok_or_else(|| {
            MatteError::InvalidArgument(format!("disc radius {radius} is too large"))
        })?;
    let r = radius as i64;
    let r2 = r * r;

    let cells = Array2::from_shape_fn((side, side), |(row, col)| {
        let y = row as i64 - r;
        let x = col as i64 - r;
        x * x + y * y <= r2
    });
    let sum = cells.iter().filter(|&&on| on).count();

    Ok(StructuringElement {
        radius: radius as usize,
        offset_x: -(radius as isize),
        offset_y: -(radius as isize),
        cells,
        sum,
    })
}
