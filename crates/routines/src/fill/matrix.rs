//! Fill two-dimensional storage with the index sum `i + j`.
//!
//! ## Purpose
//!
//! Three entry points share one contract, `slot(i, j) = i + j` for every
//! `i < rows` and `j < cols`:
//!
//! * [`fill_matrix`] over a slice of rows (`[[T; M]; N]`, `Vec<Vec<T>>`, ...).
//! * [`fill_row_major`] over a flat buffer indexed `i * cols + j`.
//! * [`Grid::fill_index_sum`] over an owned grid.
//!
//! ## Invariants
//!
//! * Slots outside the `rows × cols` region are not written.
//! * On error nothing is written.

// External dependencies
use num_traits::NumCast;

// Internal dependencies
use crate::primitives::errors::RoutineError;
use crate::primitives::grid::Grid;
use crate::primitives::validator::Validator;

/// Write `matrix[i][j] = i + j` for `i` in `[0, rows)` and `j` in `[0, cols)`.
///
/// Fails with [`RoutineError::CapacityExceeded`] when `rows` exceeds the
/// number of rows, and with [`RoutineError::RaggedRow`] when one of the
/// first `rows` rows is shorter than `cols`.
pub fn fill_matrix<T, R>(matrix: &mut [R], rows: usize, cols: usize) -> Result<(), RoutineError>
where
    T: NumCast + Copy,
    R: AsMut<[T]> + AsRef<[T]>,
{
    const WHAT: &str = "fill_matrix";

    Validator::validate_rows::<R, T>(matrix, rows, cols)?;
    check_largest::<T>(rows, cols, WHAT)?;

    for (i, row) in matrix.iter_mut().take(rows).enumerate() {
        for (j, slot) in row.as_mut().iter_mut().take(cols).enumerate() {
            *slot = index_sum(i, j, WHAT)?;
        }
    }

    Ok(())
}

/// Write `buffer[i * cols + j] = i + j` over a flat row-major buffer.
///
/// Fails with [`RoutineError::CapacityExceeded`] when the buffer holds fewer
/// than `rows * cols` slots.
pub fn fill_row_major<T: NumCast + Copy>(
    buffer: &mut [T],
    rows: usize,
    cols: usize,
) -> Result<(), RoutineError> {
    fill_flat(buffer, rows, cols, "fill_row_major")
}

impl<T: NumCast + Copy> Grid<T> {
    /// Fill every slot with the sum of its row and column indices.
    pub fn fill_index_sum(&mut self) -> Result<(), RoutineError> {
        let (rows, cols) = (self.rows(), self.cols());
        fill_flat(self.as_mut_slice(), rows, cols, "fill_index_sum")
    }
}

// Row-major fill shared by flat buffers and grids; `what` labels overflow errors.
fn fill_flat<T: NumCast + Copy>(
    buffer: &mut [T],
    rows: usize,
    cols: usize,
    what: &'static str,
) -> Result<(), RoutineError> {
    Validator::validate_row_major(buffer.len(), rows, cols)?;
    check_largest::<T>(rows, cols, what)?;

    if cols == 0 {
        return Ok(());
    }

    for (i, row) in buffer.chunks_exact_mut(cols).take(rows).enumerate() {
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = index_sum(i, j, what)?;
        }
    }

    Ok(())
}

// The largest value written is (rows - 1) + (cols - 1).
fn check_largest<T: NumCast>(
    rows: usize,
    cols: usize,
    what: &'static str,
) -> Result<(), RoutineError> {
    if rows > 0 && cols > 0 {
        index_sum::<T>(rows - 1, cols - 1, what)?;
    }
    Ok(())
}

#[inline]
fn index_sum<T: NumCast>(i: usize, j: usize, what: &'static str) -> Result<T, RoutineError> {
    i.checked_add(j)
        .and_then(|v| <T as NumCast>::from(v))
        .ok_or(RoutineError::Overflow(what))
}
