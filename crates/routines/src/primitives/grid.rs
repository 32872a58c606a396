//! Row-major two-dimensional storage.
//!
//! A `Grid` owns a flat buffer of `rows * cols` slots laid out row after row,
//! the same layout a fixed `[[T; M]; N]` array has in memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use core::slice::ChunksExact;
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::RoutineError;

/// Owned `rows × cols` buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> Grid<T> {
    /// Allocate a zeroed grid.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self, RoutineError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(RoutineError::Overflow("rows * cols"))?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        })
    }
}

impl<T> Grid<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Slot at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> ChunksExact<'_, T> {
        // chunks_exact rejects a zero chunk size.
        self.data.chunks_exact(self.cols.max(1))
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The underlying row-major buffer, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
