#![cfg(feature = "dev")]
//! Tests for the fill routines.
//!
//! These tests verify:
//! - `fill_sequence` writes `2k` into the first `size` slots
//! - `fill_matrix` writes `i + j` over arrays and nested vectors
//! - `fill_row_major` and `Grid::fill_index_sum` over flat storage
//! - Capacity and overflow errors leave the container untouched
//!
//! ## Test Organization
//!
//! 1. **Sequence Fill** - Known values, partial fill, errors
//! 2. **Matrix Fill** - Arrays, vectors, ragged rows, errors
//! 3. **Row-Major Fill** - Flat buffers and grids

use routines::internals::fill::matrix::{fill_matrix, fill_row_major};
use routines::internals::fill::sequence::fill_sequence;
use routines::internals::primitives::errors::RoutineError;
use routines::internals::primitives::grid::Grid;

// ============================================================================
// Sequence Fill Tests
// ============================================================================

/// Test the canonical five-slot fill.
#[test]
fn test_fill_sequence_five_slots() {
    let mut t = [0i32; 5];
    fill_sequence(&mut t, 5).unwrap();

    assert_eq!(t, [0, 2, 4, 6, 8]);
}

/// Test that slots beyond `size` are left alone.
#[test]
fn test_fill_sequence_partial() {
    let mut t = vec![-1i64; 6];
    fill_sequence(&mut t, 3).unwrap();

    assert_eq!(t, vec![0, 2, 4, -1, -1, -1]);
}

/// Test every size up to the capacity.
#[test]
fn test_fill_sequence_property() {
    for size in 0..=32usize {
        let mut t = vec![0u64; 32];
        fill_sequence(&mut t, size).unwrap();
        for (k, val) in t.iter().enumerate().take(size) {
            assert_eq!(*val, 2 * k as u64);
        }
    }
}

/// Test zero size on an empty sequence.
#[test]
fn test_fill_sequence_empty() {
    let mut t: [u8; 0] = [];
    assert!(fill_sequence(&mut t, 0).is_ok());
}

/// Test floating-point slots.
#[test]
fn test_fill_sequence_floats() {
    let mut t = [0.0f64; 4];
    fill_sequence(&mut t, 4).unwrap();

    assert_eq!(t, [0.0, 2.0, 4.0, 6.0]);
}

/// Test capacity error.
///
/// Verifies that asking for more slots than available fails without writing.
#[test]
fn test_fill_sequence_capacity_exceeded() {
    let mut t = [7i32; 3];
    let res = fill_sequence(&mut t, 5);

    assert_eq!(
        res,
        Err(RoutineError::CapacityExceeded {
            what: "sequence",
            requested: 5,
            capacity: 3,
        })
    );
    assert_eq!(t, [7, 7, 7], "Sequence must be unchanged on error");
}

/// Test overflow error.
///
/// Verifies that 2k beyond the element type fails without writing.
#[test]
fn test_fill_sequence_overflow() {
    let mut t = [1u8; 200];
    let res = fill_sequence(&mut t, 200);

    assert_eq!(res, Err(RoutineError::Overflow("fill_sequence")));
    assert!(t.iter().all(|&v| v == 1));
}

// ============================================================================
// Matrix Fill Tests
// ============================================================================

/// Test the canonical 2x3 fill.
#[test]
fn test_fill_matrix_two_by_three() {
    let mut mat = [[0i32; 3]; 2];
    fill_matrix(&mut mat, 2, 3).unwrap();

    assert_eq!(mat, [[0, 1, 2], [1, 2, 3]]);
}

/// Test nested vectors.
#[test]
fn test_fill_matrix_vectors() {
    let mut mat = vec![vec![0u32; 3]; 5];
    fill_matrix(&mut mat, 5, 3).unwrap();

    for (i, row) in mat.iter().enumerate() {
        for (j, val) in row.iter().enumerate() {
            assert_eq!(*val as usize, i + j);
        }
    }
}

/// Test that slots outside the region are left alone.
#[test]
fn test_fill_matrix_subregion() {
    let mut mat = [[9i16; 4]; 3];
    fill_matrix(&mut mat, 2, 2).unwrap();

    assert_eq!(mat, [[0, 1, 9, 9], [1, 2, 9, 9], [9, 9, 9, 9]]);
}

/// Test zero dimensions.
#[test]
fn test_fill_matrix_zero_dimensions() {
    let mut mat = [[5i32; 2]; 2];
    fill_matrix(&mut mat, 0, 2).unwrap();
    fill_matrix(&mut mat, 2, 0).unwrap();

    assert_eq!(mat, [[5, 5], [5, 5]]);
}

/// Test too many rows.
#[test]
fn test_fill_matrix_too_many_rows() {
    let mut mat = [[5i32; 3]; 2];
    let original = mat;
    let res = fill_matrix(&mut mat, 3, 3);

    assert_eq!(
        res,
        Err(RoutineError::CapacityExceeded {
            what: "rows",
            requested: 3,
            capacity: 2,
        })
    );
    assert_eq!(mat, original, "Matrix must be unchanged on error");
}

/// Test overflow error.
///
/// Verifies that an index sum beyond the element type fails without writing
/// any row, including the rows whose sums would still fit.
#[test]
fn test_fill_matrix_overflow() {
    let mut mat = vec![vec![3u8; 200]; 200];
    let res = fill_matrix(&mut mat, 200, 200);

    assert_eq!(res, Err(RoutineError::Overflow("fill_matrix")));
    assert!(
        mat.iter().flatten().all(|&v| v == 3),
        "Matrix must be unchanged on error"
    );
}

/// Test the largest representable index sum.
#[test]
fn test_fill_matrix_largest_fitting_sum() {
    let mut mat = vec![vec![0u8; 128]; 128];
    fill_matrix(&mut mat, 128, 128).unwrap();

    assert_eq!(mat[127][127], 254);
}

/// Test a short row.
///
/// Verifies that a ragged row is reported and no row is written.
#[test]
fn test_fill_matrix_ragged_row() {
    let mut mat = vec![vec![4i32; 3], vec![4i32; 3], vec![4i32; 1]];
    let res = fill_matrix(&mut mat, 3, 3);

    assert_eq!(
        res,
        Err(RoutineError::RaggedRow {
            row: 2,
            len: 1,
            required: 3,
        })
    );
    assert!(mat.iter().flatten().all(|&v| v == 4));
}

/// Test that rows beyond `rows` may be short.
#[test]
fn test_fill_matrix_ignores_rows_outside_region() {
    let mut mat = vec![vec![0i32; 2], vec![0i32; 2], vec![]];
    assert!(fill_matrix(&mut mat, 2, 2).is_ok());
}

// ============================================================================
// Row-Major Fill Tests
// ============================================================================

/// Test a flat buffer.
#[test]
fn test_fill_row_major_buffer() {
    let mut buf = [0i32; 6];
    fill_row_major(&mut buf, 2, 3).unwrap();

    assert_eq!(buf, [0, 1, 2, 1, 2, 3]);
}

/// Test a buffer that is too small.
#[test]
fn test_fill_row_major_capacity_exceeded() {
    let mut buf = [8i32; 5];
    let original = buf;
    let res = fill_row_major(&mut buf, 2, 3);

    assert_eq!(
        res,
        Err(RoutineError::CapacityExceeded {
            what: "buffer",
            requested: 6,
            capacity: 5,
        })
    );
    assert_eq!(buf, original, "Buffer must be unchanged on error");
}

/// Test overflow error on a flat buffer.
///
/// Verifies that the error names the row-major fill and nothing is written.
#[test]
fn test_fill_row_major_overflow() {
    let mut buf = vec![3u8; 200 * 200];
    let res = fill_row_major(&mut buf, 200, 200);

    assert_eq!(res, Err(RoutineError::Overflow("fill_row_major")));
    assert!(
        buf.iter().all(|&v| v == 3),
        "Buffer must be unchanged on error"
    );
}

/// Test dimension overflow.
#[test]
fn test_fill_row_major_dimension_overflow() {
    let mut buf = [0i32; 1];
    let res = fill_row_major(&mut buf, usize::MAX, 2);

    assert_eq!(res, Err(RoutineError::Overflow("rows * cols")));
}

/// Test the grid wrapper.
#[test]
fn test_grid_fill_index_sum() {
    let mut grid: Grid<i64> = Grid::zeroed(5, 3).unwrap();
    grid.fill_index_sum().unwrap();

    assert_eq!(grid[(0, 0)], 0);
    assert_eq!(grid[(4, 2)], 6);
    assert_eq!(grid.row(1), Some(&[1i64, 2, 3][..]));
}

/// Test overflow error on a grid.
///
/// Verifies that the error names the grid fill and nothing is written.
#[test]
fn test_grid_fill_index_sum_overflow() {
    let mut grid: Grid<u8> = Grid::zeroed(200, 200).unwrap();
    let res = grid.fill_index_sum();

    assert_eq!(res, Err(RoutineError::Overflow("fill_index_sum")));
    assert!(
        grid.as_slice().iter().all(|&v| v == 0),
        "Grid must be unchanged on error"
    );
}
