//! Input validation for routine arguments and walkthrough configuration.
//!
//! ## Purpose
//!
//! This module centralises the bounds checks shared by the fill routines,
//! the roster helpers, the loop helpers and the walkthrough builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before mutation**: Callers validate the whole region before writing a single slot.
//!
//! ## Non-goals
//!
//! * This module does not resize containers or correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// Internal dependencies
use crate::primitives::errors::RoutineError;

// ============================================================================
// Validator
// ============================================================================

/// Largest accepted walkthrough dimension.
pub const MAX_DIMENSION: usize = 4096;

/// Validation utility for routine arguments.
///
/// Provides static methods that return `Result<(), RoutineError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Container Validation
    // ========================================================================

    /// Validate that a one-dimensional container can hold `requested` slots.
    pub fn validate_capacity(
        what: &'static str,
        requested: usize,
        capacity: usize,
    ) -> Result<(), RoutineError> {
        if requested > capacity {
            return Err(RoutineError::CapacityExceeded {
                what,
                requested,
                capacity,
            });
        }
        Ok(())
    }

    /// Validate that the first `rows` rows of a matrix each hold `cols` slots.
    pub fn validate_rows<R: AsRef<[T]>, T>(
        matrix: &[R],
        rows: usize,
        cols: usize,
    ) -> Result<(), RoutineError> {
        Self::validate_capacity("rows", rows, matrix.len())?;

        for (row, slots) in matrix.iter().take(rows).enumerate() {
            let len = slots.as_ref().len();
            if len < cols {
                return Err(RoutineError::RaggedRow {
                    row,
                    len,
                    required: cols,
                });
            }
        }

        Ok(())
    }

    /// Validate that a flat row-major buffer can hold `rows * cols` slots.
    pub fn validate_row_major(len: usize, rows: usize, cols: usize) -> Result<(), RoutineError> {
        let requested = rows
            .checked_mul(cols)
            .ok_or(RoutineError::Overflow("rows * cols"))?;
        Self::validate_capacity("buffer", requested, len)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a walkthrough dimension (length or width).
    pub fn validate_dimension(parameter: &'static str, value: usize) -> Result<(), RoutineError> {
        if value == 0 || value > MAX_DIMENSION {
            return Err(RoutineError::InvalidDimension {
                parameter,
                got: value,
                max: MAX_DIMENSION,
            });
        }
        Ok(())
    }

    /// Validate the exit target of an unbounded counting loop.
    ///
    /// A target of zero is never reached by a counter that starts at zero and
    /// increments before testing.
    pub fn validate_exit_target(target: u64) -> Result<(), RoutineError> {
        if target == 0 {
            return Err(RoutineError::InvalidArgument(
                "exit target must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RoutineError> {
        if let Some(param) = duplicate_param {
            return Err(RoutineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
