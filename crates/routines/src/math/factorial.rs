//! Recursive factorial with overflow detection.
//!
//! ## Purpose
//!
//! Computes `n!` for any primitive integer type. Values `n <= 1` (including
//! every negative value) hit the base case and yield 1.
//!
//! ## Design notes
//!
//! * **Recursive**: One checked multiplication per level, depth `n - 1`.
//! * **Bounded depth**: The running product is carried down the recursion, so
//!   an overflowing input fails after a handful of levels instead of first
//!   descending all the way to the base case.
//!
//! ## Invariants
//!
//! * `factorial(n) == n * factorial(n - 1)` whenever both sides fit in `T`.
//!
//! ## Non-goals
//!
//! * Arbitrary precision. Use a big-integer crate for `n!` beyond `u128`.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::RoutineError;

/// Compute `n!`.
///
/// Returns 1 when `n <= 1`, otherwise `n * factorial(n - 1)`. Fails with
/// [`RoutineError::Overflow`] when the product does not fit in `T`.
pub fn factorial<T: PrimInt>(n: T) -> Result<T, RoutineError> {
    descend(n, T::one())
}

// Multiply the accumulated product by `n`, then recurse on `n - 1`.
fn descend<T: PrimInt>(n: T, acc: T) -> Result<T, RoutineError> {
    if n <= T::one() {
        return Ok(acc);
    }

    let acc = acc
        .checked_mul(&n)
        .ok_or(RoutineError::Overflow("factorial"))?;
    descend(n - T::one(), acc)
}
