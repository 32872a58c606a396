//! Loop helpers with explicit exit conditions.
//!
//! ## Key concepts
//!
//! * **Bounded with early exit**: [`partial_sum`] iterates a fixed range and
//!   leaves as soon as the counter reaches a stop value.
//! * **Unbounded with exit**: [`count_until`] has no range; only its exit
//!   test ends it, so an unreachable target is rejected up front.
//! * **Post-tested**: [`repeat_while`] runs its body before the first test.

// Internal dependencies
use crate::primitives::errors::RoutineError;
use crate::primitives::validator::Validator;

/// Sum the integers in `[0, limit)`, leaving the loop when the counter
/// reaches `stop_at`.
///
/// `partial_sum(5, 3) == 0 + 1 + 2 == 3.0`. A `stop_at` outside the range
/// never triggers and the full sum is returned.
pub fn partial_sum(limit: usize, stop_at: usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..limit {
        if i == stop_at {
            break;
        }
        sum += i as f64;
    }
    sum
}

/// Increment a counter from zero until it equals `target`, then return it.
///
/// Fails with [`RoutineError::InvalidArgument`] when `target == 0`, which
/// the counter never equals after its first increment.
pub fn count_until(target: u64) -> Result<u64, RoutineError> {
    Validator::validate_exit_target(target)?;

    let mut counter = 0u64;
    loop {
        counter += 1;
        if counter == target {
            break;
        }
    }
    Ok(counter)
}

/// Increment a counter at least once, repeating while it is below `limit`.
///
/// Returns `max(limit, 1)`.
pub fn repeat_while(limit: u64) -> u64 {
    let mut counter = 0u64;
    loop {
        counter += 1;
        if counter >= limit {
            break;
        }
    }
    counter
}
