//! Fill a sequence with the even numbers `0, 2, 4, ...`.

// External dependencies
use num_traits::NumCast;

// Internal dependencies
use crate::primitives::errors::RoutineError;
use crate::primitives::validator::Validator;

/// Write `sequence[k] = 2k` for every `k` in `[0, size)`.
///
/// Slots at and beyond `size` are left as they were. Fails with
/// [`RoutineError::CapacityExceeded`] when `size > sequence.len()` and with
/// [`RoutineError::Overflow`] when `2k` does not fit in `T`; in both cases
/// the sequence is unchanged.
pub fn fill_sequence<T: NumCast + Copy>(sequence: &mut [T], size: usize) -> Result<(), RoutineError> {
    Validator::validate_capacity("sequence", size, sequence.len())?;

    // Only the largest value can overflow; check it before writing.
    if size > 0 {
        doubled::<T>(size - 1)?;
    }

    for (k, slot) in sequence.iter_mut().take(size).enumerate() {
        *slot = doubled(k)?;
    }

    Ok(())
}

#[inline]
fn doubled<T: NumCast>(k: usize) -> Result<T, RoutineError> {
    k.checked_mul(2)
        .and_then(|v| <T as NumCast>::from(v))
        .ok_or(RoutineError::Overflow("fill_sequence"))
}
