//! Roster population and queries.
//!
//! ## Purpose
//!
//! Populates a caller-owned slice of [`Person`]s from their positions and
//! filters out the students.
//!
//! ## Key concepts
//!
//! * **Position-derived fields**: Entry `i` gets age `18 + i`, postal code
//!   `10000 + i`, and is a student exactly when `i` is even.
//! * **Partial update**: The street line is not touched.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::math::parity::is_even;
use crate::primitives::errors::RoutineError;
use crate::primitives::validator::Validator;
use crate::records::person::Person;

/// Name assigned to every populated entry.
pub const ROSTER_NAME: &str = "P";

/// City assigned to every populated entry.
pub const ROSTER_CITY: &str = "Ville";

/// Age of the entry at position 0.
pub const BASE_AGE: u32 = 18;

/// Postal code of the entry at position 0.
pub const BASE_POSTAL_CODE: u32 = 10_000;

/// Populate the first `size` entries of `roster` from their positions.
///
/// Fails with [`RoutineError::CapacityExceeded`] when `size > roster.len()`
/// and with [`RoutineError::Overflow`] when a derived age or postal code
/// does not fit in `u32`. The roster is unchanged on error.
pub fn populate_roster(roster: &mut [Person], size: usize) -> Result<(), RoutineError> {
    Validator::validate_capacity("roster", size, roster.len())?;

    if size > 0 {
        offset(BASE_POSTAL_CODE, size - 1)?;
    }

    for (i, person) in roster.iter_mut().take(size).enumerate() {
        person.name = String::from(ROSTER_NAME);
        person.age = offset(BASE_AGE, i)?;
        person.is_student = is_even(i);
        person.address.city = String::from(ROSTER_CITY);
        person.address.postal_code = offset(BASE_POSTAL_CODE, i)?;
    }

    Ok(())
}

/// Iterate over the students of a roster, in order.
pub fn students(roster: &[Person]) -> impl Iterator<Item = &Person> {
    roster.iter().filter(|person| person.is_student)
}

#[inline]
fn offset(base: u32, i: usize) -> Result<u32, RoutineError> {
    u32::try_from(i)
        .ok()
        .and_then(|i| base.checked_add(i))
        .ok_or(RoutineError::Overflow("populate_roster"))
}
