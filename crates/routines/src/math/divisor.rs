//! Greatest common divisor by the Euclidean algorithm.
//!
//! ## Design notes
//!
//! * **Truncating remainder**: `a % b` takes the sign of the dividend, as Rust's
//!   `%` does. For non-negative inputs the result is the usual GCD; for mixed
//!   signs the result may be negative (`gcd(48, -18) == -6`).
//! * **Total**: `MIN % -1` overflows in two's complement. Its mathematical
//!   value is zero, which is what the loop uses.

// External dependencies
use num_traits::{CheckedRem, PrimInt};

/// Greatest common divisor of `a` and `b`.
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b == 0`, then
/// returns `a`. `gcd(a, 0) == a`.
pub fn gcd<T: PrimInt + CheckedRem>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let rem = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = rem;
    }
    a
}
