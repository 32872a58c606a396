//! Integer powers of a real base.

// External dependencies
use num_traits::Float;

/// Raise `base` to the non-negative integer power `exponent`.
///
/// The accumulator starts at `1.0` and is multiplied by `base` once per unit
/// of `exponent`, so `power(b, 0) == 1.0` for every `b`, including `0.0`
/// and NaN.
#[inline]
pub fn power<T: Float>(base: T, exponent: u32) -> T {
    let mut acc = T::one();
    for _ in 0..exponent {
        acc = acc * base;
    }
    acc
}
