//! Parity test.

// External dependencies
use num_traits::PrimInt;

/// `true` exactly when `n` is divisible by 2.
#[inline]
pub fn is_even<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();
    n % two == T::zero()
}
