#![cfg(feature = "dev")]
//! Tests for the numeric routines.
//!
//! These tests verify:
//! - Recursive factorial, including the base case and overflow detection
//! - Integer powers by repeated multiplication
//! - Euclid's GCD and its sign convention
//! - Parity
//!
//! ## Test Organization
//!
//! 1. **Factorial** - Known values, base case, overflow
//! 2. **Power** - Known values, zero exponent, agreement with `powi`
//! 3. **GCD** - Known values, zero operand, brute-force agreement, signs
//! 4. **Parity** - Known values, alternation

use approx::assert_relative_eq;

use routines::internals::math::divisor::gcd;
use routines::internals::math::factorial::factorial;
use routines::internals::math::parity::is_even;
use routines::internals::math::power::power;
use routines::internals::primitives::errors::RoutineError;

// ============================================================================
// Factorial Tests
// ============================================================================

/// Test the canonical value.
#[test]
fn test_factorial_of_five() {
    assert_eq!(factorial(5i32).unwrap(), 120);
}

/// Test the base case.
///
/// Verifies that 0! and 1! are both 1.
#[test]
fn test_factorial_base_case() {
    assert_eq!(factorial(0u8).unwrap(), 1);
    assert_eq!(factorial(1u8).unwrap(), 1);
}

/// Test against an independent iterative product for 0..=20.
#[test]
fn test_factorial_matches_product() {
    let mut expected: u64 = 1;
    for n in 0u64..=20 {
        if n > 1 {
            expected *= n;
        }
        assert_eq!(factorial(n).unwrap(), expected, "mismatch at n={n}");
    }
}

/// Test negative input.
///
/// Verifies that every n <= 1 terminates in the base case.
#[test]
fn test_factorial_negative_is_base_case() {
    assert_eq!(factorial(-1i64).unwrap(), 1);
    assert_eq!(factorial(-20i32).unwrap(), 1);
    assert_eq!(factorial(i64::MIN).unwrap(), 1);
}

/// Test overflow detection.
///
/// Verifies that 21! does not fit in u64 and 13! does not fit in i32.
#[test]
fn test_factorial_overflow() {
    assert_eq!(factorial(21u64), Err(RoutineError::Overflow("factorial")));
    assert_eq!(factorial(13i32), Err(RoutineError::Overflow("factorial")));
    assert_eq!(factorial(12i32).unwrap(), 479_001_600);
}

/// Test huge input fails fast instead of recursing n levels.
#[test]
fn test_factorial_huge_input_fails_fast() {
    assert!(factorial(u64::MAX).is_err());
    assert!(factorial(i128::MAX).is_err());
}

/// Test the widest type.
#[test]
fn test_factorial_u128() {
    assert_eq!(
        factorial(34u128).unwrap(),
        295_232_799_039_604_140_847_618_609_643_520_000_000
    );
    assert!(factorial(35u128).is_err());
}

// ============================================================================
// Power Tests
// ============================================================================

/// Test the canonical value.
#[test]
fn test_power_two_to_eight() {
    assert_relative_eq!(power(2.0f64, 8), 256.0);
}

/// Test zero exponent.
///
/// Verifies that b^0 == 1.0 for every base, including 0.
#[test]
fn test_power_zero_exponent() {
    for base in [0.0f64, -0.0, 1.0, -3.5, 1e300, f64::INFINITY] {
        assert_eq!(power(base, 0), 1.0, "base={base}");
    }
}

/// Test agreement with `powi` within tolerance.
#[test]
fn test_power_matches_powi() {
    for base in [-2.5f64, -1.0, 0.0, 0.5, 1.1, 3.0, 10.0] {
        for exponent in 0u32..=12 {
            assert_relative_eq!(
                power(base, exponent),
                base.powi(exponent as i32),
                max_relative = 1e-12
            );
        }
    }
}

/// Test single precision.
#[test]
fn test_power_f32() {
    assert_relative_eq!(power(1.5f32, 3), 3.375f32);
}

/// Test zero base with positive exponent.
#[test]
fn test_power_zero_base() {
    assert_eq!(power(0.0f64, 5), 0.0);
}

// ============================================================================
// GCD Tests
// ============================================================================

/// Test the canonical value.
#[test]
fn test_gcd_48_18() {
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(18, 48), 6);
}

/// Test zero second operand.
///
/// Verifies that gcd(a, 0) returns a unchanged.
#[test]
fn test_gcd_zero_second_operand() {
    assert_eq!(gcd(42u32, 0), 42);
    assert_eq!(gcd(0u32, 0), 0);
    assert_eq!(gcd(0u32, 9), 9);
}

/// Test against a brute-force search for all pairs in [0, 60].
///
/// Verifies that the result divides both operands and that no larger
/// common divisor exists.
#[test]
fn test_gcd_is_greatest_common_divisor() {
    for a in 0u32..=60 {
        for b in 0u32..=60 {
            if a == 0 && b == 0 {
                continue;
            }
            let g = gcd(a, b);
            assert!(g > 0);
            assert_eq!(a % g, 0, "gcd({a}, {b}) = {g} does not divide {a}");
            assert_eq!(b % g, 0, "gcd({a}, {b}) = {g} does not divide {b}");

            let largest = (1..=a.max(b))
                .rev()
                .find(|d| a % d == 0 && b % d == 0)
                .unwrap();
            assert_eq!(g, largest, "gcd({a}, {b})");
        }
    }
}

/// Test coprime operands.
#[test]
fn test_gcd_coprime() {
    assert_eq!(gcd(17i64, 5), 1);
    assert_eq!(gcd(35u16, 64), 1);
}

/// Test the truncating-remainder sign convention.
#[test]
fn test_gcd_negative_operands() {
    assert_eq!(gcd(-48i32, 18), 6);
    assert_eq!(gcd(48i32, -18), -6);
    assert_eq!(gcd(-48i32, -18), -6);
}

/// Test the overflowing remainder case.
///
/// Verifies that MIN % -1 is treated as zero instead of panicking.
#[test]
fn test_gcd_min_by_minus_one() {
    assert_eq!(gcd(i32::MIN, -1), -1);
}

// ============================================================================
// Parity Tests
// ============================================================================

/// Test known values.
#[test]
fn test_is_even_known_values() {
    assert!(is_even(4));
    assert!(!is_even(7));
    assert!(is_even(0));
    assert!(is_even(-2));
    assert!(!is_even(-3));
}

/// Test agreement with `% 2` and alternation over a range.
#[test]
fn test_is_even_alternates() {
    for n in -100i64..100 {
        assert_eq!(is_even(n), n % 2 == 0);
        assert_ne!(is_even(n), is_even(n + 1));
    }
}

/// Test type extremes.
#[test]
fn test_is_even_extremes() {
    assert!(is_even(i64::MIN));
    assert!(!is_even(i64::MAX));
    assert!(!is_even(u8::MAX));
}
