//! Conditional branches and multi-way selection.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Arithmetic and Logic
// ============================================================================

/// Evaluate `(2 + 3 * 4) - (5 + 1) * 2`.
#[inline]
pub fn evaluate_expression() -> i64 {
    (2 + (3 * 4)) - ((5 + 1) * 2)
}

/// Evaluate `(x >= 0 && !(x != 0)) || false`, which holds only for zero.
#[inline]
#[allow(clippy::nonminimal_bool, clippy::overly_complex_bool_expr)]
pub fn is_logically_zero(x: i64) -> bool {
    ((x >= 0) && !(x != 0)) || false
}

// ============================================================================
// Branch
// ============================================================================

/// Outcome of the if / else-if / else chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The logic expression held.
    Logical,

    /// The value is negative.
    Negative,

    /// Neither of the above.
    Other,
}

/// Walk the if / else-if / else chain for `x`.
pub fn branch_on(x: i64) -> Branch {
    if is_logically_zero(x) {
        Branch::Logical
    } else if x < 0 {
        Branch::Negative
    } else {
        Branch::Other
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Logical => write!(f, "OK: logic"),
            Self::Negative => write!(f, "x is negative"),
            Self::Other => write!(f, "other case"),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Arm taken by the multi-way selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0`
    Zero,

    /// `1` or `2`
    OneOrTwo,

    /// `3`
    Three,

    /// Anything else.
    Other,
}

/// Select an arm for `val`.
pub fn select(val: i64) -> Selection {
    match val {
        0 => Selection::Zero,
        1 | 2 => Selection::OneOrTwo,
        3 => Selection::Three,
        _ => Selection::Other,
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Zero => write!(f, "val=0"),
            Self::OneOrTwo => write!(f, "val=1 or 2"),
            Self::Three => write!(f, "val=3"),
            Self::Other => write!(f, "val other"),
        }
    }
}
