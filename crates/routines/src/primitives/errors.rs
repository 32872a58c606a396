//! Error types for routine operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when calling the
//! numeric routines, filling caller-owned containers, or configuring a
//! walkthrough.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (requested vs. available).
//! * **Immediate**: Every error is reported at the call that caused it; nothing is retried.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Capacity**: A container is smaller than the region a fill routine was asked to write.
//! 2. **Overflow**: A result does not fit in the requested numeric type.
//! 3. **Parameter validation**: Out-of-range or duplicated builder parameters.
//!
//! ## Invariants
//!
//! * A routine that returns an error has not mutated its container.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for routine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineError {
    /// The container holds fewer slots than the requested fill region.
    CapacityExceeded {
        /// Which dimension overflowed (e.g. "sequence", "rows", "roster").
        what: &'static str,
        /// Number of slots the caller asked to write.
        requested: usize,
        /// Number of slots actually available.
        capacity: usize,
    },

    /// A matrix row is shorter than the requested column count.
    RaggedRow {
        /// Index of the short row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Column count that was requested.
        required: usize,
    },

    /// A computed value does not fit in the target numeric type.
    Overflow(&'static str),

    /// Generic invalid argument with a descriptive message.
    InvalidArgument(String),

    /// A walkthrough dimension is outside its accepted range.
    InvalidDimension {
        /// Name of the parameter.
        parameter: &'static str,
        /// The value provided.
        got: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RoutineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::CapacityExceeded {
                what,
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Capacity exceeded: {what} needs {requested} slots, only {capacity} available"
                )
            }
            Self::RaggedRow { row, len, required } => {
                write!(
                    f,
                    "Row {row} has {len} columns, need at least {required}"
                )
            }
            Self::Overflow(what) => write!(f, "Numeric overflow in {what}"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::InvalidDimension { parameter, got, max } => {
                write!(f, "Invalid {parameter}: {got} (must be in [1, {max}])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RoutineError {}
