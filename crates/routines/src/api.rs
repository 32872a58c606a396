//! High-level API for configuring and running a walkthrough.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for the walkthrough
//! program: a fluent builder whose `build()` validates the configuration and
//! returns a runnable [`Walkthrough`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting the same parameter twice is reported at `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WalkthroughBuilder`] via `Walkthrough::new()` (prelude name).
//! 2. Chain configuration methods (`.length()`, `.width()`, etc.).
//! 3. Call `.build()` and then `.run()` on the result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{
    DEFAULT_FILL_CHAR, DEFAULT_LENGTH, DEFAULT_SELECTIONS, DEFAULT_WIDTH,
};
use crate::primitives::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::Walkthrough;
pub use crate::engine::output::WalkthroughReport;
pub use crate::fill::matrix::{fill_matrix, fill_row_major};
pub use crate::fill::sequence::fill_sequence;
pub use crate::flow::branching::{branch_on, select, Branch, Selection};
pub use crate::flow::loops::{count_until, partial_sum, repeat_while};
pub use crate::math::divisor::gcd;
pub use crate::math::factorial::factorial;
pub use crate::math::parity::is_even;
pub use crate::math::power::power;
pub use crate::primitives::errors::RoutineError;
pub use crate::primitives::grid::Grid;
pub use crate::records::person::{Address, Person};
pub use crate::records::roster::{populate_roster, students};

/// Fluent builder for configuring a walkthrough.
#[derive(Debug, Clone, Default)]
pub struct WalkthroughBuilder {
    /// Sequence length, matrix row count and roster size (default 5).
    pub length: Option<usize>,

    /// Matrix column count (default 3).
    pub width: Option<usize>,

    /// Character broadcast over the character sequence (default `'*'`).
    pub fill_char: Option<char>,

    /// Values fed to the multi-way selection (default `[0, 2, 9]`).
    pub selections: Option<Vec<i64>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl WalkthroughBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequence length (also the matrix row count and roster size).
    pub fn length(mut self, length: usize) -> Self {
        if self.length.is_some() {
            self.duplicate_param = Some("length");
        }
        self.length = Some(length);
        self
    }

    /// Set the matrix column count.
    pub fn width(mut self, width: usize) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Set the character broadcast over the character sequence.
    pub fn fill_char(mut self, c: char) -> Self {
        if self.fill_char.is_some() {
            self.duplicate_param = Some("fill_char");
        }
        self.fill_char = Some(c);
        self
    }

    /// Set the values fed to the multi-way selection.
    pub fn selections(mut self, values: &[i64]) -> Self {
        if self.selections.is_some() {
            self.duplicate_param = Some("selections");
        }
        self.selections = Some(values.to_vec());
        self
    }

    /// Validate the configuration and produce a runnable walkthrough.
    pub fn build(self) -> Result<Walkthrough, RoutineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let length = self.length.unwrap_or(DEFAULT_LENGTH);
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        Validator::validate_dimension("length", length)?;
        Validator::validate_dimension("width", width)?;

        Ok(Walkthrough {
            length,
            width,
            fill_char: self.fill_char.unwrap_or(DEFAULT_FILL_CHAR),
            selections: self
                .selections
                .unwrap_or_else(|| DEFAULT_SELECTIONS.to_vec()),
        })
    }
}
