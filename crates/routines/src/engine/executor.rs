//! Walkthrough execution.
//!
//! ## Purpose
//!
//! [`Walkthrough::run`] executes the demonstration program stage by stage:
//! arithmetic and branching, the three loop forms, sequence and matrix
//! fills, records, the numeric routines and the multi-way selection.
//!
//! ## Design notes
//!
//! * **Pure**: Nothing is printed; the caller decides what to do with the report.
//! * **Validated**: A `Walkthrough` can only be obtained from the builder, so
//!   its dimensions are already in range when `run` starts.
//! * **Traced**: With the `tracing` feature, the run is wrapped in an
//!   `info_span` and each stage emits a `debug!` event.
//!
//! ## Non-goals
//!
//! * Reading interactive input. Every value comes from the configuration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::output::WalkthroughReport;
use crate::fill::sequence::fill_sequence;
use crate::flow::branching::{branch_on, evaluate_expression, select};
use crate::flow::loops::{count_until, partial_sum, repeat_while};
use crate::math::divisor::gcd;
use crate::math::factorial::factorial;
use crate::math::power::power;
use crate::primitives::errors::RoutineError;
use crate::primitives::grid::Grid;
use crate::records::person::{Address, Person};
use crate::records::roster::populate_roster;

// ============================================================================
// Defaults
// ============================================================================

/// Default sequence length (rows of the matrix, size of the roster).
pub const DEFAULT_LENGTH: usize = 5;

/// Default matrix width.
pub const DEFAULT_WIDTH: usize = 3;

/// Default character broadcast over the character sequence.
pub const DEFAULT_FILL_CHAR: char = '*';

/// Default values fed to the multi-way selection.
pub const DEFAULT_SELECTIONS: [i64; 3] = [0, 2, 9];

/// Greeting printed first; exercises non-ASCII output.
pub const GREETING: &str = "Starting full test: éàçù ô î – سلام";

const PARTIAL_SUM_STOP: usize = 3;
const EXIT_TARGET: u64 = 2;
const REPEAT_LIMIT: u64 = 3;

// ============================================================================
// Walkthrough
// ============================================================================

/// A validated walkthrough configuration, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    pub(crate) length: usize,
    pub(crate) width: usize,
    pub(crate) fill_char: char,
    pub(crate) selections: Vec<i64>,
}

impl Walkthrough {
    /// Sequence length, matrix row count and roster size.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Matrix column count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Character broadcast over the character sequence.
    pub fn fill_char(&self) -> char {
        self.fill_char
    }

    /// Values fed to the multi-way selection.
    pub fn selections(&self) -> &[i64] {
        &self.selections
    }

    /// Run every stage and collect the results.
    pub fn run(&self) -> Result<WalkthroughReport, RoutineError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("walkthrough", length = self.length, width = self.width)
            .entered();

        // Arithmetic and branching
        let expression = evaluate_expression();
        let negated = -expression;
        let branch = branch_on(negated);
        #[cfg(feature = "tracing")]
        tracing::debug!(expression, negated, ?branch, "evaluated branches");

        // Loops
        let partial = partial_sum(self.length, PARTIAL_SUM_STOP);
        let exit_counter = count_until(EXIT_TARGET)?;
        let repeat_counter = repeat_while(REPEAT_LIMIT);
        #[cfg(feature = "tracing")]
        tracing::debug!(partial, exit_counter, repeat_counter, "ran loops");

        // Sequences and matrix
        let mut sequence = vec![0i64; self.length];
        fill_sequence(&mut sequence, self.length)?;

        let broadcast = vec![self.fill_char; self.length];

        let mut matrix = Grid::zeroed(self.length, self.width)?;
        matrix.fill_index_sum()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            "filled containers"
        );

        // Records
        let person = Person::new("Ali", 20, true, Address::new("Rue 1", "Casa", 20_000));
        let mut roster = vec![Person::default(); self.length];
        populate_roster(&mut roster, self.length)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(roster = roster.len(), "populated roster");

        // Numeric routines
        let factorial_of_five = factorial(5i64)?;
        let two_to_the_eighth = power(2.0f64, 8);
        let gcd_of_48_18 = gcd(48i64, 18);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            factorial_of_five,
            two_to_the_eighth,
            gcd_of_48_18,
            "computed routines"
        );

        let selections = self
            .selections
            .iter()
            .map(|&val| (val, select(val)))
            .collect();

        Ok(WalkthroughReport {
            greeting: GREETING,
            expression,
            negated,
            branch,
            partial_sum: partial,
            exit_counter,
            repeat_counter,
            sequence,
            broadcast,
            matrix,
            person,
            roster,
            factorial_of_five,
            two_to_the_eighth,
            gcd_of_48_18,
            selections,
        })
    }
}
