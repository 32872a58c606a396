//! Walkthrough report.
//!
//! ## Purpose
//!
//! This module defines [`WalkthroughReport`], which holds every value the
//! walkthrough produced, and its `Display` transcript.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only stores and renders.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::flow::branching::{Branch, Selection};
use crate::primitives::grid::Grid;
use crate::records::person::Person;
use crate::records::roster::students;

/// Everything a walkthrough run produced, in stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughReport {
    /// Greeting line.
    pub greeting: &'static str,

    /// Value of the fixed arithmetic expression.
    pub expression: i64,

    /// The expression negated.
    pub negated: i64,

    /// Branch taken for the negated value.
    pub branch: Branch,

    /// Bounded loop sum with early exit.
    pub partial_sum: f64,

    /// Counter after the unbounded loop exited.
    pub exit_counter: u64,

    /// Counter after the post-tested loop.
    pub repeat_counter: u64,

    /// Even-number sequence.
    pub sequence: Vec<i64>,

    /// Fill character repeated over the sequence length.
    pub broadcast: Vec<char>,

    /// Index-sum matrix.
    pub matrix: Grid<i64>,

    /// The standalone person record.
    pub person: Person,

    /// The populated roster.
    pub roster: Vec<Person>,

    /// `factorial(5)`.
    pub factorial_of_five: i64,

    /// `power(2.0, 8)`.
    pub two_to_the_eighth: f64,

    /// `gcd(48, 18)`.
    pub gcd_of_48_18: i64,

    /// Each configured selection value with the arm it took.
    pub selections: Vec<(i64, Selection)>,
}

impl WalkthroughReport {
    /// Students of the roster, in order.
    pub fn students(&self) -> impl Iterator<Item = &Person> {
        students(&self.roster)
    }
}

impl Display for WalkthroughReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.greeting)?;
        writeln!(f, "x={}", self.expression)?;
        writeln!(f, "x neg={}", self.negated)?;
        writeln!(f, "{}", self.branch)?;
        writeln!(f, "Partial sum r={}", self.partial_sum)?;
        writeln!(f, "i after exit={}", self.exit_counter)?;
        writeln!(f, "j after repeat={}", self.repeat_counter)?;

        writeln!(f, "Array t:")?;
        for (i, val) in self.sequence.iter().enumerate() {
            writeln!(f, "t[{i}]={val}")?;
        }

        writeln!(f, "tc:")?;
        for (i, c) in self.broadcast.iter().enumerate() {
            writeln!(f, "tc[{i}]={c}")?;
        }

        writeln!(f, "Matrix mat:")?;
        for (i, row) in self.matrix.iter_rows().enumerate() {
            for (j, val) in row.iter().enumerate() {
                writeln!(f, "mat[{i}][{j}]={val}")?;
            }
        }

        writeln!(f, "Person p: {}", self.person)?;
        writeln!(f, "Address: {}", self.person.address)?;

        writeln!(f, "=== Students in tabP ===")?;
        for student in self.students() {
            writeln!(
                f,
                "-> age={} cp={}",
                student.age, student.address.postal_code
            )?;
        }

        writeln!(f, "Factorial(5)={}", self.factorial_of_five)?;
        writeln!(f, "2^8={}", self.two_to_the_eighth)?;
        writeln!(f, "GCD(48,18)={}", self.gcd_of_48_18)?;

        for (_, selection) in &self.selections {
            writeln!(f, "{selection}")?;
        }

        Ok(())
    }
}
