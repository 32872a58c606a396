//! # routines — small numeric routines and a runnable walkthrough
//!
//! A compact, `no_std`-capable collection of classic routines: recursive
//! factorial, integer powers, Euclid's GCD, parity, and index-derived fills
//! of caller-owned sequences and matrices. On top of them sit plain record
//! types, control-flow helpers, and a configurable *walkthrough* that runs
//! the whole demonstration program and returns a printable report.
//!
//! ## Quick Start
//!
//! ### Numeric routines
//!
//! ```rust
//! use routines::prelude::*;
//!
//! assert_eq!(factorial(5u64)?, 120);
//! assert_eq!(power(2.0, 8), 256.0);
//! assert_eq!(gcd(48, 18), 6);
//! assert!(is_even(4) && !is_even(7));
//! # Result::<(), RoutineError>::Ok(())
//! ```
//!
//! ### Filling caller-owned storage
//!
//! ```rust
//! use routines::prelude::*;
//!
//! let mut t = [0i32; 5];
//! fill_sequence(&mut t, 5)?;
//! assert_eq!(t, [0, 2, 4, 6, 8]);
//!
//! let mut mat = [[0i32; 3]; 2];
//! fill_matrix(&mut mat, 2, 3)?;
//! assert_eq!(mat, [[0, 1, 2], [1, 2, 3]]);
//! # Result::<(), RoutineError>::Ok(())
//! ```
//!
//! ### Walkthrough
//!
//! ```rust
//! use routines::prelude::*;
//!
//! let report = Walkthrough::new()
//!     .length(5)
//!     .width(3)
//!     .fill_char('c')
//!     .build()?
//!     .run()?;
//!
//! assert_eq!(report.factorial_of_five, 120);
//! println!("{}", report);
//! # Result::<(), RoutineError>::Ok(())
//! ```
//!
//! ```text
//! Starting full test: éàçù ô î – سلام
//! x=2
//! x neg=-2
//! x is negative
//! Partial sum r=3
//! i after exit=2
//! j after repeat=3
//! Array t:
//! t[0]=0
//! ...
//! Factorial(5)=120
//! 2^8=256
//! GCD(48,18)=6
//! val=0
//! val=1 or 2
//! val other
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible routines return `Result<_, RoutineError>`. Fill routines check
//! the whole region first and leave the container untouched on error:
//!
//! ```rust
//! use routines::prelude::*;
//!
//! let mut t = [7i32; 3];
//! match fill_sequence(&mut t, 5) {
//!     Ok(()) => unreachable!(),
//!     Err(e) => eprintln!("Fill failed: {}", e),
//! }
//! assert_eq!(t, [7, 7, 7]);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! routines = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`prelude::RoutineError`].
//! - `tracing`: spans and debug events around walkthrough stages.
//! - `dev`: exposes internal modules for integration tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, validation, storage.
mod primitives;

// Layer 2: Math - pure numeric routines.
mod math;

// Layer 3: Fill - index-derived fills of caller-owned containers.
mod fill;

// Layer 4: Records - person/address records and rosters.
mod records;

// Layer 5: Flow - branches, selection and loops.
mod flow;

// Layer 6: Engine - walkthrough execution and report.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        branch_on, count_until, factorial, fill_matrix, fill_row_major, fill_sequence, gcd,
        is_even, partial_sum, populate_roster, power, repeat_while, select, students, Address,
        Branch, Grid, Person, RoutineError, Selection, WalkthroughBuilder as Walkthrough,
        WalkthroughReport,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod fill {
        pub use crate::fill::*;
    }
    pub mod records {
        pub use crate::records::*;
    }
    pub mod flow {
        pub use crate::flow::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
