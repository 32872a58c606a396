//! Layer 6: Engine
//!
//! # Purpose
//!
//! This layer runs the complete walkthrough program: it drives every lower
//! layer in a fixed order and collects what each stage produced into a
//! [`WalkthroughReport`](output::WalkthroughReport).
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine ← You are here
//!   ↓
//! Layer 5: Flow
//!   ↓
//! Layer 4: Records
//!   ↓
//! Layer 3: Fill
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Walkthrough execution.
pub mod executor;

/// Walkthrough report.
pub mod output;
