//! Layer 5: Flow
//!
//! # Purpose
//!
//! This layer exercises the basic control-flow constructs as small, pure
//! functions:
//! - Conditional branches and a multi-way selection
//! - A bounded loop with an early exit
//! - An unbounded loop with an exit condition
//! - A post-tested loop (body runs at least once)
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Flow ← You are here
//!   ↓
//! Layer 4: Records
//!   ↓
//! Layer 3: Fill
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Conditional branches and selection.
pub mod branching;

/// Loop helpers.
pub mod loops;
