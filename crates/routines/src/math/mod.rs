//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure integer and floating-point routines:
//! - Factorial (recursive, overflow-checked)
//! - Integer power by repeated multiplication
//! - Greatest common divisor (Euclid)
//! - Parity
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Flow
//!   ↓
//! Layer 4: Records
//!   ↓
//! Layer 3: Fill
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recursive factorial.
pub mod factorial;

/// Power by repeated multiplication.
pub mod power;

/// Greatest common divisor.
pub mod divisor;

/// Even/odd test.
pub mod parity;
