//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the shared validator and the owned
//! grid storage used throughout the crate. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Argument and configuration validation.
pub mod validator;

/// Row-major two-dimensional storage.
pub mod grid;
