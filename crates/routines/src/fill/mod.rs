//! Layer 3: Fill
//!
//! # Purpose
//!
//! This layer writes index-derived values into caller-owned containers:
//! - One-dimensional sequences (`sequence[k] = 2k`)
//! - Matrices as rows (`matrix[i][j] = i + j`)
//! - Flat row-major buffers and [`Grid`](crate::primitives::grid::Grid)s
//!
//! Containers are never allocated, resized or partially written: the whole
//! region is validated before the first slot is touched.
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
//! Layer 3: Fill ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-dimensional fill.
pub mod sequence;

/// Two-dimensional fill.
pub mod matrix;
