//! Layer 4: Records
//!
//! # Purpose
//!
//! This layer provides plain record types (a person with a nested postal
//! address) and helpers that populate and query a caller-owned roster.
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
//! Layer 4: Records ← You are here
//!   ↓
//! Layer 3: Fill
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Person and address records.
pub mod person;

/// Roster population and queries.
pub mod roster;
