//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! the compare-exchange pair, the shared error type, and the exchange
//! capability trait. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Networks
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// The compare-exchange pair.
pub mod pair;

/// Shared error types.
pub mod errors;

/// Branch-free exchange capability for scalar types.
pub mod exchange;
