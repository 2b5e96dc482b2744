//! Engine layer.
//!
//! ## Purpose
//!
//! Layer 3 of the crate. The engine owns the compiled `Network` type, the
//! fail-fast validation that guards construction and execution, the executor
//! that replays a pair sequence over user buffers, and the optional process
//! cache for sharing compiled networks.
//!
//! ## Architecture
//!
//! ```text
//!                    +---------------------+
//!                    |   api (Layer 4)     |
//!                    +----------+----------+
//!                               |
//!                    +----------v----------+
//!                    |  engine (Layer 3)   |
//!                    |                     |
//!                    |  validator          |
//!                    |  network            |
//!                    |  executor           |
//!                    |  cache (std only)   |
//!                    +----------+----------+
//!                               |
//!            +------------------+------------------+
//!            |                                     |
//! +----------v----------+              +-----------v---------+
//! | networks (Layer 2)  |              | primitives (Layer 1)|
//! +---------------------+              +---------------------+
//! ```
//!
//! ## Key concepts
//!
//! * **Compile once, run many**: `Network::with_algorithm` pays the
//!   derivation cost once; every `apply` call afterwards is a linear replay
//!   with no allocation.
//! * **Fail fast**: all domain checks happen in `validator` before any pair
//!   is derived, so a `Network` value is valid by construction.

/// Process-wide network cache.
#[cfg(feature = "std")]
pub mod cache;
/// Pair-sequence replay over user buffers.
pub mod executor;
/// Compiled network type and introspection.
pub mod network;
/// Fail-fast domain validation.
pub mod validator;
