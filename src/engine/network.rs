//! Compiled sorting network.
//!
//! ## Purpose
//!
//! This module defines `Network`, the compiled form of a sorting network: a
//! validated width plus the flat compare-exchange sequence derived by one of
//! the construction algorithms. A `Network` is immutable after construction
//! and can be applied to any number of buffers.
//!
//! ## Key concepts
//!
//! * **Valid by construction**: `with_algorithm` validates before deriving,
//!   so every `Network` value satisfies `low < high < width` for all pairs.
//! * **Introspection**: width, pair count, the pair slice, and the greedy
//!   parallel depth are all observable without executing the network.
//!
//! ## Invariants
//!
//! * The pair sequence is deterministic per `(algorithm, width)`.
//! * A width-1 network is empty and applies as a no-op.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::networks::Algorithm;
use crate::primitives::errors::NetworkError;
use crate::primitives::pair::CompareExchange;

// ============================================================================
// Network
// ============================================================================

/// A compiled fixed-size sorting network.
///
/// Holds the channel count and the ordered compare-exchange sequence. Build
/// one through [`crate::api::NetworkBuilder`] or directly with
/// [`Network::with_algorithm`], then apply it to buffers of matching length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Number of channels the network sorts.
    width: usize,
    /// Compare-exchange pairs in execution order.
    pairs: Vec<CompareExchange>,
}

impl Network {
    /// Compile the network for `width` channels using `algorithm`.
    ///
    /// Validates the width against the algorithm's domain before deriving
    /// any pairs.
    pub fn with_algorithm(algorithm: Algorithm, width: usize) -> Result<Self, NetworkError> {
        Validator::validate_algorithm(algorithm, width)?;

        Ok(Self {
            width,
            pairs: algorithm.derive(width),
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of channels the network sorts.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of compare-exchange pairs in the network.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// The compare-exchange sequence in execution order.
    pub fn pairs(&self) -> &[CompareExchange] {
        &self.pairs
    }

    /// Whether the network performs no exchanges (width 1).
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Greedy parallel depth: the number of ranks when each pair is placed
    /// in the earliest rank after both its channels are free.
    pub fn depth(&self) -> usize {
        let mut level = vec![0usize; self.width];
        let mut depth = 0;

        for pair in &self.pairs {
            let rank = level[pair.low].max(level[pair.high]) + 1;
            level[pair.low] = rank;
            level[pair.high] = rank;
            depth = depth.max(rank);
        }

        depth
    }
}
