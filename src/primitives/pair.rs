//! The compare-exchange pair, the single operation a network is made of.
//!
//! ## Purpose
//!
//! This module defines [`CompareExchange`], an ordered pair of zero-based
//! channel indices into a width-N buffer. A pair means: if the element at
//! `high` precedes the element at `low` under the ordering relation, swap
//! them.
//!
//! ## Invariants
//!
//! * `low < high`, and both indices are below the width of the owning
//!   network. The construction strategies uphold this by emission; the type
//!   itself only normalizes orientation.
//!
//! ## Non-goals
//!
//! * This module does not compare or swap elements (handled by the engine).

// ============================================================================
// Data Structures
// ============================================================================

/// One compare-exchange operation of a sorting network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareExchange {
    /// Channel that receives the preceding element.
    pub low: usize,

    /// Channel that receives the succeeding element.
    pub high: usize,
}

impl CompareExchange {
    /// Create a pair from two distinct channel indices, in either order.
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        debug_assert!(a != b);
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Largest channel index the pair touches.
    #[inline]
    pub const fn max_channel(&self) -> usize {
        self.high
    }
}

impl From<(usize, usize)> for CompareExchange {
    #[inline]
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
