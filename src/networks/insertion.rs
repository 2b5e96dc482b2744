//! Insertion-order transposition network.
//!
//! ## Purpose
//!
//! This module derives the insertion-sort analogue of the bubble network:
//! element `i` is walked down through its sorted prefix one adjacent
//! compare-exchange at a time. The total pair count equals the bubble
//! network's N(N-1)/2; only the traversal order differs. Included for
//! engineering comparison rather than efficiency.
//!
//! ## Invariants
//!
//! * Step `i` emits pairs `(j-1, j)` for `j` descending from `i` to 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

/// Derive the insertion network for the given width.
pub fn pairs(width: usize) -> Vec<CompareExchange> {
    let mut sequence = Vec::with_capacity(width * width.saturating_sub(1) / 2);

    for i in 1..width {
        for j in (1..=i).rev() {
            sequence.push(CompareExchange {
                low: j - 1,
                high: j,
            });
        }
    }

    sequence
}
