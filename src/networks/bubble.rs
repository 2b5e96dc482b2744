//! Bubble-order transposition network.
//!
//! ## Purpose
//!
//! This module derives the simplest sorting network: N passes of adjacent
//! compare-exchanges, each pass floating the largest remaining element to the
//! top. It emits N(N-1)/2 pairs and has maximal depth, which makes it the
//! correctness baseline the cheaper constructions are compared against.
//!
//! ## Invariants
//!
//! * Pass `i` emits pairs `(j, j+1)` for `j` in `0..n-1-i`, in that order.
//! * Every emitted pair satisfies `low + 1 == high < n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

/// Derive the bubble network for the given width.
pub fn pairs(width: usize) -> Vec<CompareExchange> {
    let mut sequence = Vec::with_capacity(width * width.saturating_sub(1) / 2);

    for pass in 0..width {
        for j in 0..width - 1 - pass {
            sequence.push(CompareExchange { low: j, high: j + 1 });
        }
    }

    sequence
}
