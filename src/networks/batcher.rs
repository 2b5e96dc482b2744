//! Batcher odd-even mergesort construction.
//!
//! ## Purpose
//!
//! This module derives Batcher's odd-even merge networks: recursively sort
//! both halves, then merge them with the odd-even recurrence, which merges
//! the even-indexed and odd-indexed subsequences separately and finishes with
//! one combining rank of adjacent exchanges. Defined for power-of-two widths
//! only; at equal width it emits fewer pairs than the bitonic construction
//! (63 vs 80 at width 16).
//!
//! ## Design notes
//!
//! * **Emission order**: the even-subsequence merge and the odd-subsequence
//!   merge operate on disjoint channel sets, so emitting one after the other
//!   is a valid schedule; the combining rank follows both.
//!
//! ## Invariants
//!
//! * `width` is a power of two (validated by the engine).
//! * Every emitted pair is `(i, i + stride)` with positive stride, so
//!   `low < high` holds by construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

/// Derive the odd-even mergesort network for the given power-of-two width.
pub fn pairs(width: usize) -> Vec<CompareExchange> {
    debug_assert!(width.is_power_of_two() || width == 0);

    let mut sequence = Vec::new();
    if width > 1 {
        sort(&mut sequence, 0, width);
    }
    sequence
}

/// Emit a network sorting the `span` channels starting at `lo`.
fn sort(sequence: &mut Vec<CompareExchange>, lo: usize, span: usize) {
    if span <= 1 {
        return;
    }

    let half = span / 2;
    sort(sequence, lo, half);
    sort(sequence, lo + half, half);
    merge(sequence, lo, span, 1);
}

/// Odd-even merge of the two sorted halves of `[lo, lo + span)`.
///
/// `stride` selects the subsequence being merged: channels
/// `lo, lo + stride, lo + 2*stride, ...` within the span.
fn merge(sequence: &mut Vec<CompareExchange>, lo: usize, span: usize, stride: usize) {
    let step = stride * 2;

    if step < span {
        // Merge the even and odd subsequences, then combine.
        merge(sequence, lo, span, step);
        merge(sequence, lo + stride, span, step);

        let mut i = lo + stride;
        while i + stride < lo + span {
            sequence.push(CompareExchange {
                low: i,
                high: i + stride,
            });
            i += step;
        }
    } else {
        sequence.push(CompareExchange {
            low: lo,
            high: lo + stride,
        });
    }
}
