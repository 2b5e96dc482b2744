//! Bose-Nelson recursive merge construction.
//!
//! ## Purpose
//!
//! This module derives sorting networks by the Bose-Nelson recurrence: split
//! the range in half, build a network for each half, then merge the two
//! sorted halves by recursively pairing their first and last halves against
//! each other. The recursion is on the construction, not on the data; the
//! result is a flat pair sequence of O(N log² N) length, defined for any
//! width.
//!
//! ## Design notes
//!
//! * **Merge recurrence**: `merge(p, q)` over block sizes p and q bottoms out
//!   at single-element blocks and otherwise splits p at its midpoint and q at
//!   the complementary point, producing three sub-merges. The split keeps the
//!   cross-merge (third call) over blocks that the first two calls have
//!   already aligned.
//! * **Emission order**: Each recursive call appends its pairs before the
//!   caller's combining pairs; sub-merges over disjoint channel sets commute,
//!   so the flattened order is a valid schedule.
//!
//! ## Invariants
//!
//! * `merge` is always invoked with the first block entirely below the
//!   second, so every emitted pair satisfies `low < high`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

/// Derive the Bose-Nelson network for the given width.
pub fn pairs(width: usize) -> Vec<CompareExchange> {
    let mut sequence = Vec::new();
    sort(&mut sequence, 0, width);
    sequence
}

/// Emit a network sorting the `size` channels starting at `start`.
fn sort(sequence: &mut Vec<CompareExchange>, start: usize, size: usize) {
    if size <= 1 {
        return;
    }

    let half = size / 2;
    sort(sequence, start, half);
    sort(sequence, start + half, size - half);
    merge(sequence, start, half, start + half, size - half);
}

/// Emit a network merging two sorted blocks, the first entirely below the
/// second.
pub(crate) fn merge(
    sequence: &mut Vec<CompareExchange>,
    start1: usize,
    size1: usize,
    start2: usize,
    size2: usize,
) {
    debug_assert!(start1 + size1 <= start2);

    if size1 == 1 && size2 == 1 {
        sequence.push(CompareExchange {
            low: start1,
            high: start2,
        });
    } else if size1 == 1 && size2 == 2 {
        sequence.push(CompareExchange {
            low: start1,
            high: start2 + 1,
        });
        sequence.push(CompareExchange {
            low: start1,
            high: start2,
        });
    } else if size1 == 2 && size2 == 1 {
        sequence.push(CompareExchange {
            low: start1,
            high: start2,
        });
        sequence.push(CompareExchange {
            low: start1 + 1,
            high: start2,
        });
    } else {
        let half1 = size1 / 2;
        // Complementary split: even first block pairs its upper half against
        // the ceiling half of the second block, odd against the floor half.
        let half2 = if size1 % 2 == 0 {
            (size2 + 1) / 2
        } else {
            size2 / 2
        };

        merge(sequence, start1, half1, start2, half2);
        merge(
            sequence,
            start1 + half1,
            size1 - half1,
            start2 + half2,
            size2 - half2,
        );
        merge(sequence, start1 + half1, size1 - half1, start2, half2);
    }
}
