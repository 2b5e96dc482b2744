//! Normalized bitonic merge construction.
//!
//! ## Purpose
//!
//! This module derives bitonic sorting networks in the normalized form used
//! by GPU kernels: every comparator points the same way, with the direction
//! reversal of the textbook construction folded into a mirrored first
//! substage. For each merge size k (doubling from 2 to the width), channels
//! are first paired with their mirror `i ^ (k - 1)` inside each k-block, then
//! cleaned with XOR strides `i ^ j` for j = k/4 down to 1.
//!
//! ## Design notes
//!
//! * **Uniform stages**: Every substage touches each channel exactly once at
//!   a fixed stride, the property that makes bitonic networks vectorize and
//!   map onto wide lanes; the pair count is N·log₂N·(log₂N + 1)/4, more than
//!   Batcher's at equal width.
//! * **Emission order**: Substages are emitted whole, in schedule order, so
//!   `depth()` of the resulting network equals the substage count.
//!
//! ## Invariants
//!
//! * `width` is a power of two (validated by the engine).
//! * A pair is emitted only when `partner > i`, so `low < high` holds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

/// Derive the bitonic network for the given power-of-two width.
pub fn pairs(width: usize) -> Vec<CompareExchange> {
    debug_assert!(width.is_power_of_two() || width == 0);

    let mut sequence = Vec::new();
    if width <= 1 {
        return sequence;
    }

    let mut k = 2;
    while k <= width {
        // Mirror substage: fold the direction reversal into the pairing.
        for i in 0..width {
            let partner = i ^ (k - 1);
            if partner > i {
                sequence.push(CompareExchange {
                    low: i,
                    high: partner,
                });
            }
        }

        // Cleaning substages at halving strides.
        let mut j = k / 4;
        while j > 0 {
            for i in 0..width {
                let partner = i ^ j;
                if partner > i {
                    sequence.push(CompareExchange {
                        low: i,
                        high: partner,
                    });
                }
            }
            j /= 2;
        }

        k *= 2;
    }

    sequence
}
