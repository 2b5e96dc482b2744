//! Pair-sequence execution over user buffers.
//!
//! ## Purpose
//!
//! This module implements the replay side of a compiled [`Network`]: a single
//! in-place, allocation-free pass over a buffer, exchanging each pair whose
//! channels are out of order. Three entry points share that pass: `apply_by`
//! takes an arbitrary predicate, `apply` uses the natural `PartialOrd` order,
//! and `sort` routes every exchange through the [`Exchange`] capability
//! trait so primitive types take their branch-free min/max path.
//!
//! ## Design notes
//!
//! * **Split borrows**: `sort` needs two `&mut` references into the same
//!   buffer, obtained with `split_at_mut` at the pair's high channel.
//! * **Order stability**: pairs replay in derivation order; for a valid
//!   network any order-respecting schedule yields the same sorted result.
//!
//! ## Key concepts
//!
//! * **Predicate contract**: `precedes(a, b)` means a must come before b.
//!   The executor swaps when `precedes(&data[high], &data[low])` holds, so a
//!   reversed predicate yields a descending sort.
//!
//! ## Invariants
//!
//! * Buffer length is validated before any element is touched.
//! * For totally ordered inputs `sort` and `apply` produce identical buffers.
//!
//! ## Non-goals
//!
//! * No parallel or vectorized replay; callers wanting stage-parallel
//!   execution schedule `pairs()` themselves using `depth()`.

// Internal dependencies
use crate::engine::network::Network;
use crate::engine::validator::Validator;
use crate::primitives::errors::NetworkError;
use crate::primitives::exchange::Exchange;

// ============================================================================
// Executor
// ============================================================================

impl Network {
    /// Apply the network under a caller-supplied ordering.
    ///
    /// `precedes(a, b)` returns `true` when `a` must be placed before `b`.
    /// Fails with [`NetworkError::LengthMismatch`] unless
    /// `data.len() == self.width()`.
    pub fn apply_by<T, F>(&self, data: &mut [T], mut precedes: F) -> Result<(), NetworkError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        Validator::validate_buffer(self.width(), data.len())?;

        for pair in self.pairs() {
            if precedes(&data[pair.high], &data[pair.low]) {
                data.swap(pair.low, pair.high);
            }
        }

        Ok(())
    }

    /// Apply the network in natural ascending order.
    pub fn apply<T: PartialOrd>(&self, data: &mut [T]) -> Result<(), NetworkError> {
        self.apply_by(data, |a, b| a < b)
    }

    /// Apply the network through the [`Exchange`] capability trait.
    ///
    /// Primitive integers and floats take their branch-free min/max
    /// specialization; every other type falls back to the default
    /// compare-and-swap. The sorted result matches [`Network::apply`] for
    /// totally ordered inputs.
    pub fn sort<T: Exchange>(&self, data: &mut [T]) -> Result<(), NetworkError> {
        Validator::validate_buffer(self.width(), data.len())?;

        for pair in self.pairs() {
            // Two disjoint &mut into the buffer; low < high by construction.
            let (head, tail) = data.split_at_mut(pair.high);
            T::compare_exchange(&mut head[pair.low], &mut tail[0]);
        }

        Ok(())
    }
}
