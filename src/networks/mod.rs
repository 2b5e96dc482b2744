//! Layer 2: Networks
//!
//! # Purpose
//!
//! This layer implements the construction strategies: given a validated
//! width, each strategy derives the ordered list of compare-exchange pairs
//! that sorts exactly that many elements. This is the "business logic" of the
//! crate, orchestrated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Networks ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::pair::CompareExchange;

// Adjacent-transposition network in bubble order.
pub mod bubble;

// Adjacent-transposition network in insertion order.
pub mod insertion;

// Bose-Nelson recursive merge construction.
pub mod bose_nelson;

// Batcher odd-even mergesort construction.
pub mod batcher;

// Normalized bitonic merge construction.
pub mod bitonic;

// Size-optimized tables for small widths.
pub mod optimal;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Construction strategy for a sorting network.
///
/// Every strategy derives, for a given width, a fixed sequence of
/// compare-exchange pairs whose replay sorts any input of that width. The
/// strategies differ in pair count, depth, and width domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Algorithm {
    /// Adjacent transpositions, bubble order: O(N²) pairs, maximal depth.
    /// The correctness baseline.
    Bubble,

    /// Adjacent transpositions, insertion order: same pair count as
    /// `Bubble`, different traversal.
    Insertion,

    /// Bose-Nelson recursive merge: O(N log² N) pairs, any width.
    ///
    /// This is the default and matches the general-purpose choice of the
    /// classical constructions.
    #[default]
    BoseNelson,

    /// Batcher odd-even mergesort: power-of-two widths only, fewer pairs
    /// than the bitonic construction at equal width.
    BatcherOddEvenMerge,

    /// Bitonic mergesort: power-of-two widths only, uniform stage shape.
    BitonicMerge,

    /// Literature-derived minimal networks for widths up to 32.
    SizeOptimized,
}

impl Algorithm {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the construction strategy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Insertion => "Insertion",
            Algorithm::BoseNelson => "BoseNelson",
            Algorithm::BatcherOddEvenMerge => "BatcherOddEvenMerge",
            Algorithm::BitonicMerge => "BitonicMerge",
            Algorithm::SizeOptimized => "SizeOptimized",
        }
    }

    /// Returns `true` if the strategy is only defined for power-of-two widths.
    #[inline]
    pub const fn requires_power_of_two(&self) -> bool {
        matches!(
            self,
            Algorithm::BatcherOddEvenMerge | Algorithm::BitonicMerge
        )
    }

    /// Largest supported width, if the strategy is table-bounded.
    #[inline]
    pub const fn max_width(&self) -> Option<usize> {
        match self {
            Algorithm::SizeOptimized => Some(optimal::MAX_WIDTH),
            _ => None,
        }
    }

    /// Returns `true` if the strategy is defined for the given width.
    ///
    /// Width zero is outside every domain; width one is inside every domain
    /// (1 is a power of two and every table starts at 1).
    #[inline]
    pub fn supports(&self, width: usize) -> bool {
        if width == 0 {
            return false;
        }
        if self.requires_power_of_two() && !width.is_power_of_two() {
            return false;
        }
        match self.max_width() {
            Some(max) => width <= max,
            None => true,
        }
    }

    // ========================================================================
    // Pair Derivation
    // ========================================================================

    /// Derive the pair sequence for a validated width.
    ///
    /// The caller (the engine validator) has already established that
    /// `width` lies in this strategy's domain.
    pub(crate) fn derive(&self, width: usize) -> Vec<CompareExchange> {
        debug_assert!(self.supports(width));

        match self {
            Algorithm::Bubble => bubble::pairs(width),
            Algorithm::Insertion => insertion::pairs(width),
            Algorithm::BoseNelson => bose_nelson::pairs(width),
            Algorithm::BatcherOddEvenMerge => batcher::pairs(width),
            Algorithm::BitonicMerge => bitonic::pairs(width),
            Algorithm::SizeOptimized => optimal::pairs(width),
        }
    }
}
