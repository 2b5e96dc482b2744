//! # sortnet — Fixed-Size Sorting Networks for Rust
//!
//! A sorting network is a fixed sequence of compare-exchange operations that
//! sorts any input of a given width, independent of the input values. Because
//! the comparison schedule is decided entirely by the width, a network has
//! constant control flow: the same comparisons run in the same order for
//! every input, which makes networks attractive for batch sorting of many
//! small fixed-size records and for branch-predictable hot loops.
//!
//! This crate derives networks with six classical constructions and replays
//! them against caller-owned buffers with a caller-supplied ordering.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortnet::prelude::*;
//!
//! let network = SortingNetwork::new()
//!     .width(4)
//!     .algorithm(Bubble)
//!     .build()?;
//!
//! let mut data = [4, 3, 2, 1];
//! network.apply(&mut data)?;
//! assert_eq!(data, [1, 2, 3, 4]);
//! # Result::<(), NetworkError>::Ok(())
//! ```
//!
//! ### Custom ordering
//!
//! The executor takes any strict-weak-order "precedes" predicate:
//!
//! ```rust
//! use sortnet::prelude::*;
//!
//! let network = Network::with_algorithm(Bubble, 4)?;
//!
//! let mut data = [1, 4, 2, 3];
//! network.apply_by(&mut data, |a, b| a > b)?; // descending
//! assert_eq!(data, [4, 3, 2, 1]);
//! # Result::<(), NetworkError>::Ok(())
//! ```
//!
//! ### Choosing a construction
//!
//! | Algorithm               | Width domain  | Pairs (N = 16) | Character                      |
//! |-------------------------|---------------|----------------|--------------------------------|
//! | `Bubble`                | any           | 120            | baseline, maximal depth        |
//! | `Insertion`             | any           | 120            | same pairs, different order    |
//! | `BoseNelson` (default)  | any           | 65             | recursive merge, O(N log² N)   |
//! | `BatcherOddEvenMerge`   | power of two  | 63             | fewest pairs of the merge duo  |
//! | `BitonicMerge`          | power of two  | 80             | uniform stages, SIMD-friendly  |
//! | `SizeOptimized`         | N ≤ 32        | 60             | literature-derived tables      |
//!
//! Unsupported (width, algorithm) combinations fail at build time with a
//! [`NetworkError`](prelude::NetworkError); nothing silently degrades to a
//! different construction.
//!
//! ### Reusing a network
//!
//! A built network is immutable and depends only on (width, algorithm), so it
//! can be applied to any number of independent buffers, concurrently, without
//! locking:
//!
//! ```rust
//! use sortnet::prelude::*;
//!
//! let network = Network::with_algorithm(BatcherOddEvenMerge, 3);
//! assert!(network.is_err()); // 3 is not a power of two
//!
//! let network = Network::with_algorithm(BatcherOddEvenMerge, 8)?;
//! for record in [[3u8, 1, 4, 1, 5, 9, 2, 6], [2, 7, 1, 8, 2, 8, 1, 8]].iter_mut() {
//!     network.apply(record)?;
//! }
//! # Result::<(), NetworkError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library; network derivation
//! only needs `alloc` for the pair sequence:
//!
//! ```toml
//! [dependencies]
//! sortnet = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 3, §5.3.4
//!   "Networks for Sorting"
//! - Batcher, K. E. (1968). "Sorting Networks and their Applications"
//! - Bose, R. C. and Nelson, R. J. (1962). "A Sorting Problem"
//! - <https://bertdobbelaere.github.io/sorting_networks.html> for the
//!   size-optimized tables

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - pair and error types, exchange capability.
mod primitives;

// Layer 2: Networks - the construction strategies.
mod networks;

// Layer 3: Engine - validation, the network type, execution, caching.
mod engine;

// High-level fluent API for building sorting networks.
mod api;

// Standard sortnet prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm,
        Algorithm::BatcherOddEvenMerge,
        Algorithm::BitonicMerge,
        Algorithm::BoseNelson,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::SizeOptimized,
        CompareExchange, Exchange, Network, NetworkBuilder as SortingNetwork, NetworkError,
    };

    #[cfg(feature = "std")]
    pub use crate::api::shared_network;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod networks {
        pub use crate::networks::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
