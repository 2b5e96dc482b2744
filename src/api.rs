//! High-level API for building sorting networks.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing a width and construction algorithm, validated
//! as a whole when `.build()` compiles the network.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible algorithm default.
//! * **Validated**: Width and algorithm are checked together in `.build()`;
//!   duplicate parameter assignments are remembered and reported there too.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NetworkBuilder`] via `SortingNetwork::new()`.
//! 2. Chain configuration methods (`.width()`, `.algorithm()`).
//! 3. Call `.build()` to validate and compile a [`Network`].

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::engine::cache::shared as shared_network;
pub use crate::engine::network::Network;
pub use crate::networks::Algorithm;
pub use crate::primitives::errors::NetworkError;
pub use crate::primitives::exchange::Exchange;
pub use crate::primitives::pair::CompareExchange;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring and compiling a sorting network.
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    /// Number of channels (required).
    pub width: Option<usize>,

    /// Construction algorithm (default: Bose-Nelson).
    pub algorithm: Option<Algorithm>,

    /// First parameter that was assigned twice, if any.
    pub duplicate_param: Option<&'static str>,
}

impl NetworkBuilder {
    /// Create a builder with no width and the default algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of channels the network sorts.
    pub fn width(mut self, width: usize) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Set the construction algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Validate the configuration and compile the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(NetworkError::DuplicateParameter { parameter });
        }

        let width = self.width.ok_or(NetworkError::MissingWidth)?;
        let algorithm = self.algorithm.unwrap_or_default();

        Network::with_algorithm(algorithm, width)
    }
}
