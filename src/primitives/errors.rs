//! Error types for sorting network operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when deriving or
//! executing a sorting network: domain violations of a construction strategy
//! and buffer/width mismatches at execution time.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Eager**: Every variant represents a contract violation detectable as
//!   soon as width and algorithm are both known; none is transient.
//! * **No-std**: Supports `no_std` environments; variants carry only `Copy` data.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Width validation**: Zero width, power-of-two restrictions, table range.
//! 2. **Execution validation**: Buffer length must equal the network width.
//! 3. **Builder validation**: Missing or duplicated fluent-builder parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting network operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// A network of width zero has no meaning; width must be at least 1.
    ZeroWidth,

    /// The selected construction is only defined for power-of-two widths.
    WidthNotPowerOfTwo {
        /// Name of the construction algorithm.
        algorithm: &'static str,
        /// The width provided.
        width: usize,
    },

    /// The size-optimized tables only cover widths up to a fixed maximum.
    WidthExceedsTable {
        /// The width provided.
        width: usize,
        /// Largest width covered by the tables.
        max: usize,
    },

    /// The buffer passed to the executor does not match the network width.
    LengthMismatch {
        /// The network width.
        expected: usize,
        /// Number of elements in the buffer.
        got: usize,
    },

    /// The fluent builder was finalized without a width.
    MissingWidth,

    /// A fluent-builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NetworkError::ZeroWidth => {
                write!(f, "network width must be at least 1, got 0")
            }
            NetworkError::WidthNotPowerOfTwo { algorithm, width } => {
                write!(
                    f,
                    "{} networks require a power-of-two width, got {}",
                    algorithm, width
                )
            }
            NetworkError::WidthExceedsTable { width, max } => {
                write!(
                    f,
                    "size-optimized tables cover widths up to {}, got {}",
                    max, width
                )
            }
            NetworkError::LengthMismatch { expected, got } => {
                write!(
                    f,
                    "buffer length {} does not match network width {}",
                    got, expected
                )
            }
            NetworkError::MissingWidth => {
                write!(f, "no width was provided before build()")
            }
            NetworkError::DuplicateParameter { parameter } => {
                write!(f, "parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for NetworkError {}
