//! Input validation for network construction and execution.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks that guard network construction
//! and buffer application. It enforces width bounds, per-algorithm domain
//! restrictions, and buffer-length agreement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Placement**: Construction-time checks run before any pair is derived,
//!   so a `Network` value never holds an invalid width.
//!
//! ## Key concepts
//!
//! * **Width Bounds**: Every algorithm requires `width >= 1`.
//! * **Algorithm Domain**: Merge-based constructions require a power-of-two
//!   width; the size-optimized tables cap the width at 32.
//! * **Buffer Agreement**: A network only applies to buffers of exactly its
//!   width.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A width accepted by `validate_algorithm` is accepted by every derivation
//!   routine it dispatches to.
//!
//! ## Non-goals
//!
//! * This module does not derive pairs or touch buffer contents.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::networks::Algorithm;
use crate::primitives::errors::NetworkError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for network widths, algorithms, and buffers.
///
/// Provides static methods returning `Result<(), NetworkError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Construction Validation
    // ========================================================================

    /// Validate a network width independent of any algorithm.
    pub fn validate_width(width: usize) -> Result<(), NetworkError> {
        if width == 0 {
            return Err(NetworkError::ZeroWidth);
        }
        Ok(())
    }

    /// Validate that `algorithm` can derive a network of `width` channels.
    pub fn validate_algorithm(algorithm: Algorithm, width: usize) -> Result<(), NetworkError> {
        // Check 1: Width bound shared by all algorithms
        Self::validate_width(width)?;

        // Check 2: Power-of-two domain for the merge-based constructions
        if algorithm.requires_power_of_two() && !width.is_power_of_two() {
            return Err(NetworkError::WidthNotPowerOfTwo {
                algorithm: algorithm.name(),
                width,
            });
        }

        // Check 3: Table coverage for the size-optimized construction
        if let Some(max) = algorithm.max_width() {
            if width > max {
                return Err(NetworkError::WidthExceedsTable { width, max });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Execution Validation
    // ========================================================================

    /// Validate that a buffer of `got` elements fits a network of
    /// `expected` channels.
    pub fn validate_buffer(expected: usize, got: usize) -> Result<(), NetworkError> {
        if got != expected {
            return Err(NetworkError::LengthMismatch { expected, got });
        }
        Ok(())
    }
}
