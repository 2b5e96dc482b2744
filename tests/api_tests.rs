#![cfg(feature = "dev")]
//! Tests for the fluent builder API.
//!
//! These tests verify the configuration flow of `SortingNetwork`: defaults,
//! required parameters, duplicate detection, and the domain errors surfaced
//! at build time.
//!
//! ## Test Organization
//!
//! 1. **Happy Path** - Valid configurations compile working networks
//! 2. **Defaults** - Algorithm defaults to Bose-Nelson
//! 3. **Builder Errors** - Missing width, duplicate parameters
//! 4. **Domain Errors** - Width/algorithm combinations rejected at build

use sortnet::prelude::*;

// ============================================================================
// Happy Path Tests
// ============================================================================

/// Test a fully specified build.
#[test]
fn test_build_with_width_and_algorithm() {
    let network = SortingNetwork::new()
        .width(6)
        .algorithm(BoseNelson)
        .build()
        .unwrap();

    assert_eq!(network.width(), 6);
    assert_eq!(network.pair_count(), 12);
}

/// Test that width 1 builds an empty network that still applies.
#[test]
fn test_build_width_one_is_empty() {
    let network = SortingNetwork::new().width(1).build().unwrap();

    assert_eq!(network.width(), 1);
    assert!(network.is_empty());
    assert_eq!(network.depth(), 0);

    let mut data = [42];
    network.apply(&mut data).unwrap();
    assert_eq!(data, [42]);
}

// ============================================================================
// Default Tests
// ============================================================================

/// Test that the algorithm defaults to Bose-Nelson.
///
/// The default must accept non-power-of-two widths, which pins it to one of
/// the general constructions; the pair count pins it to Bose-Nelson.
#[test]
fn test_algorithm_defaults_to_bose_nelson() {
    let defaulted = SortingNetwork::new().width(6).build().unwrap();
    let explicit = SortingNetwork::new()
        .width(6)
        .algorithm(BoseNelson)
        .build()
        .unwrap();

    assert_eq!(defaulted, explicit);
}

// ============================================================================
// Builder Error Tests
// ============================================================================

/// Test that build() without width fails.
#[test]
fn test_missing_width() {
    let err = SortingNetwork::new().algorithm(Bubble).build().unwrap_err();
    assert_eq!(err, NetworkError::MissingWidth);
}

/// Test that setting width twice is reported.
#[test]
fn test_duplicate_width() {
    let err = SortingNetwork::new().width(4).width(8).build().unwrap_err();
    assert_eq!(err, NetworkError::DuplicateParameter { parameter: "width" });
}

/// Test that setting the algorithm twice is reported.
#[test]
fn test_duplicate_algorithm() {
    let err = SortingNetwork::new()
        .width(4)
        .algorithm(Bubble)
        .algorithm(Insertion)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        NetworkError::DuplicateParameter {
            parameter: "algorithm"
        }
    );
}

/// Test that duplicate reporting wins over other diagnostics.
///
/// A duplicated parameter means the configuration is ambiguous, so it is
/// reported even when the final values would also be invalid.
#[test]
fn test_duplicate_reported_before_domain_errors() {
    let err = SortingNetwork::new()
        .width(0)
        .width(0)
        .build()
        .unwrap_err();

    assert_eq!(err, NetworkError::DuplicateParameter { parameter: "width" });
}

// ============================================================================
// Domain Error Tests
// ============================================================================

/// Test that width zero is rejected for every algorithm.
#[test]
fn test_zero_width_rejected() {
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::BoseNelson,
        Algorithm::BatcherOddEvenMerge,
        Algorithm::BitonicMerge,
        Algorithm::SizeOptimized,
    ] {
        let err = SortingNetwork::new()
            .width(0)
            .algorithm(algorithm)
            .build()
            .unwrap_err();

        assert_eq!(err, NetworkError::ZeroWidth, "algorithm {:?}", algorithm);
    }
}

/// Test that the merge-based constructions reject non-power-of-two widths.
#[test]
fn test_power_of_two_domain() {
    for algorithm in [Algorithm::BatcherOddEvenMerge, Algorithm::BitonicMerge] {
        let err = SortingNetwork::new()
            .width(6)
            .algorithm(algorithm)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            NetworkError::WidthNotPowerOfTwo {
                algorithm: algorithm.name(),
                width: 6,
            }
        );

        // Power-of-two widths in the same range are fine.
        assert!(SortingNetwork::new()
            .width(8)
            .algorithm(algorithm)
            .build()
            .is_ok());
    }
}

/// Test the size-optimized table bound.
#[test]
fn test_size_optimized_table_bound() {
    let err = SortingNetwork::new()
        .width(33)
        .algorithm(SizeOptimized)
        .build()
        .unwrap_err();

    assert_eq!(err, NetworkError::WidthExceedsTable { width: 33, max: 32 });

    assert!(SortingNetwork::new()
        .width(32)
        .algorithm(SizeOptimized)
        .build()
        .is_ok());
}

/// Test that error messages render with context.
#[test]
fn test_error_display() {
    let message = NetworkError::LengthMismatch {
        expected: 8,
        got: 5,
    }
    .to_string();
    assert_eq!(message, "buffer length 5 does not match network width 8");

    let message = NetworkError::WidthNotPowerOfTwo {
        algorithm: "BitonicMerge",
        width: 6,
    }
    .to_string();
    assert_eq!(message, "BitonicMerge networks require a power-of-two width, got 6");
}
