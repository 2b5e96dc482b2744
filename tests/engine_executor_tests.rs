#![cfg(feature = "dev")]
//! Tests for network execution over user buffers.
//!
//! These tests verify the three replay entry points (`apply`, `apply_by`,
//! `sort`) against reference sorts, orderings, and degenerate inputs.
//!
//! ## Test Organization
//!
//! 1. **Sorting Correctness** - Random, sorted, and reverse-sorted buffers
//! 2. **Custom Orderings** - Descending and key-based predicates
//! 3. **Capability Path** - `sort` agrees with `apply`
//! 4. **Properties** - Idempotence, permutation preservation
//! 5. **Error Handling** - Buffer length mismatches

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sortnet::prelude::*;

const ALL_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::BoseNelson,
    Algorithm::BatcherOddEvenMerge,
    Algorithm::BitonicMerge,
    Algorithm::SizeOptimized,
];

/// Widths to exercise per algorithm, respecting each domain.
fn supported_widths(algorithm: Algorithm) -> Vec<usize> {
    (1..=16).filter(|&n| algorithm.supports(n)).collect()
}

// ============================================================================
// Sorting Correctness Tests
// ============================================================================

/// Test every (algorithm, width) combination on seeded random buffers.
#[test]
fn test_sorts_random_buffers() {
    let mut rng = StdRng::seed_from_u64(42);

    for algorithm in ALL_ALGORITHMS {
        for width in supported_widths(algorithm) {
            let network = Network::with_algorithm(algorithm, width).unwrap();

            for _ in 0..50 {
                let mut data: Vec<i32> = (0..width).map(|_| rng.gen_range(-100..100)).collect();
                let mut expected = data.clone();
                expected.sort_unstable();

                network.apply(&mut data).unwrap();
                assert_eq!(data, expected, "{:?} width {}", algorithm, width);
            }
        }
    }
}

/// Test already-sorted and reverse-sorted buffers.
#[test]
fn test_sorts_extremal_orders() {
    for algorithm in ALL_ALGORITHMS {
        for width in supported_widths(algorithm) {
            let network = Network::with_algorithm(algorithm, width).unwrap();
            let sorted: Vec<usize> = (0..width).collect();

            let mut ascending = sorted.clone();
            network.apply(&mut ascending).unwrap();
            assert_eq!(ascending, sorted);

            let mut descending: Vec<usize> = (0..width).rev().collect();
            network.apply(&mut descending).unwrap();
            assert_eq!(descending, sorted, "{:?} width {}", algorithm, width);
        }
    }
}

/// Test buffers with ties.
#[test]
fn test_sorts_with_duplicates() {
    let network = Network::with_algorithm(Algorithm::BoseNelson, 8).unwrap();

    let mut data = [3, 1, 3, 1, 2, 2, 1, 3];
    network.apply(&mut data).unwrap();
    assert_eq!(data, [1, 1, 1, 2, 2, 3, 3, 3]);

    let mut constant = [7u8; 8];
    network.apply(&mut constant).unwrap();
    assert_eq!(constant, [7u8; 8]);
}

/// Test floating-point buffers through the natural order.
#[test]
fn test_sorts_floats() {
    let network = Network::with_algorithm(Algorithm::SizeOptimized, 5).unwrap();

    let mut data = [0.5f64, -1.25, 3.0, 0.0, -7.5];
    network.apply(&mut data).unwrap();
    assert_eq!(data, [-7.5, -1.25, 0.0, 0.5, 3.0]);
}

// ============================================================================
// Custom Ordering Tests
// ============================================================================

/// Test descending order via a reversed predicate.
#[test]
fn test_apply_by_descending() {
    let network = Network::with_algorithm(Algorithm::Bubble, 4).unwrap();

    let mut data = [1, 4, 2, 3];
    network.apply_by(&mut data, |a, b| a > b).unwrap();
    assert_eq!(data, [4, 3, 2, 1]);
}

/// Test ordering by a key of a non-primitive element type.
#[test]
fn test_apply_by_key() {
    let network = Network::with_algorithm(Algorithm::SizeOptimized, 4).unwrap();

    let mut data = [("d", 4), ("a", 1), ("c", 3), ("b", 2)];
    network.apply_by(&mut data, |a, b| a.1 < b.1).unwrap();
    assert_eq!(data, [("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
}

/// Test that the same network serves both directions.
#[test]
fn test_same_network_both_directions() {
    let network = Network::with_algorithm(Algorithm::Bubble, 4).unwrap();

    let mut ascending = [4, 3, 2, 1];
    network.apply(&mut ascending).unwrap();
    assert_eq!(ascending, [1, 2, 3, 4]);

    let mut descending = [4, 3, 2, 1];
    network.apply_by(&mut descending, |a, b| a > b).unwrap();
    assert_eq!(descending, [4, 3, 2, 1]);
}

// ============================================================================
// Capability Path Tests
// ============================================================================

/// Test that `sort` and `apply` produce identical buffers on integers.
#[test]
fn test_sort_agrees_with_apply_integers() {
    let mut rng = StdRng::seed_from_u64(7);

    for algorithm in ALL_ALGORITHMS {
        for width in supported_widths(algorithm) {
            let network = Network::with_algorithm(algorithm, width).unwrap();

            for _ in 0..20 {
                let data: Vec<u64> = (0..width).map(|_| rng.gen_range(0..1000)).collect();

                let mut branchy = data.clone();
                let mut branch_free = data;
                network.apply(&mut branchy).unwrap();
                network.sort(&mut branch_free).unwrap();

                assert_eq!(branchy, branch_free, "{:?} width {}", algorithm, width);
            }
        }
    }
}

/// Test that `sort` and `apply` produce identical buffers on finite floats.
#[test]
fn test_sort_agrees_with_apply_floats() {
    let mut rng = StdRng::seed_from_u64(11);
    let network = Network::with_algorithm(Algorithm::SizeOptimized, 16).unwrap();

    for _ in 0..20 {
        let data: Vec<f32> = (0..16).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let mut branchy = data.clone();
        let mut branch_free = data;
        network.apply(&mut branchy).unwrap();
        network.sort(&mut branch_free).unwrap();

        assert_eq!(branchy, branch_free);
    }
}

/// Test the capability path on a signed integer reverse run.
#[test]
fn test_sort_signed_integers() {
    let network = Network::with_algorithm(Algorithm::BitonicMerge, 8).unwrap();

    let mut data = [3i64, -1, 4, -1, 5, -9, 2, -6];
    network.sort(&mut data).unwrap();
    assert_eq!(data, [-9, -6, -1, -1, 2, 3, 4, 5]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that re-applying a network to sorted data changes nothing.
#[test]
fn test_idempotence() {
    let mut rng = StdRng::seed_from_u64(99);

    for algorithm in ALL_ALGORITHMS {
        let width = if algorithm.supports(12) { 12 } else { 16 };
        let network = Network::with_algorithm(algorithm, width).unwrap();

        let mut data: Vec<i32> = (0..width).map(|_| rng.gen_range(-50..50)).collect();
        network.apply(&mut data).unwrap();

        let once = data.clone();
        network.apply(&mut data).unwrap();
        assert_eq!(data, once, "{:?}", algorithm);
    }
}

/// Test that the output is a permutation of the input.
#[test]
fn test_permutation_preserved() {
    let mut rng = StdRng::seed_from_u64(3);
    let network = Network::with_algorithm(Algorithm::BoseNelson, 10).unwrap();

    let input: Vec<u8> = (0..10).map(|_| rng.gen_range(0..5)).collect();
    let mut output = input.clone();
    network.apply(&mut output).unwrap();

    let mut input_sorted = input;
    input_sorted.sort_unstable();
    assert_eq!(output, input_sorted);
}

/// Test that permutations of one multiset converge to the same buffer.
#[test]
fn test_order_invariance() {
    let network = Network::with_algorithm(Algorithm::BatcherOddEvenMerge, 8).unwrap();

    let permutations = [
        [5, 1, 5, 2, 9, 2, 1, 9],
        [9, 9, 5, 5, 2, 2, 1, 1],
        [1, 2, 5, 9, 1, 2, 5, 9],
    ];

    let mut outputs = Vec::new();
    for permutation in permutations {
        let mut data = permutation;
        network.apply(&mut data).unwrap();
        outputs.push(data);
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], outputs[2]);
    assert_eq!(outputs[0], [1, 1, 2, 2, 5, 5, 9, 9]);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test that short and long buffers are rejected untouched.
#[test]
fn test_length_mismatch() {
    let network = Network::with_algorithm(Algorithm::Bubble, 4).unwrap();

    let mut short = [3, 1, 2];
    assert_eq!(
        network.apply(&mut short),
        Err(NetworkError::LengthMismatch {
            expected: 4,
            got: 3
        })
    );
    assert_eq!(short, [3, 1, 2], "rejected buffer must be untouched");

    let mut long = [5, 4, 3, 2, 1];
    assert_eq!(
        network.sort(&mut long),
        Err(NetworkError::LengthMismatch {
            expected: 4,
            got: 5
        })
    );
    assert_eq!(long, [5, 4, 3, 2, 1]);
}
