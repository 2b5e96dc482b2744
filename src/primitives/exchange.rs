//! Branch-free exchange capability for scalar element types.
//!
//! ## Purpose
//!
//! This module provides the [`Exchange`] trait, the compare-and-swap step the
//! executor uses when no explicit comparator is supplied. The default method
//! is the branchy form (compare, then swap); primitive integers and floats
//! override it with min/max selection, which compiles to conditional moves
//! instead of a data-dependent branch.
//!
//! ## Design notes
//!
//! * **Substitutability**: For inputs on which `<` is a strict weak order,
//!   the branch-free overrides produce exactly the result of the default
//!   branchy method. This is an optimization hook, not a semantic change.
//! * **Floats**: The overrides use IEEE min/max via `num_traits::Float`, so
//!   the position of NaN values is unspecified (the branchy form leaves them
//!   unspecified too, since no comparison involving NaN holds).
//!
//! ## Key concepts
//!
//! * **Capability trait**: Custom element types opt in with `impl Exchange
//!   for T {}`, inheriting the branchy default; only types with a cheaper
//!   selection primitive need a manual body.
//!
//! ## Non-goals
//!
//! * This module does not iterate the pair sequence (handled by the engine).

// External dependencies
use core::mem::swap;
use num_traits::Float;

// ============================================================================
// Exchange Trait
// ============================================================================

/// Compare-and-swap step between two channels of a network.
///
/// `lower` is the channel that must end up with the preceding element.
pub trait Exchange: PartialOrd + Sized {
    /// Place the preceding element in `lower` and the other in `upper`.
    #[inline]
    fn compare_exchange(lower: &mut Self, upper: &mut Self) {
        if upper < lower {
            swap(lower, upper);
        }
    }
}

// ============================================================================
// Branch-Free Overrides
// ============================================================================

/// Min/max selection for floating-point channels.
#[inline]
fn float_exchange<T: Float>(lower: &mut T, upper: &mut T) {
    let min = lower.min(*upper);
    let max = lower.max(*upper);
    *lower = min;
    *upper = max;
}

impl Exchange for f32 {
    #[inline]
    fn compare_exchange(lower: &mut Self, upper: &mut Self) {
        float_exchange(lower, upper);
    }
}

impl Exchange for f64 {
    #[inline]
    fn compare_exchange(lower: &mut Self, upper: &mut Self) {
        float_exchange(lower, upper);
    }
}

macro_rules! impl_exchange_for_int {
    ($($t:ty),*) => {
        $(
            impl Exchange for $t {
                #[inline]
                fn compare_exchange(lower: &mut Self, upper: &mut Self) {
                    let min = (*lower).min(*upper);
                    let max = (*lower).max(*upper);
                    *lower = min;
                    *upper = max;
                }
            }
        )*
    };
}

impl_exchange_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
