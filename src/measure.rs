//! Numeric adapters for distances, costs and flows.
//!
//! Shortest-path distances must be totally ordered, so real-valued weights go
//! through [`ordered_float::OrderedFloat`] rather than raw `f32`/`f64`. For
//! integer types the positive-infinity sentinel is the type's maximum value.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, SubAssign};

use num_traits::{Bounded, Float, One, Signed, Zero};
use ordered_float::OrderedFloat;

/// An ordered numeric type usable as a shortest-path distance.
///
/// Provides the zero and positive-infinity sentinels the search state is
/// initialized with. `Ord` (not just `PartialOrd`) is required so distances
/// can key a binary heap.
pub trait DistanceMeasure: Copy + Ord + Zero + Add<Output = Self> + Debug {
    /// The positive-infinity sentinel (the maximum value for integer types).
    fn infinity() -> Self;

    /// Whether this value is the infinity sentinel.
    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }

    /// Whether this value is NaN. Always false for integer types.
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_distance_measure_for_int {
    ($($t:ty),*) => {
        $(
            impl DistanceMeasure for $t {
                fn infinity() -> Self {
                    <$t as Bounded>::max_value()
                }
            }
        )*
    };
}

impl_distance_measure_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T> DistanceMeasure for OrderedFloat<T>
where
    T: Float + Debug + ordered_float::FloatCore,
{
    fn infinity() -> Self {
        OrderedFloat(<T as Float>::infinity())
    }

    fn is_infinite(self) -> bool {
        <T as Float>::is_infinite(self.0) && self.0 > T::zero()
    }

    fn is_nan(self) -> bool {
        <T as Float>::is_nan(self.0)
    }
}

/// A distance measure that is an integer, as required by Dial's algorithm to
/// index its bucket ring.
pub trait IntegralMeasure: DistanceMeasure {
    /// Convert a non-negative distance to an array index.
    fn to_index(self) -> usize;
}

macro_rules! impl_integral_measure_for_uint {
    ($($t:ty),*) => {
        $(
            impl IntegralMeasure for $t {
                fn to_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

macro_rules! impl_integral_measure_for_sint {
    ($($t:ty),*) => {
        $(
            impl IntegralMeasure for $t {
                fn to_index(self) -> usize {
                    debug_assert!(self >= 0, "negative distance cannot index a bucket");
                    self as usize
                }
            }
        )*
    };
}

impl_integral_measure_for_uint!(u8, u16, u32, u64, u128, usize);
impl_integral_measure_for_sint!(i8, i16, i32, i64, i128, isize);

/// An arc-cost type. Costs must be signed: every reverse arc in a residual
/// network carries the negation of its transpose's cost.
pub trait CostMeasure: DistanceMeasure + Signed {}

impl<T> CostMeasure for T where T: DistanceMeasure + Signed {}

/// A flow type. Signed because node excess is a signed surplus (positive for
/// sources, negative for sinks).
pub trait FlowMeasure:
    DistanceMeasure + Signed + One + AddAssign<Self> + SubAssign<Self>
{
}

impl<T> FlowMeasure for T where
    T: DistanceMeasure + Signed + One + AddAssign<Self> + SubAssign<Self>
{
}
