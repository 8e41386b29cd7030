//! Associated data usable as a distance / cost measure.

use std::fmt::Debug;
use std::ops::Add;

/// Associated data that can be used for measures (such as path length).
///
/// This is a direct generalization of `petgraph::algo::Measure`: anything
/// `Debug + PartialOrd + Add + Default + Clone` can accumulate along a path.
pub trait Measure: Debug + PartialOrd + Add<Self, Output = Self> + Default + Clone {}

impl<M> Measure for M where M: Debug + PartialOrd + Add<M, Output = M> + Default + Clone {}

/// A floating-point measure, with an explicit zero and an explicit infinity.
///
/// The relaxation cores need `infinite()` to seed "unreached" distances
/// before any edge has been relaxed, and `zero()` for the identity starting
/// distance at a source.
pub trait FloatMeasure: Measure + Copy + PartialOrd {
    fn zero() -> Self;
    fn infinite() -> Self;
}

impl FloatMeasure for f32 {
    fn zero() -> Self {
        0.
    }
    fn infinite() -> Self {
        f32::INFINITY
    }
}

impl FloatMeasure for f64 {
    fn zero() -> Self {
        0.
    }
    fn infinite() -> Self {
        f64::INFINITY
    }
}
