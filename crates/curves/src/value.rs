use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Sub},
};

use glam::DVec3;

/// A value a spline can interpolate.
///
/// Splines treat values as a vector space over `f64`, so every channel of a
/// multi-component value is interpolated independently over the same knots.
pub trait SplineValue:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    const ZERO: Self;

    /// Returns true if every component is finite.
    fn is_finite(self) -> bool;
}

impl SplineValue for f64 {
    const ZERO: Self = 0.0;

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl SplineValue for DVec3 {
    const ZERO: Self = DVec3::ZERO;

    fn is_finite(self) -> bool {
        DVec3::is_finite(self)
    }
}
