use glam::DVec3;
use sinew_core::{ContinuousMap, DifferentiableMap};

use crate::{
    ControlPoints, SplineError, SplineValue,
    piecewise::{Piecewise, Segment},
};

/// A natural cubic interpolating spline.
///
/// Passes through every control point, is C2 across interior knots, and has
/// zero second derivative at both end knots. Outside the knot range it
/// continues the first or last segment's cubic.
///
/// Multi-component values are splined channel by channel over shared knots.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T> {
    points: ControlPoints<T>,
    pieces: Piecewise<T>,
}

/// A natural cubic spline through scalar values, e.g. radius along a bone.
pub type CubicSpline1D = CubicSpline<f64>;

/// A natural cubic spline through 3D points, e.g. a bone's center curve.
pub type SpatialCubicSpline = CubicSpline<DVec3>;

impl<T: SplineValue> CubicSpline<T> {
    /// Fewest control points accepted.
    pub const MIN_POINTS: usize = 4;

    /// Builds the spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::TooFewPoints`] for fewer than
    /// [`Self::MIN_POINTS`] points.
    pub fn new(points: ControlPoints<T>) -> Result<Self, SplineError> {
        points.require(Self::MIN_POINTS)?;

        let pieces = Piecewise::new(natural_segments(points.params(), points.values()));
        log::debug!(
            "built natural cubic spline with {} knots over [{}, {}]",
            points.len(),
            points.params()[0],
            points.params()[points.len() - 1],
        );

        Ok(Self { points, pieces })
    }

    /// Validates `points` and builds the spline in one step.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ControlPoints::new`] or [`Self::new`].
    pub fn from_points(points: impl IntoIterator<Item = (f64, T)>) -> Result<Self, SplineError> {
        Self::new(ControlPoints::new(points)?)
    }

    /// Returns the control points the spline interpolates.
    #[must_use]
    pub fn control_points(&self) -> &ControlPoints<T> {
        &self.points
    }

    /// Returns the knot parameters.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        self.points.params()
    }

    /// Returns the first and last knot.
    #[must_use]
    pub fn domain(&self) -> [f64; 2] {
        let knots = self.knots();
        [knots[0], knots[knots.len() - 1]]
    }
}

impl<T: SplineValue> ContinuousMap for CubicSpline<T> {
    type Domain = f64;
    type Codomain = T;

    fn evaluate(&self, t: f64) -> T {
        self.pieces.evaluate(self.knots(), t)
    }
}

impl<T: SplineValue> DifferentiableMap for CubicSpline<T> {
    fn derivative(&self, t: f64) -> T {
        self.pieces.derivative(self.knots(), t)
    }
}

/// Computes per-segment coefficients of the natural spline.
///
/// The second derivatives `m[i]` at the knots satisfy the tridiagonal system
/// `h[i-1]*m[i-1] + 2*(h[i-1] + h[i])*m[i] + h[i]*m[i+1] = 6*(s[i] - s[i-1])`
/// with `m[0] = m[n-1] = 0`, where `h` are interval widths and `s` interval
/// slopes. The system is strictly diagonally dominant, so the Thomas algorithm
/// needs no pivoting.
fn natural_segments<T: SplineValue>(knots: &[f64], values: &[T]) -> Vec<Segment<T>> {
    let n = knots.len();
    let widths: Vec<f64> = knots.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let slopes: Vec<T> = values
        .windows(2)
        .zip(&widths)
        .map(|(pair, &h)| (pair[1] - pair[0]) / h)
        .collect();

    // Forward sweep over the interior knots 1..n-1.
    let interior = n - 2;
    let mut upper = vec![0.0; interior];
    let mut rhs = vec![T::ZERO; interior];
    for k in 0..interior {
        let (h_lo, h_hi) = (widths[k], widths[k + 1]);
        let source = (slopes[k + 1] - slopes[k]) * 6.0;
        let (denominator, carried) = if k == 0 {
            (2.0 * (h_lo + h_hi), source)
        } else {
            (
                2.0 * (h_lo + h_hi) - h_lo * upper[k - 1],
                source - rhs[k - 1] * h_lo,
            )
        };
        upper[k] = h_hi / denominator;
        rhs[k] = carried / denominator;
    }

    // Back substitution; the end values stay zero.
    let mut second = vec![T::ZERO; n];
    for k in (0..interior).rev() {
        second[k + 1] = rhs[k] - second[k + 2] * upper[k];
    }

    (0..n - 1)
        .map(|i| {
            let h = widths[i];
            let (m0, m1) = (second[i], second[i + 1]);
            [
                values[i],
                slopes[i] - (m0 * 2.0 + m1) * (h / 6.0),
                m0 * 0.5,
                (m1 - m0) / (6.0 * h),
            ]
        })
        .collect()
}
