use sinew_core::{ContinuousMap, DifferentiableMap};

use crate::{ControlPoints, SplineError, SplineValue, piecewise::Piecewise};

/// A C1 piecewise-quadratic interpolating spline.
///
/// The first segment is the straight line through the first two points. Each
/// following segment starts with the slope the previous one ended with and
/// bends just enough to reach the next point. Outside the knot range the
/// boundary segment's polynomial continues.
///
/// # Example
///
/// ```
/// use sinew_core::ContinuousMap;
/// use sinew_curves::QuadraticSpline1D;
///
/// let spline = QuadraticSpline1D::from_points([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]).unwrap();
/// assert_eq!(spline.evaluate(2.0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticSpline<T> {
    points: ControlPoints<T>,
    pieces: Piecewise<T>,
}

/// A quadratic spline through scalar values.
pub type QuadraticSpline1D = QuadraticSpline<f64>;

impl<T: SplineValue> QuadraticSpline<T> {
    /// Fewest control points accepted.
    pub const MIN_POINTS: usize = 3;

    /// Builds the spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::TooFewPoints`] for fewer than
    /// [`Self::MIN_POINTS`] points.
    pub fn new(points: ControlPoints<T>) -> Result<Self, SplineError> {
        points.require(Self::MIN_POINTS)?;

        let knots = points.params();
        let values = points.values();

        let mut slope = (values[1] - values[0]) / (knots[1] - knots[0]);
        let mut segments = Vec::with_capacity(knots.len() - 1);
        for i in 0..knots.len() - 1 {
            let h = knots[i + 1] - knots[i];
            let secant = (values[i + 1] - values[i]) / h;
            let curvature = (secant - slope) / h;
            segments.push([values[i], slope, curvature, T::ZERO]);
            slope = secant * 2.0 - slope;
        }

        log::debug!(
            "built quadratic spline with {} knots over [{}, {}]",
            knots.len(),
            knots[0],
            knots[knots.len() - 1],
        );

        Ok(Self {
            pieces: Piecewise::new(segments),
            points,
        })
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

impl<T: SplineValue> ContinuousMap for QuadraticSpline<T> {
    type Domain = f64;
    type Codomain = T;

    fn evaluate(&self, t: f64) -> T {
        self.pieces.evaluate(self.knots(), t)
    }
}

impl<T: SplineValue> DifferentiableMap for QuadraticSpline<T> {
    fn derivative(&self, t: f64) -> T {
        self.pieces.derivative(self.knots(), t)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn squares() -> QuadraticSpline1D {
        QuadraticSpline::from_points([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]).unwrap()
    }

    #[test_log::test]
    fn interpolates_every_control_point() {
        let spline = QuadraticSpline::from_points([
            (0.0, 1.0),
            (0.4, -2.0),
            (1.0, 0.5),
            (2.5, 0.5),
            (2.6, 7.0),
        ])
        .unwrap();

        for (t, &y) in spline.control_points().iter() {
            assert_relative_eq!(spline.evaluate(t), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn first_derivative_is_continuous_at_interior_knots() {
        let spline = squares();
        let knots = spline.knots();
        for i in 1..knots.len() - 1 {
            let [_, b, c, _] = spline.pieces.segments()[i - 1];
            let h = knots[i] - knots[i - 1];
            assert_relative_eq!(b + 2.0 * c * h, spline.derivative(knots[i]), epsilon = 1e-12);
        }
    }

    #[test]
    fn follows_hand_built_segments() {
        // Segments: t, then 1 + (t-1) + 2(t-1)², then 4 + 5(t-2).
        let spline = squares();
        assert_relative_eq!(spline.evaluate(0.5), 0.5);
        assert_relative_eq!(spline.evaluate(1.5), 2.0);
        assert_relative_eq!(spline.evaluate(2.5), 6.5);
        assert_relative_eq!(spline.derivative(1.5), 3.0);
    }

    #[test]
    fn extrapolates_with_boundary_segments() {
        let spline = squares();
        assert_eq!(spline.domain(), [0.0, 3.0]);
        assert_relative_eq!(spline.evaluate(-1.0), -1.0);
        assert_relative_eq!(spline.evaluate(4.0), 14.0);
        assert_relative_eq!(spline.derivative(10.0), 5.0);
    }

    #[test]
    fn requires_three_points() {
        let two = QuadraticSpline1D::from_points([(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(two, Err(SplineError::TooFewPoints { min: 3, actual: 2 }));

        let unordered = QuadraticSpline1D::from_points([(0.0, 0.0), (2.0, 1.0), (1.0, 0.0)]);
        assert!(matches!(unordered, Err(SplineError::NonIncreasing { index: 2, .. })));
    }
}
