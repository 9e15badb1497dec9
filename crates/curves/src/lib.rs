//! Interpolating splines and curves for the Sinew geometry kernel.
//!
//! Every curve here is a [`ContinuousMap`] from a real parameter to a value
//! and a [`DifferentiableMap`] with an analytic first derivative:
//!
//! - [`QuadraticSpline1D`]: C1 piecewise quadratic through scalar points
//! - [`CubicSpline1D`]: natural cubic spline through scalar points
//! - [`SpatialCubicSpline`]: natural cubic spline through 3D points
//! - [`Line`]: a straight line, e.g. the axis of a joint
//!
//! Splines are built from a validated [`ControlPoints`] table. Parameters
//! outside the knot range extrapolate with the boundary segment's polynomial.
//!
//! [`ContinuousMap`]: sinew_core::ContinuousMap
//! [`DifferentiableMap`]: sinew_core::DifferentiableMap

mod control_points;
mod cubic;
mod error;
mod line;
mod piecewise;
mod quadratic;
mod value;

pub use control_points::ControlPoints;
pub use cubic::{CubicSpline, CubicSpline1D, SpatialCubicSpline};
pub use error::SplineError;
pub use line::Line;
pub use quadratic::{QuadraticSpline, QuadraticSpline1D};
pub use value::SplineValue;
