//! Closed-form real roots of polynomials up to degree four.
//!
//! # Algorithm
//!
//! - Quadratic: the quadratic formula in its cancellation-free form.
//! - Cubic: Cardano's method on the depressed cubic, switching to the
//!   trigonometric form when all three roots are real.
//! - Quartic: Ferrari's method. The depressed quartic is split into two
//!   quadratics using the largest root of its resolvent cubic; biquadratics
//!   are solved directly.
//!
//! A leading coefficient that is zero (or negligible next to the others)
//! reduces the problem to the next lower degree instead of dividing by zero.
//!
//! # Numerical Policy
//!
//! A negative discriminant within [`Config::rel_tol`] of its coefficient
//! scale is read as zero, so the complex pair becomes a repeated real root.
//! The discriminant grows with the square of the imaginary part: a pair
//! `x ± iy` is kept as real when `y` is below about `sqrt(rel_tol)` times the
//! root's magnitude, not `rel_tol` times.
//! Every real root is refined with a few guarded Newton steps on the original
//! polynomial, sorted ascending, and merged with its neighbor when the two
//! agree within [`Config::dedup_tol`].
//!
//! Solvers never fail: "no real roots" is an empty [`Roots`].

mod config;
mod function;
mod roots;
mod solve;


pub use config::{Config, ConfigError};
pub use function::{CubicFunction, QuadraticFunction, QuarticFunction};
pub use roots::{IntoIter, MAX_ROOTS, Roots};
pub use solve::{
    solve_cubic, solve_cubic_with, solve_linear, solve_quadratic, solve_quadratic_with,
    solve_quartic, solve_quartic_with,
};
