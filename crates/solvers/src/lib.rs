//! Numerical solvers for the Sinew geometry kernel.
//!
//! # Solvers
//!
//! - [`polynomial`]: closed-form real roots of polynomials up to degree four,
//!   plus polynomial continuous maps built on them

pub mod polynomial;
