//! Core traits and types for the Sinew geometry kernel.
//!
//! This crate defines the shared abstractions that splines, solvers, and
//! surfaces build on:
//!
//! - [`ContinuousMap`]: a pure function object from a domain to a codomain
//! - [`DifferentiableMap`]: a continuous map with an analytic first derivative
//! - [`Projection`] and [`Lifted`]: reduce a higher-dimensional input to a
//!   lower-dimensional domain, then delegate (e.g. [`DomainToVector2`])
//! - [`Constant`], [`Identity`], [`FnMap`]: leaf maps

mod closure;
mod constant;
mod lift;
mod map;

pub use closure::{FnMap, from_fn};
pub use constant::{Constant, Identity};
pub use lift::{Axis2, Axis3, DomainToVector2, Extract, Lifted, Projection};
pub use map::{Chain, ContinuousMap, DifferentiableMap, MappedOutput, Product, Scaled, Sum};
