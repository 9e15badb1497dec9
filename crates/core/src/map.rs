mod chain;
mod mapped_output;
mod product;
mod scaled;
mod sum;

use std::{
    ops::{Add, Mul},
    rc::Rc,
    sync::Arc,
};

pub use chain::Chain;
pub use mapped_output::MappedOutput;
pub use product::Product;
pub use scaled::Scaled;
pub use sum::Sum;

use crate::lift::{Extract, Lifted, Projection};

/// The core trait for defining functions in Sinew.
///
/// A `ContinuousMap` takes a point in its domain and produces a point in its
/// codomain. Maps can be chained, lifted onto higher-dimensional domains, and
/// combined pointwise to build curves and surfaces out of simpler parts.
///
/// ## Implementing `ContinuousMap`
///
/// Implement [`evaluate()`] and nothing else. The result must depend only on
/// the input and on parameters fixed at construction; repeated calls with the
/// same input return bit-for-bit identical values. Shared references to a map
/// can therefore be evaluated from many threads at once without locking.
///
/// ## Composing Maps
///
/// - [`ContinuousMap::chain()`] – feed this map's output into another map.
/// - [`ContinuousMap::map_output()`] – post-process the output with a closure.
/// - [`ContinuousMap::lift()`] – accept a higher-dimensional input by projecting it first.
/// - [`ContinuousMap::plus()`], [`ContinuousMap::times()`], [`ContinuousMap::scaled()`] –
///   pointwise arithmetic on codomains that support it.
///
/// [`evaluate()`]: ContinuousMap::evaluate
pub trait ContinuousMap {
    type Domain;
    type Codomain;

    /// Evaluates the map at the given point.
    fn evaluate(&self, input: Self::Domain) -> Self::Codomain;

    /// Chains this map with another.
    ///
    /// # Example
    ///
    /// ```
    /// use sinew_core::{ContinuousMap, from_fn};
    ///
    /// let double = from_fn(|x: f64| 2.0 * x);
    /// let increment = from_fn(|x: f64| x + 1.0);
    ///
    /// let chain = double.chain(increment);
    /// assert_eq!(chain.evaluate(3.0), 7.0);
    /// ```
    fn chain<Next>(self, next: Next) -> Chain<Self, Next>
    where
        Self: Sized,
        Next: ContinuousMap<Domain = Self::Codomain>,
    {
        Chain::new(self, next)
    }

    /// Transforms this map's output with a closure.
    fn map_output<OutputMap, NewCodomain>(
        self,
        output_map: OutputMap,
    ) -> MappedOutput<Self, OutputMap, NewCodomain>
    where
        Self: Sized,
        OutputMap: Fn(Self::Codomain) -> NewCodomain,
    {
        MappedOutput::new(self, output_map)
    }

    /// Lifts this map onto the input type of `projection`.
    ///
    /// The lifted map projects each input and evaluates this map at the
    /// projected point, so its output is constant along every set of inputs
    /// that share a projection.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::DVec2;
    /// use sinew_core::{ContinuousMap, from_fn};
    ///
    /// let profile = from_fn(|t: f64| t * t);
    /// let sheet = profile.lift(DVec2::new(0.0, 1.0));
    ///
    /// // Varies along y only.
    /// assert_eq!(sheet.evaluate(DVec2::new(5.0, 2.0)), 4.0);
    /// assert_eq!(sheet.evaluate(DVec2::new(-1.0, 2.0)), 4.0);
    /// ```
    fn lift<P>(self, projection: P) -> Lifted<P, Self>
    where
        Self: Sized,
        P: Projection<Output = Self::Domain>,
    {
        Lifted::new(projection, self)
    }

    /// Lifts this map onto `NewDomain` using a closure that extracts this
    /// map's input from the larger one.
    fn lift_with<F, NewDomain>(self, extract: F) -> Lifted<Extract<F, NewDomain>, Self>
    where
        Self: Sized,
        F: Fn(NewDomain) -> Self::Domain,
    {
        Lifted::new(Extract::new(extract), self)
    }

    /// Adds the outputs of two maps sharing a domain.
    fn plus<Other>(self, other: Other) -> Sum<Self, Other>
    where
        Self: Sized,
        Self::Domain: Clone,
        Self::Codomain: Add<Other::Codomain>,
        Other: ContinuousMap<Domain = Self::Domain>,
    {
        Sum::new(self, other)
    }

    /// Multiplies the outputs of two maps sharing a domain.
    fn times<Other>(self, other: Other) -> Product<Self, Other>
    where
        Self: Sized,
        Self::Domain: Clone,
        Self::Codomain: Mul<Other::Codomain>,
        Other: ContinuousMap<Domain = Self::Domain>,
    {
        Product::new(self, other)
    }

    /// Multiplies this map's output by a fixed weight.
    fn scaled(self, weight: f64) -> Scaled<Self>
    where
        Self: Sized,
        Self::Codomain: Mul<f64, Output = Self::Codomain>,
    {
        Scaled::new(self, weight)
    }
}

/// A continuous map on a scalar parameter with an analytic first derivative.
///
/// The derivative shares the map's codomain: a curve `f64 -> DVec3` has
/// a tangent `f64 -> DVec3`.
pub trait DifferentiableMap: ContinuousMap {
    /// Evaluates the first derivative at the given point.
    fn derivative(&self, input: Self::Domain) -> Self::Codomain;
}

macro_rules! forward_pointer_impls {
    ($($pointer:ty),+ $(,)?) => {
        $(
            impl<M: ContinuousMap + ?Sized> ContinuousMap for $pointer {
                type Domain = M::Domain;
                type Codomain = M::Codomain;

                fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
                    (**self).evaluate(input)
                }
            }

            impl<M: DifferentiableMap + ?Sized> DifferentiableMap for $pointer {
                fn derivative(&self, input: Self::Domain) -> Self::Codomain {
                    (**self).derivative(input)
                }
            }
        )+
    };
}

forward_pointer_impls!(&M, Box<M>, Rc<M>, Arc<M>);
