use std::ops::Mul;

use super::{ContinuousMap, DifferentiableMap};

/// A map whose output is multiplied by a fixed weight.
#[derive(Debug, Clone, Copy)]
pub struct Scaled<M> {
    map: M,
    weight: f64,
}

impl<M> Scaled<M> {
    pub(crate) const fn new(map: M, weight: f64) -> Self {
        Self { map, weight }
    }

    /// Returns the weight applied to the wrapped map.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<M> ContinuousMap for Scaled<M>
where
    M: ContinuousMap,
    M::Codomain: Mul<f64, Output = M::Codomain>,
{
    type Domain = M::Domain;
    type Codomain = M::Codomain;

    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        self.map.evaluate(input) * self.weight
    }
}

impl<M> DifferentiableMap for Scaled<M>
where
    M: DifferentiableMap,
    M::Codomain: Mul<f64, Output = M::Codomain>,
{
    fn derivative(&self, input: Self::Domain) -> Self::Codomain {
        self.map.derivative(input) * self.weight
    }
}
