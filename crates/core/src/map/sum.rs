use std::ops::Add;

use super::{ContinuousMap, DifferentiableMap};

/// The pointwise sum of two maps over the same domain.
#[derive(Debug, Clone, Copy)]
pub struct Sum<A, B> {
    left: A,
    right: B,
}

impl<A, B> Sum<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> ContinuousMap for Sum<A, B>
where
    A: ContinuousMap,
    A::Domain: Clone,
    A::Codomain: Add<B::Codomain>,
    B: ContinuousMap<Domain = A::Domain>,
{
    type Domain = A::Domain;
    type Codomain = <A::Codomain as Add<B::Codomain>>::Output;

    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        self.left.evaluate(input.clone()) + self.right.evaluate(input)
    }
}

impl<A, B> DifferentiableMap for Sum<A, B>
where
    A: DifferentiableMap,
    A::Domain: Clone,
    A::Codomain: Add<B::Codomain, Output = A::Codomain>,
    B: DifferentiableMap<Domain = A::Domain>,
{
    fn derivative(&self, input: Self::Domain) -> Self::Codomain {
        self.left.derivative(input.clone()) + self.right.derivative(input)
    }
}
