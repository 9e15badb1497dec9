use std::ops::Mul;

use super::ContinuousMap;

/// The pointwise product of two maps over the same domain.
///
/// Useful for modulating a profile, e.g. a radius curve times a per-angle
/// bulge factor.
#[derive(Debug, Clone, Copy)]
pub struct Product<A, B> {
    left: A,
    right: B,
}

impl<A, B> Product<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> ContinuousMap for Product<A, B>
where
    A: ContinuousMap,
    A::Domain: Clone,
    A::Codomain: Mul<B::Codomain>,
    B: ContinuousMap<Domain = A::Domain>,
{
    type Domain = A::Domain;
    type Codomain = <A::Codomain as Mul<B::Codomain>>::Output;

    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        self.left.evaluate(input.clone()) * self.right.evaluate(input)
    }
}
