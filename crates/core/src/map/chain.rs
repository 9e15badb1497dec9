use super::{ContinuousMap, DifferentiableMap};

/// A map that evaluates two maps sequentially.
///
/// Created by [`ContinuousMap::chain()`]. The first map's codomain must match
/// the second map's domain.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> ContinuousMap for Chain<A, B>
where
    A: ContinuousMap,
    B: ContinuousMap<Domain = A::Codomain>,
{
    type Domain = A::Domain;
    type Codomain = B::Codomain;

    /// Evaluates the first map and passes its output to the second.
    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        let inner = self.first.evaluate(input);
        self.second.evaluate(inner)
    }
}

/// Chain rule for scalar reparameterizations: `(g ∘ f)' = g'(f(x)) * f'(x)`.
impl<A, B> DifferentiableMap for Chain<A, B>
where
    A: DifferentiableMap<Domain = f64, Codomain = f64>,
    B: DifferentiableMap<Domain = f64>,
    B::Codomain: std::ops::Mul<f64, Output = B::Codomain>,
{
    fn derivative(&self, input: f64) -> Self::Codomain {
        let inner = self.first.evaluate(input);
        self.second.derivative(inner) * self.first.derivative(input)
    }
}
