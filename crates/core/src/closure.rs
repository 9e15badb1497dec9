use std::marker::PhantomData;

use crate::ContinuousMap;

/// A wrapper that allows using closures as continuous maps.
///
/// The closure must be pure: it may capture immutable parameters but must not
/// depend on interior mutability.
#[derive(Clone, Copy)]
pub struct FnMap<F, D, O> {
    function: F,
    _marker: PhantomData<fn(D) -> O>,
}

impl<F, D, O> FnMap<F, D, O>
where
    F: Fn(D) -> O,
{
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, D, O> ContinuousMap for FnMap<F, D, O>
where
    F: Fn(D) -> O,
{
    type Domain = D;
    type Codomain = O;

    fn evaluate(&self, input: D) -> O {
        (self.function)(input)
    }
}

/// Creates a continuous map from a closure.
pub const fn from_fn<F, D, O>(function: F) -> FnMap<F, D, O>
where
    F: Fn(D) -> O,
{
    FnMap::new(function)
}
