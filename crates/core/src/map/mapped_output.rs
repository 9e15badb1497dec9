use std::marker::PhantomData;

use super::ContinuousMap;

/// A wrapper that transforms a map's output.
///
/// Internally used by `.map_output()` to adapt a map so it produces a
/// different codomain.
pub struct MappedOutput<M, OutputMap, NewCodomain> {
    map: M,
    output_map: OutputMap,
    _marker: PhantomData<fn() -> NewCodomain>,
}

impl<M, OutputMap, NewCodomain> MappedOutput<M, OutputMap, NewCodomain> {
    pub(crate) const fn new(map: M, output_map: OutputMap) -> Self {
        Self {
            map,
            output_map,
            _marker: PhantomData,
        }
    }
}

impl<M, OutputMap, NewCodomain> ContinuousMap for MappedOutput<M, OutputMap, NewCodomain>
where
    M: ContinuousMap,
    OutputMap: Fn(M::Codomain) -> NewCodomain,
{
    type Domain = M::Domain;
    type Codomain = NewCodomain;

    /// Evaluates the wrapped map and transforms the output.
    fn evaluate(&self, input: Self::Domain) -> Self::Codomain {
        (self.output_map)(self.map.evaluate(input))
    }
}
