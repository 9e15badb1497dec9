use std::marker::PhantomData;

use crate::{ContinuousMap, DifferentiableMap};

/// A map that returns the same value everywhere on its domain.
///
/// A long bone with a uniform cross-section uses a constant radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<D, T> {
    value: T,
    _marker: PhantomData<fn(D)>,
}

impl<D, T> Constant<D, T> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<D, T: Clone> ContinuousMap for Constant<D, T> {
    type Domain = D;
    type Codomain = T;

    fn evaluate(&self, _input: D) -> T {
        self.value.clone()
    }
}

impl<T: Clone + Default> DifferentiableMap for Constant<f64, T> {
    fn derivative(&self, _input: f64) -> T {
        T::default()
    }
}

/// A map that returns its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContinuousMap for Identity<T> {
    type Domain = T;
    type Codomain = T;

    fn evaluate(&self, input: T) -> T {
        input
    }
}

impl DifferentiableMap for Identity<f64> {
    fn derivative(&self, _input: f64) -> f64 {
        1.0
    }
}
