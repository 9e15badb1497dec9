use crate::{SplineError, SplineValue};

/// An ordered table of `(parameter, value)` control points.
///
/// Parameters are finite and strictly increasing, values are finite. The
/// table is validated once at construction and never changes afterwards.
///
/// # Example
///
/// ```
/// use sinew_curves::{ControlPoints, SplineError};
///
/// let points = ControlPoints::new([(0.0, 1.0), (0.5, 2.0), (2.0, 0.0)]).unwrap();
/// assert_eq!(points.params(), &[0.0, 0.5, 2.0]);
///
/// let unordered = ControlPoints::new([(0.0, 1.0), (0.0, 2.0)]);
/// assert!(matches!(unordered, Err(SplineError::NonIncreasing { index: 1, .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints<T> {
    params: Vec<f64>,
    values: Vec<T>,
}

impl<T: SplineValue> ControlPoints<T> {
    /// Creates a table from points sorted by parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::NonFinite`] if a parameter or value is NaN or
    /// infinite, and [`SplineError::NonIncreasing`] if a parameter does not
    /// exceed its predecessor. Points are never reordered or merged.
    pub fn new(points: impl IntoIterator<Item = (f64, T)>) -> Result<Self, SplineError> {
        let (params, values): (Vec<f64>, Vec<T>) = points.into_iter().unzip();

        for (index, (&param, &value)) in params.iter().zip(&values).enumerate() {
            if !param.is_finite() || !value.is_finite() {
                return Err(SplineError::NonFinite { index });
            }
        }

        for (index, pair) in params.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            if current <= previous {
                return Err(SplineError::NonIncreasing {
                    index: index + 1,
                    previous,
                    current,
                });
            }
        }

        Ok(Self { params, values })
    }

    /// Returns an error unless the table holds at least `min` points.
    pub(crate) fn require(&self, min: usize) -> Result<(), SplineError> {
        if self.len() < min {
            return Err(SplineError::TooFewPoints {
                min,
                actual: self.len(),
            });
        }
        Ok(())
    }
}

impl<T> ControlPoints<T> {
    /// Returns the number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the parameters (knots), strictly increasing.
    #[must_use]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Returns the values, in parameter order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates over `(parameter, value)` pairs in parameter order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, &T)> {
        self.params.iter().copied().zip(&self.values)
    }
}
