use thiserror::Error;

/// An error returned when a control point table cannot define a spline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SplineError {
    #[error("spline needs at least {min} control points, got {actual}")]
    TooFewPoints { min: usize, actual: usize },
    #[error(
        "parameters must be strictly increasing: {current} at index {index} follows {previous}"
    )]
    NonIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("control point {index} is not finite")]
    NonFinite { index: usize },
}
