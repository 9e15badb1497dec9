use thiserror::Error;

use crate::ConfigError;

/// An error returned when a surface or mesh cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum MeshError {
    #[error("resolution along {axis} must be at least 2, got {value}")]
    InvalidResolution { axis: char, value: usize },
    #[error("a {u}x{v} grid has more vertices than 32-bit indices can address")]
    ResolutionTooLarge { u: usize, v: usize },
    #[error("parameter range [{start}, {end}] must be finite and increasing")]
    InvalidRange { start: f64, end: f64 },
    #[error("angle range [{start}, {end}] must be increasing and span at most 2π")]
    InvalidAngleRange { start: f64, end: f64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
