use thiserror::Error;

/// Tolerances for the polynomial solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    rel_tol: f64,
    dedup_tol: f64,
    polish_iters: usize,
}

/// Errors that can occur when validating a polynomial solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("dedup_tol must be finite and non-negative")]
    DedupTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-9, 1e-7, 2).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(rel_tol: f64, dedup_tol: f64, polish_iters: usize) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !dedup_tol.is_finite() || dedup_tol < 0.0 {
            return Err(ConfigError::DedupTol);
        }

        Ok(Self {
            rel_tol,
            dedup_tol,
            polish_iters,
        })
    }

    /// Returns the relative tolerance below which a negative discriminant is
    /// treated as zero.
    ///
    /// It bounds the squared imaginary part, so complex pairs with imaginary
    /// parts up to about `sqrt(rel_tol)` relative to the root are kept as real.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the relative distance below which two roots are merged.
    #[must_use]
    pub fn dedup_tol(&self) -> f64 {
        self.dedup_tol
    }

    /// Returns the maximum number of Newton refinement steps per root.
    #[must_use]
    pub fn polish_iters(&self) -> usize {
        self.polish_iters
    }
}
