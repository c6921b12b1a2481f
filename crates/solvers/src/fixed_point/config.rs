use thiserror::Error;

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    max_iters: usize,
    tol: f64,
    alpha: f64,
}

/// Errors that can occur when validating a fixed-point solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("alpha must be finite and positive")]
    Alpha,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-8,
            alpha: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and relaxation factor.
    ///
    /// A `max_iters` of zero is allowed and yields a trajectory holding only
    /// the initial guess.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` or `alpha` is non-positive or non-finite.
    pub fn new(max_iters: usize, tol: f64, alpha: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }

        Ok(Self {
            max_iters,
            tol,
            alpha,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step-size tolerance used to detect convergence.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the relaxation factor.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
