//! The example functions and their default settings.

use thiserror::Error;

use cobweb_core::Model;
use cobweb_solvers::fixed_point::{Config, ConfigError};

use crate::cli::Cli;

/// A built-in example function with its starting point and display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    /// f(x) = sqrt(3 + x); fixed point (1 + √13) / 2.
    Sqrt,
    /// f(x) = cos(x); fixed point is the Dottie number.
    Cos,
}

impl Example {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt(3+x)",
            Self::Cos => "cos(x)",
        }
    }

    pub fn x0(self) -> f64 {
        match self {
            Self::Sqrt => 1.0,
            Self::Cos => 0.5,
        }
    }

    /// Range shown on both axes of the diagram.
    pub fn x_range(self) -> [f64; 2] {
        match self {
            Self::Sqrt => [0.0, 3.0],
            Self::Cos => [0.0, 1.0],
        }
    }

    pub fn title(self) -> String {
        format!("Cobweb: f(x)={}, x0={:?}", self.name(), self.x0())
    }

    /// Number of undamped steps in the table and diagram.
    pub fn steps(self) -> usize {
        match self {
            Self::Sqrt => 12,
            Self::Cos => 15,
        }
    }

    /// Builds the solver config, applying command-line overrides.
    pub fn config(self, cli: &Cli) -> Result<Config, ConfigError> {
        let (max_iters, tol) = match self {
            Self::Sqrt => (100, 1e-10),
            Self::Cos => (200, 1e-12),
        };
        Config::new(
            cli.max_iters.unwrap_or(max_iters),
            cli.tol.unwrap_or(tol),
            cli.alpha.unwrap_or(1.0),
        )
    }
}

/// f(x) = sqrt(3 + x), undefined below x = -3.
pub struct SqrtThreePlus;

#[derive(Debug, Error)]
#[error("math domain error: sqrt(3 + x) is undefined for x = {0}")]
pub struct DomainError(f64);

impl Model for SqrtThreePlus {
    type Input = f64;
    type Output = f64;
    type Error = DomainError;

    fn call(&self, x: &f64) -> Result<f64, DomainError> {
        let arg = 3.0 + x;
        if arg < 0.0 {
            return Err(DomainError(*x));
        }
        Ok(arg.sqrt())
    }
}
