use std::error::Error as StdError;

use thiserror::Error;

use super::evaluate::EvalError;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteInitial { x0: f64 },

    #[error("f({x}) evaluated to non-finite value {image}")]
    NonFiniteImage { x: f64, image: f64 },

    #[error("model call failed: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(super) fn from_eval<ME, PE>(err: EvalError<ME, PE>) -> Self
    where
        ME: StdError + Send + Sync + 'static,
        PE: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
