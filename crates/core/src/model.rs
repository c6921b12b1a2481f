use std::convert::Infallible;

/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. For fixed-point iteration the model plays the role of `f`, and any
/// failure it reports (a domain error, for example) ends the iteration.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// Wraps a plain `f64 -> f64` function as an infallible [`Model`].
///
/// ```
/// use cobweb_core::{Model, ScalarFn};
///
/// let f = ScalarFn(f64::cos);
/// assert_eq!(f.call(&0.0), Ok(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F>(pub F);

impl<F> Model for ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}
