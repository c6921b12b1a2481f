use std::convert::Infallible;

/// Defines a fixed-point problem to be solved.
///
/// A fixed-point problem maps solver variables to a model input, then reads
/// the image `f(x)` back out of the model input and output. Solvers iterate
/// `x ← (1 - α)·x + α·f(x)` until successive iterates agree.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a scalar fixed-point problem.
pub trait FixedPointProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Extracts the image `f(x)` from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the image cannot be computed.
    fn image(&self, input: &Self::Input, output: &Self::Output) -> Result<[f64; N], Self::Error>;
}

/// A scalar problem where the model maps `x` straight to `f(x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

impl FixedPointProblem<1> for Direct {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn image(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_uses_x_as_input_and_output_as_image() {
        let input = Direct.input(&[1.5]).unwrap();
        assert_eq!(input, 1.5);

        let image = Direct.image(&input, &-2.0).unwrap();
        assert_eq!(image, [-2.0]);
    }
}
