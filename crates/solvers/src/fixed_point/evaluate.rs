use cobweb_core::{FixedPointProblem, Model, Snapshot};

/// The result of evaluating a fixed-point problem at a given `x`.
#[derive(Debug, Clone)]
pub(super) struct Evaluation<I, O, const N: usize> {
    pub(super) image: [f64; N],
    pub(super) snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a fixed-point problem.
#[derive(Debug)]
pub(super) enum EvalError<ME, PE> {
    Model(ME),
    Problem(PE),
}

type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as FixedPointProblem<N>>::Error>,
>;

/// Maps `x` to model input, calls the model, then reads back the image.
pub(super) fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: FixedPointProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let image = problem.image(&input, &output).map_err(EvalError::Problem)?;

    Ok(Evaluation {
        image,
        snapshot: Snapshot::new(input, output),
    })
}
