//! Damped fixed-point iteration for scalar problems.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x0`, the solver repeatedly applies the
//! relaxed update
//!
//! ```text
//! x_{n+1} = (1 - α)·x_n + α·f(x_n)
//! ```
//!
//! and stops at the first step where `|x_{n+1} - x_n| < tol`, or once
//! `max_iters` steps have been taken. With `α = 1` the update is plain
//! iteration `x_{n+1} = f(x_n)`. Values `0 < α < 1` damp the update, which can
//! turn an oscillating or diverging iteration into a convergent one; `α > 1`
//! over-relaxes.
//!
//! No convergence guarantee is checked. Running out of iterations is not an
//! error: the solution reports [`Status::MaxIters`] and the last value reached.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after the new iterate has been
//! appended to the trajectory. Observers can return [`Action::StopEarly`] to
//! halt immediately.
//!
//! # Example
//!
//! ```
//! use cobweb_core::ScalarFn;
//! use cobweb_solvers::fixed_point::{self, Config, Status};
//!
//! let config = Config::new(200, 1e-12, 1.0).unwrap();
//! let solution = fixed_point::iterate(&ScalarFn(f64::cos), 0.5, &config).unwrap();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 0.739_085_133_215_160_7).abs() < 1e-11);
//! ```

mod action;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace};

use cobweb_core::{Direct, FixedPointProblem, Model, Observer, Snapshot};

use evaluate::evaluate;

/// Upper bound on the trajectory capacity reserved up front.
const RESERVE_LIMIT: usize = 1024;

/// Iterates a fixed-point problem from `x0` using the relaxed update.
///
/// The observer receives an [`Event`] after each step and may return
/// [`Action::StopEarly`] to end the iteration. An early stop takes priority
/// over convergence detected on the same step.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the model or problem fails
/// during evaluation, or if `f(x)` is not finite. Failures are never retried.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteInitial { x0 });
    }

    let mut trajectory = Vec::with_capacity(config.max_iters().min(RESERVE_LIMIT) + 1);
    trajectory.push(x0);

    let mut x = x0;
    let mut last: Option<Snapshot<M::Input, M::Output>> = None;

    for iter in 1..=config.max_iters() {
        let eval = evaluate(model, problem, [x]).map_err(Error::from_eval)?;
        let image = eval.image[0];
        if !image.is_finite() {
            return Err(Error::NonFiniteImage { x, image });
        }

        let next = relax(x, image, config.alpha());
        trajectory.push(next);
        trace!("iter {iter}: x = {x}, f(x) = {image}, next = {next}");

        let event = Event {
            iter,
            x,
            image,
            next,
            snapshot: &eval.snapshot,
        };
        let converged = event.step() < config.tol();
        let action = observer.observe(&event);
        last = Some(eval.snapshot);

        if let Some(Action::StopEarly) = action {
            return Ok(finish(x0, trajectory, iter, config, last, Status::StoppedByObserver));
        }

        if converged {
            return Ok(finish(x0, trajectory, iter, config, last, Status::Converged));
        }

        x = next;
    }

    let iters = config.max_iters();
    Ok(finish(x0, trajectory, iters, config, last, Status::MaxIters))
}

/// Iterates a fixed-point problem without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the model or problem fails
/// during evaluation, or if `f(x)` is not finite.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

/// Iterates a scalar model `f: f64 -> f64` directly.
///
/// Wrap plain functions and closures with [`cobweb_core::ScalarFn`].
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if `f` fails, or if `f(x)` is
/// not finite.
pub fn iterate<M>(f: &M, x0: f64, config: &Config) -> Result<Solution<f64, f64>, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve_unobserved(f, &Direct, x0, config)
}

/// Computes the relaxed update, returning `image` exactly when `alpha` is one.
#[allow(clippy::float_cmp)]
fn relax(x: f64, image: f64, alpha: f64) -> f64 {
    if alpha == 1.0 {
        image
    } else {
        (1.0 - alpha) * x + alpha * image
    }
}

fn finish<I, O>(
    x0: f64,
    trajectory: Vec<f64>,
    iters: usize,
    config: &Config,
    snapshot: Option<Snapshot<I, O>>,
    status: Status,
) -> Solution<I, O> {
    let x = trajectory.last().copied().unwrap_or(x0);
    debug!("fixed-point iteration {status} after {iters} iterations: x = {x}");

    Solution {
        status,
        x0,
        x,
        trajectory,
        iters,
        config: *config,
        snapshot,
    }
}
