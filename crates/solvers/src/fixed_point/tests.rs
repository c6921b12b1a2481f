use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use cobweb_core::{Direct, FixedPointProblem, Model, ScalarFn};

use super::{Action, Config, Error, Event, Status, iterate, solve, solve_unobserved};

/// f(x) = sqrt(3 + x), failing outside its domain.
struct SqrtThreePlus;

#[derive(Debug, Error)]
#[error("sqrt(3 + x) is undefined for x = {0}")]
struct DomainError(f64);

impl Model for SqrtThreePlus {
    type Input = f64;
    type Output = f64;
    type Error = DomainError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        let arg = 3.0 + x;
        if arg < 0.0 {
            return Err(DomainError(*x));
        }
        Ok(arg.sqrt())
    }
}

fn config(max_iters: usize, tol: f64, alpha: f64) -> Config {
    Config::new(max_iters, tol, alpha).expect("valid config")
}

#[test]
fn finds_fixed_point_of_sqrt_three_plus_x() {
    let solution = iterate(&SqrtThreePlus, 1.0, &config(100, 1e-10, 1.0)).expect("should converge");

    // Positive root of x² - x - 3 = 0.
    let expected = (1.0 + 13.0_f64.sqrt()) / 2.0;

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 100);
    assert_relative_eq!(solution.x, expected, epsilon = 1e-9);
    assert_relative_eq!(solution.x, 2.302_775_637_731_995, epsilon = 1e-9);
}

#[test]
fn finds_dottie_number() {
    let solution = iterate(&ScalarFn(f64::cos), 0.5, &config(200, 1e-12, 1.0)).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 200);
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_7, epsilon = 1e-11);
}

#[test]
fn trajectory_starts_at_x0_and_has_one_more_entry_than_iters() {
    for (x0, max_iters) in [(0.0, 5), (1.0, 100), (-2.5, 3), (10.0, 0)] {
        let solution =
            iterate(&SqrtThreePlus, x0, &config(max_iters, 1e-10, 1.0)).expect("should run");

        assert_eq!(solution.trajectory.len(), solution.iters + 1);
        assert_eq!(solution.trajectory[0].to_bits(), f64::to_bits(x0));
        assert_eq!(solution.x0.to_bits(), f64::to_bits(x0));
        assert!(solution.iters <= max_iters);
    }
}

#[test]
fn undamped_steps_are_exact_images() {
    let solution = iterate(&ScalarFn(f64::cos), 0.5, &config(50, 1e-12, 1.0)).expect("should run");

    for pair in solution.trajectory.windows(2) {
        assert_eq!(pair[1].to_bits(), pair[0].cos().to_bits());
    }
}

#[test]
fn damped_steps_blend_previous_value_and_image() {
    let alpha = 0.5;
    let solution = iterate(&SqrtThreePlus, 1.0, &config(20, 1e-10, alpha)).expect("should run");

    for pair in solution.trajectory.windows(2) {
        let expected = (1.0 - alpha) * pair[0] + alpha * (3.0 + pair[0]).sqrt();
        assert_eq!(pair[1].to_bits(), expected.to_bits());
    }
}

#[test]
fn damping_still_reaches_the_fixed_point() {
    let solution = iterate(&ScalarFn(f64::cos), 0.5, &config(500, 1e-12, 0.6)).expect("should run");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_7, epsilon = 1e-10);
}

#[test]
fn stops_at_first_step_below_tolerance() {
    let tol = 1e-6;
    let solution = iterate(&ScalarFn(f64::cos), 0.5, &config(200, tol, 1.0)).expect("should run");

    let steps: Vec<f64> = solution
        .trajectory
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .collect();

    let (last, earlier) = steps.split_last().expect("at least one step");
    assert!(*last < tol);
    assert!(earlier.iter().all(|step| *step >= tol));
}

#[test]
fn zero_max_iters_returns_initial_guess() {
    let solution = iterate(&SqrtThreePlus, 1.0, &config(0, 1e-8, 1.0)).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.trajectory, vec![1.0]);
    assert_relative_eq!(solution.x, 1.0);
    assert!(solution.snapshot.is_none());
}

#[test]
fn exhausting_iterations_is_not_an_error() {
    let solution = iterate(&ScalarFn(f64::cos), 0.5, &config(3, 1e-12, 1.0)).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trajectory.len(), 4);
    assert_relative_eq!(solution.x, solution.trajectory[3]);
}

#[test]
fn non_converging_map_runs_out_of_iterations() {
    // f(x) = -x oscillates between x0 and -x0 forever.
    let solution = iterate(&ScalarFn(|x: f64| -x), 1.0, &config(10, 1e-8, 1.0)).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 10);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn restarting_from_estimate_stays_within_tolerance() {
    let tol = 1e-10;
    let first = iterate(&SqrtThreePlus, 1.0, &config(100, tol, 1.0)).expect("should converge");
    let second = iterate(&SqrtThreePlus, first.x, &config(100, tol, 1.0)).expect("should converge");

    for x in &second.trajectory {
        assert!((x - first.x).abs() < tol);
    }
}

#[test]
fn model_failure_propagates() {
    // Starting below -3 makes the very first evaluation fail.
    let result = iterate(&SqrtThreePlus, -4.0, &Config::default());

    match result {
        Err(Error::Model(source)) => {
            assert_eq!(source.to_string(), "sqrt(3 + x) is undefined for x = -4");
        }
        other => panic!("expected model error, got {other:?}"),
    }
}

#[test]
fn nan_image_is_reported() {
    let result = iterate(&ScalarFn(f64::sqrt), -1.0, &Config::default());

    match result {
        Err(Error::NonFiniteImage { x, image }) => {
            assert_relative_eq!(x, -1.0);
            assert!(image.is_nan());
        }
        other => panic!("expected non-finite image, got {other:?}"),
    }
}

#[test]
fn non_finite_initial_guess_is_rejected() {
    let result = iterate(&ScalarFn(f64::cos), f64::NAN, &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteInitial { .. })));
}

#[test]
fn observer_sees_every_step() {
    let mut events = Vec::new();
    let solution = solve(
        &ScalarFn(f64::cos),
        &Direct,
        0.5,
        &config(200, 1e-12, 1.0),
        |event: &Event<'_, f64, f64>| {
            events.push((event.iter, event.x, event.image, event.next, event.step()));
            None
        },
    )
    .expect("should converge");

    assert_eq!(events.len(), solution.iters);
    for (index, (iter, x, image, next, step)) in events.iter().enumerate() {
        assert_eq!(*iter, index + 1);
        assert_eq!(x.to_bits(), solution.trajectory[index].to_bits());
        assert_eq!(next.to_bits(), solution.trajectory[index + 1].to_bits());
        assert_relative_eq!(*image, x.cos());
        assert_relative_eq!(*step, (next - x).abs());
    }
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_, f64, f64>| (event.iter == 4).then_some(Action::StopEarly);

    let solution = solve(&ScalarFn(f64::cos), &Direct, 0.5, &config(200, 1e-12, 1.0), observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.trajectory.len(), 5);
}

#[test]
fn stop_early_wins_over_convergence() {
    let observer = |_event: &Event<'_, f64, f64>| Some(Action::StopEarly);

    // A constant map converges on the first step.
    let solution = solve(&ScalarFn(|_: f64| 2.0), &Direct, 2.0, &Config::default(), observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
}

#[test]
fn solution_keeps_config_and_last_snapshot() {
    let config = config(100, 1e-10, 1.0);
    let solution = iterate(&SqrtThreePlus, 1.0, &config).expect("should converge");

    assert_eq!(solution.config, config);

    let snapshot = solution.snapshot.expect("at least one step ran");
    let last_x = solution.trajectory[solution.iters - 1];
    assert_relative_eq!(snapshot.input, last_x);
    assert_relative_eq!(snapshot.output, (3.0 + last_x).sqrt());
}

// --- Problem adapter -----------------------------------------------------------

/// Model input carrying a temperature guess; output is the updated guess.
struct Thermostat {
    setpoint: f64,
    gain: f64,
}

struct Reading {
    temperature: f64,
}

impl Model for Thermostat {
    type Input = Reading;
    type Output = Reading;
    type Error = Infallible;

    fn call(&self, input: &Reading) -> Result<Reading, Infallible> {
        Ok(Reading {
            temperature: input.temperature + self.gain * (self.setpoint - input.temperature),
        })
    }
}

#[derive(Debug, Error)]
#[error("temperature below absolute zero: {0}")]
struct BelowAbsoluteZero(f64);

/// Adapts the thermostat model, rejecting unphysical guesses.
struct ThermostatProblem;

impl FixedPointProblem<1> for ThermostatProblem {
    type Input = Reading;
    type Output = Reading;
    type Error = BelowAbsoluteZero;

    fn input(&self, x: &[f64; 1]) -> Result<Reading, Self::Error> {
        if x[0] < -273.15 {
            return Err(BelowAbsoluteZero(x[0]));
        }
        Ok(Reading { temperature: x[0] })
    }

    fn image(&self, _input: &Reading, output: &Reading) -> Result<[f64; 1], Self::Error> {
        Ok([output.temperature])
    }
}

#[test]
fn solves_through_problem_adapter() {
    let model = Thermostat {
        setpoint: 21.0,
        gain: 0.5,
    };

    let solution = solve_unobserved(&model, &ThermostatProblem, 5.0, &config(200, 1e-12, 1.0))
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 21.0, epsilon = 1e-11);
}

#[test]
fn problem_failure_propagates() {
    let model = Thermostat {
        setpoint: 21.0,
        gain: 0.5,
    };

    let result = solve_unobserved(&model, &ThermostatProblem, -300.0, &Config::default());

    assert!(matches!(result, Err(Error::Problem(_))));
}
