use std::fmt;

use cobweb_core::Snapshot;

use super::Config;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// A step smaller than the tolerance was taken.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Converged => "converged",
            Self::MaxIters => "iteration limit reached",
            Self::StoppedByObserver => "stopped by observer",
        };
        f.write_str(text)
    }
}

/// The result of a fixed-point iteration.
///
/// The trajectory always starts with the initial guess and holds one more
/// entry than the number of iterations performed.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The initial guess.
    pub x0: f64,

    /// The final estimate, equal to the last trajectory entry.
    pub x: f64,

    /// Every iterate, starting with `x0`.
    pub trajectory: Vec<f64>,

    /// Number of iterations performed.
    pub iters: usize,

    /// The configuration the solver ran with.
    pub config: Config,

    /// Model input/output of the last evaluation, if any step ran.
    pub snapshot: Option<Snapshot<I, O>>,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver stopped because the tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
