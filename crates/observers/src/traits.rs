//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer such as [`Cobweb`](crate::Cobweb) can record any iteration that
//! exposes its iterates.
//!
//! # Event traits
//!
//! - [`HasIterate`]: events that carry `x`, `f(x)`, and the next iterate
//! - [`HasStep`]: events that carry a step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use cobweb_core::Observer;
//! use cobweb_observers::traits::{CanStopEarly, HasStep};
//!
//! /// Stops once the iteration has slowed to a crawl.
//! struct Crawl {
//!     threshold: f64,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for Crawl {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use cobweb_solvers::fixed_point;

/// An event that carries one step of a fixed-point iteration.
pub trait HasIterate {
    /// The iterate the step started from.
    fn x(&self) -> f64;

    /// The image `f(x)`.
    fn image(&self) -> f64;

    /// The iterate the step produced.
    fn next(&self) -> f64;
}

/// An event that carries a step size.
pub trait HasStep {
    /// Returns the magnitude of the step for this event.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasIterate for fixed_point::Event<'_, I, O> {
    fn x(&self) -> f64 {
        self.x
    }

    fn image(&self) -> f64 {
        self.image
    }

    fn next(&self) -> f64 {
        self.next
    }
}

impl<I, O> HasStep for fixed_point::Event<'_, I, O> {
    fn step(&self) -> f64 {
        fixed_point::Event::step(self)
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
