//! Core traits and types for the cobweb workspace.
//!
//! This crate defines the shared abstractions that the fixed-point solver and
//! the cobweb observers build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`ScalarFn`]: adapts a plain `f64 -> f64` function into a [`Model`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`FixedPointProblem`]: adapts solver variables to model inputs and
//!   extracts the image `f(x)` from model outputs

mod model;
mod observer;
mod problem;

pub use model::{Model, ScalarFn, Snapshot};
pub use observer::Observer;
pub use problem::{Direct, FixedPointProblem};
