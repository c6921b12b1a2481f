//! Numerical solvers for the cobweb workspace.
//!
//! # Solvers
//!
//! - [`fixed_point`]: damped (relaxed) fixed-point iteration
//!   `x ← (1 - α)·x + α·f(x)` with a full trajectory for cobweb diagrams

pub mod fixed_point;
