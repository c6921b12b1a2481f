//! Observers, tables, and plots for the cobweb workspace.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for observers that work on any solver
//!   event carrying an iterate ([`HasIterate`], [`HasStep`], [`CanStopEarly`])
//! - [`cobweb`]: [`Cobweb`], the `(n, x_n, f(x_n))` table and the stair-step
//!   segments of a cobweb diagram
//! - [`curve`]: Evenly spaced sampling of `y = f(x)` for reference curves
//!
//! # Features
//!
//! - `plot`: Enables [`show`] for drawing a cobweb diagram in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//! - `serde`: Derives `Serialize` for [`Row`].
//!
//! [`HasIterate`]: traits::HasIterate
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Cobweb`]: cobweb::Cobweb
//! [`Row`]: cobweb::Row

pub mod cobweb;
pub mod curve;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use cobweb::{Cobweb, Row, Segment};

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, show};
