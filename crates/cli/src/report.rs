//! JSON report of one example run.

use serde::Serialize;

use cobweb_observers::{Cobweb, Row};
use cobweb_solvers::fixed_point::{Config, Solution, Status};

use crate::demo::Example;

/// Summary of a solve plus the cobweb table, serialized with `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub example: &'static str,
    pub x0: f64,
    pub config: Config,
    pub status: Status,
    pub iters: usize,
    pub root_estimate: f64,
    pub trajectory: &'a [f64],
    pub rows: Vec<Row>,
}

impl<'a> Report<'a> {
    pub fn new<I, O>(example: Example, solution: &'a Solution<I, O>, cobweb: &Cobweb) -> Self {
        Self {
            example: example.name(),
            x0: solution.x0,
            config: solution.config,
            status: solution.status,
            iters: solution.iters,
            root_estimate: solution.x,
            trajectory: &solution.trajectory,
            rows: cobweb.rows().collect(),
        }
    }
}
