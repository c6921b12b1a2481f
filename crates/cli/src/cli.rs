//! Command-line arguments for the `cobweb` binary.

use clap::{Parser, ValueEnum};

use crate::demo::Example;

#[derive(Parser, Debug)]
#[command(name = "cobweb")]
#[command(author, version, about = "Damped fixed-point iteration with cobweb diagrams", long_about = None)]
pub struct Cli {
    /// Which example function to iterate
    #[arg(value_enum, default_value_t = Selection::All)]
    pub example: Selection,

    /// Relaxation factor applied to each update (default: 1.0)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Step-size tolerance for convergence (default: per example)
    #[arg(short, long)]
    pub tol: Option<f64>,

    /// Maximum number of iterations (default: per example)
    #[arg(short = 'n', long)]
    pub max_iters: Option<usize>,

    /// Number of undamped steps shown in the cobweb table and diagram (default: per example)
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Print a JSON report instead of the table
    #[arg(long)]
    pub json: bool,

    /// Skip opening the cobweb diagram window
    #[arg(long)]
    pub no_plot: bool,
}

/// The example functions that can be selected on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Both examples, one after the other
    All,
    /// f(x) = sqrt(3 + x) from x0 = 1
    Sqrt,
    /// f(x) = cos(x) from x0 = 0.5
    Cos,
}

impl Selection {
    /// Returns the examples to run, in order.
    pub fn examples(self) -> &'static [Example] {
        match self {
            Self::All => &[Example::Sqrt, Example::Cos],
            Self::Sqrt => &[Example::Sqrt],
            Self::Cos => &[Example::Cos],
        }
    }
}
