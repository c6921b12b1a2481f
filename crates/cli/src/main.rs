use std::error::Error;

use clap::Parser;
use log::{info, warn};

use cobweb_core::{Model, ScalarFn};
use cobweb_observers::Cobweb;
use cobweb_solvers::fixed_point::{self, Config};

mod cli;
mod demo;
mod report;

use cli::Cli;
use demo::{Example, SqrtThreePlus};
use report::Report;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let cli = Cli::parse();
    let mut reports = Vec::new();

    for &example in cli.example.examples() {
        let config = example.config(&cli)?;
        let report = match example {
            Example::Sqrt => run(&SqrtThreePlus, example, &config, &cli)?,
            Example::Cos => run(&ScalarFn(f64::cos), example, &config, &cli)?,
        };
        reports.push(report);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

/// Solves one example, prints its summary and table, and opens its diagram.
///
/// Returns the JSON form of the run so all examples can be printed together.
fn run<M>(
    f: &M,
    example: Example,
    config: &Config,
    cli: &Cli,
) -> Result<serde_json::Value, Box<dyn Error>>
where
    M: Model<Input = f64, Output = f64>,
{
    let x0 = example.x0();
    info!(
        "iterating {} from x0 = {x0} (tol = {}, max_iters = {}, alpha = {})",
        example.name(),
        config.tol(),
        config.max_iters(),
        config.alpha()
    );

    let solution = fixed_point::iterate(f, x0, config)?;
    if !solution.is_converged() {
        warn!(
            "{} did not meet tol = {} within {} iterations",
            example.name(),
            config.tol(),
            solution.iters
        );
    }

    let cobweb = Cobweb::trace(f, x0, cli.steps.unwrap_or_else(|| example.steps()))?;

    if !cli.json {
        println!(
            "{} fixed point estimate: {} (iterations: {}, status: {})",
            example.name(),
            solution.x,
            solution.iters,
            solution.status
        );
        println!();
        println!("{cobweb}");
    }

    if !cli.no_plot {
        plot(f, example, &cobweb)?;
    }

    Ok(serde_json::to_value(Report::new(example, &solution, &cobweb))?)
}

#[cfg(feature = "plot")]
fn plot<M>(f: &M, example: Example, cobweb: &Cobweb) -> Result<(), Box<dyn Error>>
where
    M: Model<Input = f64, Output = f64>,
{
    use cobweb_observers::{ShowConfig, show};

    let [min, max] = example.x_range();
    show(
        f,
        cobweb,
        ShowConfig::new().title(example.title()).legend().x_range(min, max),
    )?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot<M>(_f: &M, example: Example, _cobweb: &Cobweb) -> Result<(), Box<dyn Error>>
where
    M: Model<Input = f64, Output = f64>,
{
    log::debug!("built without the plot feature; skipping {}", example.title());
    Ok(())
}
