//! `aoc`: runs the registered 2024 grid puzzles against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Links the solver plugins into the binary
use aoc24_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc24_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use log::{debug, info, warn};
use output::OutputFormatter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!("reading inputs from {}", config.input_dir.display());

    let registry = select_solvers(&config.tags)?;
    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    formatter.print_missing_inputs(&missing_inputs(&work_items, &executor));
    if !config.quiet {
        println!("Running {} puzzle(s)...", work_items.len());
    }

    let expected = work_items.iter().flat_map(expected_keys).collect();
    report(executor, ResultAggregator::new(expected), &formatter)
}

/// Solvers carrying every requested tag, or all of them when none are given
fn select_solvers(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();
    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };
    Ok(builder.build())
}

fn missing_inputs(work_items: &[WorkItem], executor: &Executor) -> Vec<(u16, u8, PathBuf)> {
    work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .map(|w| (w.year, w.day, executor.inputs().input_path(w.year, w.day)))
        .collect()
}

fn expected_keys(work: &WorkItem) -> impl Iterator<Item = ResultKey> + '_ {
    work.parts.clone().map(move |part| ResultKey {
        year: work.year,
        day: work.day,
        part,
    })
}

/// Run the executor on its own thread and print results as they fall into order
fn report(
    executor: Executor,
    mut aggregator: ResultAggregator,
    formatter: &OutputFormatter,
) -> Result<(), CliError> {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || executor.execute(tx));

    let mut results = Vec::new();
    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        warn!("some expected results never arrived");
    }

    handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))??;

    info!("{} result(s) reported", results.len());
    formatter.print_summary(&results);
    Ok(())
}
