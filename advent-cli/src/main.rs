//! Command-line runner for the Advent of Code solvers

mod aggregator;
mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;

// Link the solutions crate so its solver plugins are submitted
use advent_solutions as _;

use advent_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags)?;
    let mut executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Inputs are fetched lazily during the run; resolve a session up front if
    // any are missing, so the prompt never lands mid-run inside a worker.
    let missing: Vec<(u16, u8)> = work_items
        .iter()
        .filter(|w| !executor.input_cached(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect();
    if !missing.is_empty() {
        println!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            println!("  - {}/day{:02}", year, day);
        }

        if config.session.is_empty() {
            println!();
            let session = config::prompt_session(
                "A session cookie is required to fetch missing inputs from adventofcode.com.",
            )?;
            let expected = config.user_id_provided.then_some(config.user_id);
            let user_id = config::verify_session(&session, expected)?;
            executor.update_session(session, user_id)?;
        } else {
            println!("Fetching missing inputs with the provided session...");
        }
    }

    run_executor(executor, config.quiet)
}

/// Run all work items, reordering streamed results for display
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} solver(s)...", work_items.len());

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Anything still buffered had no matching expected key; print it anyway
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build the registry, restricted to solvers carrying every requested tag
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
