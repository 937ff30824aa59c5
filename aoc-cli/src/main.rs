//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::{OutputFormatter, Summary};

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
    let executor = Executor::new(registry, &config).map_err(error::ArcExecutorError::from)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Warning: Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let expected = ResultKey::expected_from(&work_items);
    run_executor(executor, expected, config.quiet)
}

/// Run the executor on a background thread and print results in order
fn run_executor(
    executor: Executor,
    expected_keys: Vec<ResultKey>,
    quiet: bool,
) -> Result<(), CliError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
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
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    let summary = Summary::of(&results);
    if summary.failed > 0 {
        return Err(CliError::Failed {
            failed: summary.failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering; every requested tag must be present
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_every_day() {
        let registry = build_registry(&[]).unwrap();
        let storage = registry.storage();
        assert!(storage.contains(2024, 1));
        for day in 1..=12 {
            assert!(storage.contains(2025, day), "2025 day {} missing", day);
        }
        assert_eq!(storage.get_info(2025, 12).map(|i| i.parts), Some(1));
        assert_eq!(storage.get_info(2025, 11).map(|i| i.parts), Some(2));
    }

    #[test]
    fn test_tag_filter_requires_all_tags() {
        let registry = build_registry(&["grid".to_string()]).unwrap();
        let grid_days: Vec<(u16, u8)> =
            registry.storage().iter_info().map(|i| (i.year, i.day)).collect();
        assert!(grid_days.contains(&(2025, 4)));
        assert!(!grid_days.contains(&(2024, 1)));

        let none = build_registry(&["grid".to_string(), "no-such-tag".to_string()]).unwrap();
        assert!(none.storage().is_empty());
    }
}
