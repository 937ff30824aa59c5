//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputLocator;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Result from a single part execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part solved from a freshly parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutionContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs, shared by reference
struct ExecutionContext {
    registry: SolverRegistry,
    inputs: InputLocator,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutionContext {
                registry,
                inputs: InputLocator::new(config.input_dir.clone(), config.example),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .storage()
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.context.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Input files the selected work needs but which do not exist
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        let inputs = &self.context.inputs;
        work_items
            .iter()
            .flat_map(|w| {
                w.parts
                    .clone()
                    .filter(move |&part| !inputs.contains(w.year, w.day, part))
                    .map(move |part| inputs.path_for(w.year, w.day, part))
            })
            .dedup()
            .collect()
    }

    /// Execute all work items and send results to channel
    ///
    /// Per-part failures travel as results; only failures of the executor itself
    /// are returned.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let ctx = &self.context;

        match ctx.parallelize_by {
            ParallelizeBy::Sequential => {
                combine_errors(work_items.iter().map(|work| run_work(work, &tx, ctx)))
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    combine_par_errors(by_year.par_iter().map(|items| {
                        combine_errors(items.iter().map(|work| run_work(work, &tx, ctx)))
                    }))
                })
            }
            // Part additionally fans out inside run_work
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                combine_par_errors(work_items.par_iter().map(|work| run_work(work, &tx, ctx)))
            }),
        }
    }
}

fn combine_errors(
    results: impl Iterator<Item = Result<(), ArcExecutorError>>,
) -> Result<(), ArcExecutorError> {
    results
        .filter_map(Result::err)
        .reduce(ArcExecutorError::combine)
        .map_or(Ok(()), Err)
}

fn combine_par_errors(
    results: impl ParallelIterator<Item = Result<(), ArcExecutorError>>,
) -> Result<(), ArcExecutorError> {
    results
        .filter_map(Result::err)
        .reduce_with(ArcExecutorError::combine)
        .map_or(Ok(()), Err)
}

/// Load inputs for one day and solve its parts
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    // Consecutive parts reading the same file share one parse
    let batches: Vec<(PathBuf, Vec<u8>)> = work
        .parts
        .clone()
        .chunk_by(|&part| ctx.inputs.path_for(year, day, part))
        .into_iter()
        .map(|(path, parts)| (path, parts.collect()))
        .collect();

    for (path, parts) in batches {
        let input = match ctx.inputs.read(year, day, &path) {
            Ok(input) => input,
            Err(e) => {
                send_failure(tx, year, day, &parts, e.into())?;
                continue;
            }
        };

        if matches!(ctx.parallelize_by, ParallelizeBy::Part) {
            combine_par_errors(
                parts
                    .par_iter()
                    .map(|&part| solve_parts(year, day, &input, &[part], tx, ctx)),
            )?;
        } else {
            solve_parts(year, day, &input, &parts, tx, ctx)?;
        }
    }
    Ok(())
}

/// Parse once, then solve `parts` in order on the same instance
fn solve_parts(
    year: u16,
    day: u8,
    input: &str,
    parts: &[u8],
    tx: &Sender<SolverResult>,
    ctx: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let mut solver = match ctx.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(tx, year, day, parts, ExecutorError::from(e).into()),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for &part in parts {
        let result = solve_part(year, day, part, &mut *solver, parse_duration.take());
        send(tx, result)?;
    }
    Ok(())
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (
            Err(ExecutorError::from(SolverError::from(e)).into()),
            TimeDelta::zero(),
        ),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

/// Report the same error for every part that could not run
fn send_failure(
    tx: &Sender<SolverResult>,
    year: u16,
    day: u8,
    parts: &[u8],
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for &part in parts {
        send(
            tx,
            SolverResult {
                year,
                day,
                part,
                answer: Err(error.clone()),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            },
        )?;
    }
    Ok(())
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}
