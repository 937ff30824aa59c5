//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) if self.quiet => println!("{}", answer),
            Ok(answer) => println!("{}: {} ({})", prefix, answer, format_timing(result)),
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    ///
    /// Shows both total solve time (sum of durations) and elapsed wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", summary.solved, summary.failed);
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let compute = summary.parse_time + summary.solve_time;
            let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed_time.as_secs_f64());
        }
    }
}

/// Counts and accumulated time over a run
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn of(results: &[SolverResult]) -> Self {
        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        Self {
            solved,
            failed: results.len() - solved,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results
                .iter()
                .filter(|r| r.answer.is_ok())
                .map(|r| r.solve_duration)
                .sum(),
        }
    }
}

fn format_timing(result: &SolverResult) -> String {
    let parse = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!("{}solve: {}", parse, format_duration(result.solve_duration))
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;

    fn result(part: u8, ok: bool, parse_ms: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2025,
            day: 4,
            part,
            answer: if ok {
                Ok("13".to_string())
            } else {
                Err(ExecutorError::ChannelSend.into())
            },
            parse_duration: parse_ms.map(TimeDelta::milliseconds),
            solve_duration: TimeDelta::milliseconds(3),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(std::time::Duration::from_micros(999)), "999µs");
    }

    #[test]
    fn test_timing_text() {
        assert_eq!(format_timing(&result(1, true, Some(2))), "parse: 2.00ms, solve: 3.00ms");
        assert_eq!(format_timing(&result(2, true, None)), "solve: 3.00ms");
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![result(1, true, Some(2)), result(2, false, None), result(1, true, None)];
        assert_eq!(
            Summary::of(&results),
            Summary {
                solved: 2,
                failed: 1,
                parse_time: TimeDelta::milliseconds(2),
                solve_time: TimeDelta::milliseconds(6),
            }
        );
    }
}
