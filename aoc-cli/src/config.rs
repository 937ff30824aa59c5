//! Configuration resolution from CLI args and the environment

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the `{year}/Day{day}` input tree
    pub input_dir: PathBuf,
    /// Use example inputs
    pub example: bool,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var_os(INPUT_DIR_ENV))?;

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            example: args.example,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Flag first, then the environment, then the working directory
fn resolve_input_dir(
    flag: Option<PathBuf>,
    env: Option<std::ffi::OsString>,
) -> Result<PathBuf, CliError> {
    match flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from)) {
        Some(dir) => Ok(expand_tilde(&dir)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let dir = resolve_input_dir(Some(PathBuf::from("/flag")), Some("/env".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let dir = resolve_input_dir(None, Some("/env".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn test_falls_back_to_current_dir() {
        let dir = resolve_input_dir(None, Some("".into())).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
        let dir = resolve_input_dir(None, None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("rel/~x")), PathBuf::from("rel/~x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        use clap::Parser;
        let args = Args::try_parse_from(["aoc", "--threads", "0", "--input-dir", "/tmp"]).unwrap();
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}
