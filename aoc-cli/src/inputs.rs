//! Locating and reading puzzle inputs on disk

use crate::error::ExecutorError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a day's real input
pub const INPUT_FILE: &str = "input.txt";
/// File name of a day's example input shared by all parts
pub const EXAMPLE_FILE: &str = "input_example.txt";

/// Resolves input files under a root directory
///
/// Directory structure: `{root}/{year}/Day{day}/input.txt`, with example inputs
/// next to it as `input_example_part{part}.txt` or `input_example.txt`.
pub struct InputLocator {
    root: PathBuf,
    example: bool,
}

impl InputLocator {
    pub fn new(root: PathBuf, example: bool) -> Self {
        Self { root, example }
    }

    /// Directory holding every input file of a day
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("Day{}", day))
    }

    /// Path of the input used to solve `part`
    ///
    /// Example mode prefers a part-specific file and falls back to the shared one.
    pub fn path_for(&self, year: u16, day: u8, part: u8) -> PathBuf {
        let dir = self.day_dir(year, day);
        if !self.example {
            return dir.join(INPUT_FILE);
        }
        let specific = dir.join(format!("input_example_part{}.txt", part));
        if specific.is_file() {
            specific
        } else {
            dir.join(EXAMPLE_FILE)
        }
    }

    /// Check if the input for `part` exists
    pub fn contains(&self, year: u16, day: u8, part: u8) -> bool {
        self.path_for(year, day, part).is_file()
    }

    /// Read an input file, attributing failures to the year/day
    pub fn read(&self, year: u16, day: u8, path: &Path) -> Result<String, ExecutorError> {
        fs::read_to_string(path).map_err(|source| ExecutorError::InputRead {
            year,
            day,
            path: path.to_path_buf(),
            source,
        })
    }
}
