//! Error types for the solver library

use std::fmt::Display;
use thiserror::Error;

/// Why an input could not be turned into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A specific line is malformed (1-based)
    #[error("Invalid format: line {line}: {message}")]
    Line { line: usize, message: String },
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Attribute `error` to 1-based `line`, keeping any context chain
    pub fn at_line(line: usize, error: impl Display) -> Self {
        ParseError::Line {
            line,
            message: format!("{:#}", error),
        }
    }
}

/// Why a single part produced no answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// Part number within range but without a `PartSolver` impl
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part number is 0 or above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle input admits no answer
    #[error("No solution: {0}")]
    NoSolution(String),
    /// Solving hit an error of its own
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from looking up, parsing or solving through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Errors from building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year and day
    #[error("Duplicate solver registration for {0}/{1:02}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register {0}/{1:02}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
