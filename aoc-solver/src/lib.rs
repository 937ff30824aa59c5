//! Advent of Code Solver Library
//!
//! A small, type-safe framework hosting Advent of Code days. Each day parses its
//! input once into shared data and then answers any number of parts; days are
//! discovered through a plugin registry and run through a uniform, type-erased
//! interface.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Sums>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns the raw input into `SharedData<'a>`, which may borrow from it.
//! - [`PartSolver<N>`] answers part `N` with mutable access to the shared data, so
//!   a later part can reuse whatever an earlier part cached.
//! - [`Solver`] ties the parts together; `#[derive(AocSolver)]` generates it.
//! - [`DynSolver`] is the object-safe view used by the registry and the CLI.
//! - [`parse_lines`] parses line-per-record inputs and reports failures as
//!   [`ParseError::Line`].
//! - `#[derive(AutoRegisterSolver)]` with `#[aoc(year = .., day = .., tags = [..])]`
//!   submits a [`SolverPlugin`] so [`SolverRegistryBuilder::register_all_plugins`]
//!   finds the day without any manual wiring.

mod error;
mod input;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use input::parse_lines;
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
