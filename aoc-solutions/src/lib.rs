//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year under `my_solutions`. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it.
//! `utils` holds the small data structures several days share.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;
