//! Puzzle solutions, one module per year

pub mod year_2024;
pub mod year_2025;
