//! Shared helpers for solutions

pub mod dp_cache;
pub mod grid;
pub mod union_find;
