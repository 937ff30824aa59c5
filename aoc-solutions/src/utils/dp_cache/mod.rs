//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for dynamic programming problems where values depend on other
//! values in a directed acyclic graph (DAG). A problem describes, for every
//! index, which indices it depends on and how to combine their values; the
//! cache resolves dependencies on demand and computes each index exactly once.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense, sequential `usize` indices (auto-growing)
//! - [`Vec2DBackend`]: runtime-sized 2D storage for grid problems
//! - [`HashMapBackend`]: arbitrary hashable index types
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** A cyclic dependency graph recurses until
//! the stack overflows. Callers must make sure dependencies form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(Vec2DBackend::new(5, 5))
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4) = 70 paths
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
//!
//! let fib = DpCache::new(
//!     VecBackend::new(),
//!     |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
//!     |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
//! );
//!
//! assert_eq!(fib.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Vec2DBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
