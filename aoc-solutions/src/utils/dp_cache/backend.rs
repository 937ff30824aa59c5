//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` for indices that were never inserted
/// - `insert` is only called once per index by [`DpCache`](super::DpCache)
pub trait Backend<I, K> {
    /// Returns the cached value for the index, if computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Stores the computed value for the index.
    fn insert(&mut self, index: I, value: K);
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense, sequential integer indices starting from 0.
/// The Vec grows to accommodate new indices.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(value);
    }
}

/// Row-major 2D backend indexed by `(row, col)`.
///
/// Dimensions are fixed at construction; indices outside them are a caller bug.
#[derive(Debug)]
pub struct Vec2DBackend<K> {
    cols: usize,
    data: Vec<Option<K>>,
}

impl<K> Vec2DBackend<K> {
    /// Creates an empty backend for a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            data: (0..rows * cols).map(|_| None).collect(),
        }
    }
}

impl<K> Backend<(usize, usize), K> for Vec2DBackend<K> {
    fn get(&self, &(row, col): &(usize, usize)) -> Option<&K> {
        if col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)?.as_ref()
    }

    fn insert(&mut self, (row, col): (usize, usize), value: K) {
        assert!(col < self.cols, "column {} out of bounds", col);
        self.data[row * self.cols + col] = Some(value);
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or non-integer index types.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.insert(index, value);
    }
}
