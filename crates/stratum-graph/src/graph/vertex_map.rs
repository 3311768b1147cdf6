//! Flat per-vertex storage.

use super::VertexId;
use std::ops::{Index, IndexMut};

/// Maps vertex ids to values of type `T`.
///
/// Backed by a `Vec<T>` indexed by id. Maps built for a subgraph cover ids `0..=max_id`;
/// slots of vertices outside the subgraph hold the fill value and are never read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexMap<T> {
    data: Vec<T>,
}

impl<T: Clone> VertexMap<T> {
    pub fn new(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// A map covering every id in `vertices`.
    pub fn covering(vertices: &[VertexId], value: T) -> Self {
        let len = vertices.iter().max().map_or(0, |&u| u + 1);
        Self::new(len, value)
    }

    /// Grows the map to `len` slots, filling new slots with `value`.
    pub fn grow(&mut self, len: usize, value: T) {
        if len > self.data.len() {
            self.data.resize(len, value);
        }
    }

    /// Stores `value` at `u`, growing the map with `fill` if needed.
    pub fn insert(&mut self, u: VertexId, value: T, fill: T) {
        self.grow(u + 1, fill);
        self.data[u] = value;
    }
}

impl<T> VertexMap<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, u: VertexId) -> bool {
        u < self.data.len()
    }

    pub fn get(&self, u: VertexId) -> Option<&T> {
        self.data.get(u)
    }

}

impl<T> From<Vec<T>> for VertexMap<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<VertexId> for VertexMap<T> {
    type Output = T;

    fn index(&self, u: VertexId) -> &T {
        &self.data[u]
    }
}

impl<T> IndexMut<VertexId> for VertexMap<T> {
    fn index_mut(&mut self, u: VertexId) -> &mut T {
        &mut self.data[u]
    }
}
