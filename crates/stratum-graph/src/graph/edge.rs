//! Edge values and edge sets.

use super::VertexId;
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub const fn is_loop(self) -> bool {
        self.from == self.to
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((from, to): (VertexId, VertexId)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, e: Edge) -> bool {
        self.edges.insert(e)
    }

    /// Removes `e`, returning whether it was present.
    pub fn remove(&mut self, e: Edge) -> bool {
        self.edges.remove(&e)
    }

    pub fn contains(&self, e: Edge) -> bool {
        self.edges.contains(&e)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the edges in ascending `(from, to)` order.
    pub fn sorted(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self.edges.iter().copied().collect();
        out.sort_unstable();
        out
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
