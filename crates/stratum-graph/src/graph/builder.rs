//! Builder for graphs whose vertex ids are chosen by the caller.

use super::{Graph, VertexId};

/// Collects edges between caller-chosen ids.
///
/// Ids should form the range `0..n`. Any unused id below the largest one still becomes a
/// vertex, without edges: adding `(0, 2)` alone yields a graph with an isolated vertex `1`.
/// Vertices created implicitly get size `0.0`, which the layout replaces by its default size.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> &mut Self {
        self.ensure_vertex(u);
        self.ensure_vertex(v);
        self.graph.add_edge(u, v);
        self
    }

    /// Adds the edges `path[0] -> path[1] -> ...`.
    pub fn add_path(&mut self, path: &[VertexId]) -> &mut Self {
        for pair in path.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
        self
    }

    /// Sets the radius of `u`, creating it if needed.
    pub fn size(&mut self, u: VertexId, size: f64) -> &mut Self {
        self.ensure_vertex(u);
        self.graph.set_size(u, size);
        self
    }

    /// Ensures vertex `u` exists.
    pub fn vertex(&mut self, u: VertexId) -> &mut Self {
        self.ensure_vertex(u);
        self
    }

    pub fn build(&self) -> Graph {
        self.graph.clone()
    }

    fn ensure_vertex(&mut self, u: VertexId) {
        while u >= self.graph.len() {
            self.graph.add_vertex(0.0);
        }
    }
}
