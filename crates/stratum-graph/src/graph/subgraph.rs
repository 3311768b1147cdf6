//! Connected-component views over a [`Graph`].

use super::{Graph, VertexId, edge::Edge};
use std::fmt;

/// A vertex subset of a [`Graph`].
///
/// Vertices added after construction through [`Subgraph::add_dummy`] are *dummy* vertices:
/// every id at or above the threshold computed at construction time (largest original id plus
/// one) is treated as synthetic. Edge and vertex mutations go straight to the underlying graph.
#[derive(Debug)]
pub struct Subgraph<'g> {
    source: &'g mut Graph,
    vertices: Vec<VertexId>,
    dummy_border: VertexId,
}

impl<'g> Subgraph<'g> {
    pub fn new(source: &'g mut Graph, vertices: Vec<VertexId>) -> Self {
        let dummy_border = vertices.iter().max().map_or(0, |&u| u + 1);
        Self {
            source,
            vertices,
            dummy_border,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn graph(&self) -> &Graph {
        &*self.source
    }

    /// Number of vertex ids in the underlying graph; per-vertex maps are sized by this.
    pub fn id_bound(&self) -> usize {
        self.source.len()
    }

    pub fn dummy_border(&self) -> VertexId {
        self.dummy_border
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> VertexId {
        self.vertices[i]
    }

    pub fn is_dummy(&self, u: VertexId) -> bool {
        u >= self.dummy_border
    }

    /// Appends a size-less vertex to the underlying graph and to this view.
    pub fn add_dummy(&mut self) -> VertexId {
        let u = self.source.add_vertex(0.0);
        self.vertices.push(u);
        u
    }

    pub fn add_edge(&mut self, e: Edge) {
        self.source.add_edge(e.from, e.to);
    }

    pub fn remove_edge(&mut self, e: Edge) {
        self.source.remove_edge(e.from, e.to);
    }

    pub fn has_edge(&self, e: Edge) -> bool {
        self.source.has_edge(e.from, e.to)
    }

    pub fn out_neighbors(&self, u: VertexId) -> &[VertexId] {
        self.source.out_neighbors(u)
    }

    pub fn in_neighbors(&self, u: VertexId) -> &[VertexId] {
        self.source.in_neighbors(u)
    }

    pub fn neighbors(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.source.neighbors(u)
    }

    pub fn out_degree(&self, u: VertexId) -> usize {
        self.source.out_neighbors(u).len()
    }

    pub fn in_degree(&self, u: VertexId) -> usize {
        self.source.in_neighbors(u).len()
    }

    /// Edges leaving vertices of this view, in vertex then adjacency order.
    pub fn edges(&self) -> Vec<Edge> {
        self.vertices
            .iter()
            .flat_map(|&u| {
                self.source
                    .out_neighbors(u)
                    .iter()
                    .map(move |&v| Edge::new(u, v))
            })
            .collect()
    }
}

impl fmt::Display for Subgraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &u in &self.vertices {
            write!(f, "{u}: {{")?;
            for (i, v) in self.out_neighbors(u).iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
