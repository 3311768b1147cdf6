//! Directed graph store with dense integer vertex ids.
//!
//! The store keeps both adjacency directions so that predecessor and successor slices are
//! available without scanning. Edges are not deduplicated: adding the same edge twice, or
//! passing an id that was not returned by [`Graph::add_vertex`], is a caller error and leaves
//! the layout result unspecified (out-of-range ids panic on indexing).

pub mod alg;
pub mod builder;
pub mod edge;
pub mod subgraph;
pub mod vertex_map;

use std::fmt;
use std::ops::Range;

pub type VertexId = usize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    sizes: Vec<f64>,
    out: Vec<Vec<VertexId>>,
    in_: Vec<Vec<VertexId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the given radius and returns its id.
    pub fn add_vertex(&mut self, size: f64) -> VertexId {
        self.sizes.push(size);
        self.out.push(Vec::new());
        self.in_.push(Vec::new());
        self.out.len() - 1
    }

    /// Adds the edge `(from, to)`.
    ///
    /// Both ids must come from [`Graph::add_vertex`] and the edge must not already exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.out[from].push(to);
        self.in_[to].push(from);
        self
    }

    /// Removes the edge `(from, to)` if present. Linear in the degree of both endpoints.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        remove_neighbor(&mut self.out[from], to);
        remove_neighbor(&mut self.in_[to], from);
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.out
            .get(from)
            .is_some_and(|out| out.contains(&to))
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    pub fn size(&self, u: VertexId) -> f64 {
        self.sizes[u]
    }

    pub fn set_size(&mut self, u: VertexId, size: f64) {
        self.sizes[u] = size;
    }

    pub fn vertices(&self) -> Range<VertexId> {
        0..self.len()
    }

    pub fn out_neighbors(&self, u: VertexId) -> &[VertexId] {
        &self.out[u]
    }

    pub fn in_neighbors(&self, u: VertexId) -> &[VertexId] {
        &self.in_[u]
    }

    /// Successors followed by predecessors.
    pub fn neighbors(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out[u].iter().chain(self.in_[u].iter()).copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = edge::Edge> + '_ {
        self.out.iter().enumerate().flat_map(|(from, out)| {
            out.iter().map(move |&to| edge::Edge::new(from, to))
        })
    }

    /// Splits the vertex set into weakly connected components.
    ///
    /// Components are returned in order of their smallest vertex; vertices inside a component
    /// are listed in depth-first discovery order (successors before predecessors).
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut done = vec![false; self.len()];
        let mut components: Vec<Vec<VertexId>> = Vec::new();
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for start in self.vertices() {
            if done[start] {
                continue;
            }
            let mut component = vec![start];
            done[start] = true;
            stack.push((start, 0));

            while let Some((u, next)) = stack.last_mut() {
                let u = *u;
                let degree = self.out[u].len() + self.in_[u].len();
                if *next >= degree {
                    stack.pop();
                    continue;
                }
                let v = if *next < self.out[u].len() {
                    self.out[u][*next]
                } else {
                    self.in_[u][*next - self.out[u].len()]
                };
                *next += 1;
                if !done[v] {
                    done[v] = true;
                    component.push(v);
                    stack.push((v, 0));
                }
            }

            components.push(component);
        }

        components
    }
}

fn remove_neighbor(neighbors: &mut Vec<VertexId>, u: VertexId) {
    if let Some(idx) = neighbors.iter().position(|&v| v == u) {
        neighbors.remove(idx);
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            write!(f, "{u}: [")?;
            for (i, v) in self.out[u].iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
