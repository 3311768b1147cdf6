//! Split edges spanning several layers into chains of dummy vertices.

use crate::graph::{Edge, Subgraph, VertexId};
use crate::hierarchy::Hierarchy;

/// An edge that was replaced by a chain through dummy vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongEdge {
    pub orig: Edge,
    /// `orig.from`, the dummy vertices top to bottom, then `orig.to`.
    pub path: Vec<VertexId>,
}

impl LongEdge {
    pub fn first_hop(&self) -> Edge {
        Edge::new(self.path[0], self.path[1])
    }

    pub fn dummies(&self) -> &[VertexId] {
        &self.path[1..self.path.len() - 1]
    }
}

/// Makes the hierarchy proper. New dummy vertices are appended to the end of their layers.
pub fn run(g: &mut Subgraph<'_>, h: &mut Hierarchy) -> Vec<LongEdge> {
    let long: Vec<Edge> = g
        .edges()
        .into_iter()
        .filter(|e| h.span(e.from, e.to) > 1)
        .collect();

    let mut split = Vec::with_capacity(long.len());
    for orig in long {
        let span = h.span(orig.from, orig.to);
        let mut path = Vec::with_capacity(span as usize + 1);
        path.push(orig.from);

        let mut s = orig.from;
        for _ in 1..span {
            let t = g.add_dummy();
            h.grow(g.id_bound());

            let rank = h.ranking[s] + 1;
            h.ranking[t] = rank;
            let layer = &mut h.layers[rank as usize];
            h.pos[t] = layer.len();
            layer.push(t);

            g.add_edge(Edge::new(s, t));
            path.push(t);
            s = t;
        }

        path.push(orig.to);
        g.add_edge(Edge::new(s, orig.to));
        g.remove_edge(orig);

        split.push(LongEdge { orig, path });
    }

    if !split.is_empty() {
        tracing::trace!(long_edges = split.len(), "long edges split");
    }
    split
}
