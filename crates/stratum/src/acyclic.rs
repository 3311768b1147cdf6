//! Break cycles with a depth-first feedback arc set.
//!
//! Back edges found by the search are reversed, except for self-loops and edges whose
//! reverse already exists (two-cycles): those are removed and remembered so routing can draw
//! a loop or a bidirectional path instead.

use crate::graph::{Edge, EdgeSet, Subgraph, VertexId, VertexMap};
use crate::normalize::LongEdge;

/// Edges changed while breaking cycles.
///
/// Edges are stored in the orientation they have in the graph afterwards: a cycle-causing
/// edge `(u, v)` is recorded as `(v, u)`.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSet {
    pub reversed: EdgeSet,
    pub removed: EdgeSet,
    pub loops: Vec<VertexId>,
}

impl FeedbackSet {
    /// Rewrites records of edges that were split into dummy chains to reference the first
    /// hop of the chain. The rest of the chain is recovered by following the dummy vertices.
    pub fn rewrite_long_edges(&mut self, long_edges: &[LongEdge]) {
        for long in long_edges {
            let first_hop = long.first_hop();
            if self.reversed.remove(long.orig) {
                self.reversed.insert(first_hop);
            } else if self.removed.remove(long.orig) {
                self.removed.insert(first_hop);
            }
        }
    }

    pub fn has_loop(&self, u: VertexId) -> bool {
        self.loops.contains(&u)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

pub fn run(g: &mut Subgraph<'_>) -> FeedbackSet {
    let (to_reverse, to_remove) = dfs_feedback(g);

    let mut fs = FeedbackSet::default();

    for e in to_remove {
        g.remove_edge(e);
        if e.is_loop() {
            fs.loops.push(e.from);
        } else {
            fs.removed.insert(e.reversed());
        }
    }

    for e in to_reverse {
        g.remove_edge(e);
        g.add_edge(e.reversed());
        fs.reversed.insert(e.reversed());
    }

    tracing::trace!(
        reversed = fs.reversed.len(),
        removed = fs.removed.len(),
        loops = fs.loops.len(),
        "cycles broken"
    );

    fs
}

fn dfs_feedback(g: &Subgraph<'_>) -> (Vec<Edge>, Vec<Edge>) {
    let mut marks: VertexMap<Mark> = VertexMap::covering(g.vertices(), Mark::Unvisited);
    let mut to_reverse: Vec<Edge> = Vec::new();
    let mut to_remove: Vec<Edge> = Vec::new();
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for &start in g.vertices() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::InProgress;
        stack.push((start, 0));

        while let Some(&(u, next)) = stack.last() {
            let Some(&v) = g.out_neighbors(u).get(next) else {
                marks[u] = Mark::Done;
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            if u == v {
                to_remove.push(Edge::new(u, u));
            } else if marks[v] == Mark::InProgress {
                if g.has_edge(Edge::new(v, u)) {
                    to_remove.push(Edge::new(u, v));
                } else {
                    to_reverse.push(Edge::new(u, v));
                }
            } else if marks[v] == Mark::Unvisited {
                marks[v] = Mark::InProgress;
                stack.push((v, 0));
            }
        }
    }

    (to_reverse, to_remove)
}
