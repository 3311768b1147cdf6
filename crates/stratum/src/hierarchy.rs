//! Partition of a component into ordered layers.

use crate::error::{Error, Result, Stage};
use crate::graph::{Subgraph, VertexId, VertexMap};
use std::fmt;

/// Layer assignment plus the order of vertices inside each layer.
///
/// Invariant (outside of the layering stage itself): `layers[ranking[u]][pos[u]] == u` for
/// every vertex `u` of the component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hierarchy {
    pub ranking: VertexMap<i32>,
    pub pos: VertexMap<usize>,
    pub layers: Vec<Vec<VertexId>>,
}

impl Hierarchy {
    pub fn new(g: &Subgraph<'_>) -> Self {
        Self {
            ranking: VertexMap::new(g.id_bound(), 0),
            pos: VertexMap::new(g.id_bound(), 0),
            layers: Vec::new(),
        }
    }

    /// Signed number of layers crossed by `(u, v)`; negative when the edge points up.
    pub fn span(&self, u: VertexId, v: VertexId) -> i32 {
        self.ranking[v] - self.ranking[u]
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Index of the layer `u` is on.
    ///
    /// Ranks are non-negative once the layers are built; [`Hierarchy::check`] reports a
    /// negative rank as [`Error::LayerMismatch`]. Calling this on a vertex with a negative rank
    /// is a bug and panics when the layer is accessed.
    pub fn rank(&self, u: VertexId) -> usize {
        debug_assert!(self.ranking[u] >= 0, "vertex {u} has negative rank");
        self.ranking[u] as usize
    }

    pub fn layer(&self, u: VertexId) -> &[VertexId] {
        &self.layers[self.rank(u)]
    }

    /// Recomputes every position from the current layer contents.
    pub fn update_pos(&mut self) {
        for layer in &self.layers {
            for (i, &u) in layer.iter().enumerate() {
                self.pos[u] = i;
            }
        }
    }

    /// Recomputes the positions of a single layer.
    pub fn update_layer_pos(&mut self, layer: usize) {
        for (i, &u) in self.layers[layer].iter().enumerate() {
            self.pos[u] = i;
        }
    }

    pub fn next(&self, u: VertexId) -> Option<VertexId> {
        self.layer(u).get(self.pos[u] + 1).copied()
    }

    pub fn prev(&self, u: VertexId) -> Option<VertexId> {
        let p = self.pos[u].checked_sub(1)?;
        self.layer(u).get(p).copied()
    }

    /// Swaps two vertices of the same layer.
    pub fn swap(&mut self, u: VertexId, v: VertexId) {
        let pu = self.pos[u];
        let pv = self.pos[v];
        self.pos[u] = pv;
        self.pos[v] = pu;

        let (ru, rv) = (self.rank(u), self.rank(v));
        self.layers[ru][pv] = u;
        self.layers[rv][pu] = v;
    }

    /// Makes room for vertex ids created after the hierarchy was built.
    pub fn grow(&mut self, len: usize) {
        self.ranking.grow(len, 0);
        self.pos.grow(len, 0);
    }

    /// Checks `layers[ranking[u]][pos[u]] == u` for every vertex of `g`.
    pub fn check(&self, g: &Subgraph<'_>, stage: Stage) -> Result<()> {
        let mut seen = 0usize;
        for &u in g.vertices() {
            let ok = usize::try_from(self.ranking[u])
                .ok()
                .and_then(|rank| self.layers.get(rank))
                .and_then(|layer| layer.get(self.pos[u]))
                .is_some_and(|&v| v == u);
            if !ok {
                return Err(Error::LayerMismatch { stage, vertex: u });
            }
            seen += 1;
        }
        let stored: usize = self.layers.iter().map(Vec::len).sum();
        if stored != seen {
            return Err(Error::invariant(
                stage,
                format!("layers hold {stored} vertices, component has {seen}"),
            ));
        }
        Ok(())
    }

    /// Checks that every edge spans exactly one layer.
    pub fn check_proper(&self, g: &Subgraph<'_>) -> Result<()> {
        for e in g.edges() {
            let span = self.span(e.from, e.to);
            if span != 1 {
                return Err(Error::NotProper {
                    from: e.from,
                    to: e.to,
                    span,
                });
            }
        }
        Ok(())
    }

    pub fn is_proper(&self, g: &Subgraph<'_>) -> bool {
        self.check_proper(g).is_ok()
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in &self.layers {
            for u in layer {
                write!(f, "{u} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
