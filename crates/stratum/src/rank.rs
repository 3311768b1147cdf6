//! Layer assignment.
//!
//! Every vertex gets a rank such that each edge points from a lower to a higher rank. The
//! default ranker minimizes the total span of all edges with network simplex; the longest-path
//! ranker stops after the initial feasible ranking.

use crate::error::{Error, Result, Stage};
use crate::graph::{Subgraph, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Limits, Ranker};

mod network_simplex;
mod tree;

/// Result of ranking one component.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub hierarchy: Hierarchy,
    /// Tree edge exchanges made by network simplex.
    pub simplex_iterations: usize,
}

/// Ranks the vertices of an acyclic subgraph and builds its layers.
///
/// Layers are numbered from 0; within a layer vertices keep subgraph order.
pub fn run(g: &Subgraph<'_>, ranker: Ranker, limits: &Limits) -> Result<Ranking> {
    let mut h = Hierarchy::new(g);
    if g.is_empty() {
        return Ok(Ranking {
            hierarchy: h,
            simplex_iterations: 0,
        });
    }

    init_ranking(g, &mut h)?;

    let simplex_iterations = match ranker {
        Ranker::NetworkSimplex => network_simplex::run(g, &mut h, limits.simplex_iterations)?,
        Ranker::LongestPath => 0,
    };

    build_layers(g, &mut h);

    tracing::trace!(
        layers = h.len(),
        simplex_iterations,
        "ranking finished"
    );

    Ok(Ranking {
        hierarchy: h,
        simplex_iterations,
    })
}

/// Assigns rank `i` to every vertex whose predecessors all got a rank below `i`.
fn init_ranking(g: &Subgraph<'_>, h: &mut Hierarchy) -> Result<()> {
    let mut ranked: VertexMap<bool> = VertexMap::new(g.id_bound(), false);
    let mut processed = 0usize;
    let mut current = 0i32;
    let mut to_rank = Vec::new();

    while processed < g.len() {
        to_rank.clear();
        for &u in g.vertices() {
            if !ranked[u] && g.in_neighbors(u).iter().all(|&v| ranked[v]) {
                to_rank.push(u);
            }
        }

        if to_rank.is_empty() {
            return Err(Error::invariant(
                Stage::Layering,
                format!(
                    "{} vertices left without a source; the component has a cycle",
                    g.len() - processed
                ),
            ));
        }

        for &u in &to_rank {
            ranked[u] = true;
            h.ranking[u] = current;
        }
        processed += to_rank.len();
        current += 1;
    }

    Ok(())
}

/// Shifts ranks to start at 0 and fills `layers` and `pos`.
fn build_layers(g: &Subgraph<'_>, h: &mut Hierarchy) {
    let min = g.vertices().iter().map(|&u| h.ranking[u]).min().unwrap_or(0);
    let max = g.vertices().iter().map(|&u| h.ranking[u]).max().unwrap_or(0);

    h.layers = vec![Vec::new(); (max - min + 1) as usize];
    for &u in g.vertices() {
        h.ranking[u] -= min;
        let layer = &mut h.layers[h.ranking[u] as usize];
        h.pos[u] = layer.len();
        layer.push(u);
    }
}
