//! Crossing reduction.
//!
//! Layers of a proper hierarchy are reordered by the barycenter heuristic: alternating
//! top-down and bottom-up sweeps sort each layer by the mean position of its neighbors on the
//! previously processed layer. Every sweep may be followed by a transpose pass that swaps
//! adjacent vertices while that removes crossings. A run ends after a number of sweeps without
//! improvement; further runs start from shuffled layers.

use crate::error::{Error, Result, Stage};
use crate::graph::{Subgraph, VertexId, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Limits, OrderingOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

mod cross_count;

pub use cross_count::{cross_count, crossing_number};

/// Counters of one crossing reduction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Crossings after the first barycenter sweep.
    pub initial_crossings: usize,
    pub final_crossings: usize,
    /// Sweeps over all restarts.
    pub sweeps: usize,
}

/// Reorders the layers of `h` and leaves the best ordering found in place.
pub fn run(
    g: &Subgraph<'_>,
    h: &mut Hierarchy,
    options: &OrderingOptions,
    limits: &Limits,
) -> Result<OrderStats> {
    let mut reducer = Barycenter::new(g, h, options, limits);
    reducer.run(g, h)
}

struct Barycenter<'a> {
    options: &'a OrderingOptions,
    limits: &'a Limits,
    rng: StdRng,
    weights: VertexMap<f64>,
    best_order: VertexMap<usize>,
    min_cross: usize,
    sweeps: usize,
}

impl<'a> Barycenter<'a> {
    fn new(
        g: &Subgraph<'_>,
        h: &Hierarchy,
        options: &'a OrderingOptions,
        limits: &'a Limits,
    ) -> Self {
        Self {
            options,
            limits,
            rng: StdRng::seed_from_u64(options.seed),
            weights: VertexMap::new(g.id_bound(), 0.0),
            best_order: h.pos.clone(),
            min_cross: 0,
            sweeps: 0,
        }
    }

    fn run(&mut self, g: &Subgraph<'_>, h: &mut Hierarchy) -> Result<OrderStats> {
        self.min_cross = self.init_order(g, h);
        self.best_order = h.pos.clone();
        let initial_crossings = self.min_cross;

        let restarts = self.options.restarts.max(1);
        let mut base = self.min_cross;
        for i in 0..restarts {
            self.reduce(g, h, base)?;

            if i + 1 != restarts {
                for layer in &mut h.layers {
                    layer.shuffle(&mut self.rng);
                }
                h.update_pos();
                base = self.init_order(g, h);
            }
        }

        for &u in g.vertices() {
            let rank = h.rank(u);
            h.layers[rank][self.best_order[u]] = u;
        }
        h.update_pos();

        Ok(OrderStats {
            initial_crossings,
            final_crossings: self.min_cross,
            sweeps: self.sweeps,
        })
    }

    fn init_order(&mut self, g: &Subgraph<'_>, h: &mut Hierarchy) -> usize {
        self.barycenter(g, h, 0);
        cross_count(g, h)
    }

    /// One run: sweep until `forgiveness` consecutive sweeps fail to beat the run's best.
    fn reduce(&mut self, g: &Subgraph<'_>, h: &mut Hierarchy, mut local_min: usize) -> Result<()> {
        let mut local_order = h.pos.clone();
        let mut fails = 0;

        for i in 0.. {
            if i >= self.limits.sweeps {
                return Err(Error::IterationLimit {
                    stage: Stage::Ordering,
                    limit: self.limits.sweeps,
                });
            }

            self.barycenter(g, h, i);
            if self.options.transpose {
                transpose(g, h, self.limits.transpose_passes)?;
            }
            self.sweeps += 1;

            let cross = cross_count(g, h);
            tracing::trace!(sweep = i, crossings = cross, best = local_min, "crossing sweep");

            if cross < local_min {
                fails = 0;
                local_order = h.pos.clone();
                local_min = cross;
            } else {
                fails += 1;
            }

            if fails >= self.options.forgiveness {
                break;
            }
        }

        if local_min < self.min_cross {
            self.best_order = local_order;
            self.min_cross = local_min;
        }
        Ok(())
    }

    /// Even sweeps go top-down and weigh vertices by their in-neighbors, odd sweeps go
    /// bottom-up and use out-neighbors.
    fn barycenter(&mut self, g: &Subgraph<'_>, h: &mut Hierarchy, sweep: usize) {
        if sweep % 2 == 0 {
            for j in 1..h.len() {
                self.reorder_layer(g, h, j, true);
            }
        } else {
            for j in (0..h.len().saturating_sub(1)).rev() {
                self.reorder_layer(g, h, j, false);
            }
        }
    }

    fn reorder_layer(&mut self, g: &Subgraph<'_>, h: &mut Hierarchy, j: usize, downward: bool) {
        for &u in &h.layers[j] {
            let neighbors = if downward {
                g.in_neighbors(u)
            } else {
                g.out_neighbors(u)
            };
            self.weights[u] = weight(&h.pos, u, neighbors);
        }

        let weights = &self.weights;
        h.layers[j].sort_by(|&u, &v| weights[u].total_cmp(&weights[v]));
        h.update_layer_pos(j);
    }
}

/// Mean position of `neighbors`, or the position of `u` itself when it has none.
fn weight(pos: &VertexMap<usize>, u: VertexId, neighbors: &[VertexId]) -> f64 {
    if neighbors.is_empty() {
        return pos[u] as f64;
    }
    let sum: usize = neighbors.iter().map(|&v| pos[v]).sum();
    sum as f64 / neighbors.len() as f64
}

/// Swaps adjacent vertices while that lowers their crossing number.
///
/// A vertex is only reconsidered after something next to it or adjacent to it moved.
fn transpose(g: &Subgraph<'_>, h: &mut Hierarchy, limit: usize) -> Result<()> {
    let mut eligible: VertexMap<bool> = VertexMap::new(g.id_bound(), true);
    let mut improved = true;
    let mut passes = 0;

    while improved {
        if passes >= limit {
            return Err(Error::IterationLimit {
                stage: Stage::Ordering,
                limit,
            });
        }
        passes += 1;
        improved = false;

        for l in 0..h.len() {
            for i in 0..h.layers[l].len().saturating_sub(1) {
                let u = h.layers[l][i];
                if !eligible[u] {
                    continue;
                }
                let v = h.layers[l][i + 1];

                if crossing_number(g, h, u, v) > crossing_number(g, h, v, u) {
                    improved = true;
                    h.swap(u, v);

                    if i > 0 {
                        eligible[h.layers[l][i - 1]] = true;
                    }
                    eligible[u] = true;
                    for x in g.neighbors(u).chain(g.neighbors(v)) {
                        eligible[x] = true;
                    }
                }
                eligible[h.layers[l][i]] = false;
            }
        }
    }

    Ok(())
}
