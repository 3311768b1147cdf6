//! Crossing counts for a proper hierarchy.

use crate::graph::{Subgraph, VertexId};
use crate::hierarchy::Hierarchy;

/// Total number of crossings between all pairs of adjacent layers.
pub fn cross_count(g: &Subgraph<'_>, h: &Hierarchy) -> usize {
    (1..h.len())
        .map(|i| two_layer_cross_count(g, h, &h.layers[i - 1], &h.layers[i]))
        .sum()
}

/// Counts pairs of edges between `north` and `south` whose ends are in opposite order.
///
/// Edge ends on the south layer are inserted into an accumulator tree in north order; every
/// insertion adds the number of already inserted ends further right.
fn two_layer_cross_count(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    north: &[VertexId],
    south: &[VertexId],
) -> usize {
    if south.is_empty() {
        return 0;
    }

    let mut south_ends: Vec<usize> = Vec::new();
    let mut ends: Vec<usize> = Vec::new();
    for &u in north {
        ends.clear();
        ends.extend(g.out_neighbors(u).iter().map(|&v| h.pos[v]));
        ends.sort_unstable();
        south_ends.extend_from_slice(&ends);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut count = 0;
    for pos in south_ends {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut right = 0;
        while index > 0 {
            if index % 2 == 1 {
                right += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        count += right;
    }

    count
}

/// Crossings among the edges incident to `u` and `v` if `u` were placed left of `v`, counting
/// both the edges to the layer above and to the layer below.
pub fn crossing_number(g: &Subgraph<'_>, h: &Hierarchy, u: VertexId, v: VertexId) -> usize {
    let mut count = 0;
    for &out_u in g.out_neighbors(u) {
        for &out_v in g.out_neighbors(v) {
            if h.pos[out_v] < h.pos[out_u] {
                count += 1;
            }
        }
    }
    for &in_u in g.in_neighbors(u) {
        for &in_v in g.in_neighbors(v) {
            if h.pos[in_v] < h.pos[in_u] {
                count += 1;
            }
        }
    }
    count
}
