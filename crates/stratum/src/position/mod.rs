//! Coordinate assignment.
//!
//! All vertices of a layer share one y coordinate: each layer sits below the previous one by
//! the largest radius of both layers plus `layer_dist`. The x coordinates come from the
//! configured [`Positioning`] strategy and are shifted so the leftmost bounding box starts at
//! the component origin.

use crate::graph::{Subgraph, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Attributes, BoundingBox, Node, Point, Positioning};

pub mod bk;
pub mod naive;

/// Positions the vertices of one component and returns its width and height.
///
/// Only `nodes[u].pos` of vertices in `g` is written.
pub fn run(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    nodes: &mut [Node],
    boxes: &VertexMap<BoundingBox>,
    attrs: &Attributes,
    origin: Point,
) -> Point {
    let dimensions = match attrs.positioning {
        Positioning::BrandesKopf => bk::run(g, h, nodes, boxes, attrs, origin),
        Positioning::Naive => naive::run(g, h, nodes, boxes, attrs, origin),
    };
    tracing::trace!(
        width = dimensions.x,
        height = dimensions.y,
        positioning = ?attrs.positioning,
        "component positioned"
    );
    dimensions
}

/// Writes y coordinates layer by layer and returns the total height.
pub(crate) fn assign_y(h: &Hierarchy, nodes: &mut [Node], attrs: &Attributes, start: f64) -> f64 {
    let mut y = start;
    for layer in &h.layers {
        let biggest = layer
            .iter()
            .map(|&u| nodes[u].size)
            .fold(0.0f64, f64::max);

        y += biggest;
        for &u in layer {
            nodes[u].pos.y = y;
        }
        y += biggest + attrs.layer_dist;
    }

    if h.is_empty() {
        0.0
    } else {
        y - attrs.layer_dist - start
    }
}

/// Moves the component so its leftmost bounding box starts at `start`; returns its width.
pub(crate) fn normalize_x(
    g: &Subgraph<'_>,
    nodes: &mut [Node],
    boxes: &VertexMap<BoundingBox>,
    start: f64,
) -> f64 {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &u in g.vertices() {
        min = min.min(nodes[u].pos.x - boxes[u].left());
        max = max.max(nodes[u].pos.x + boxes[u].right());
    }
    if g.is_empty() {
        return 0.0;
    }

    for &u in g.vertices() {
        nodes[u].pos.x = start + nodes[u].pos.x - min;
    }
    max - min
}
