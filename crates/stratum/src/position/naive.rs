//! Left-aligned packing, useful for checking later stages in isolation.

use crate::graph::{Subgraph, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Attributes, BoundingBox, Node, Point};

/// Places the vertices of each layer left to right, `node_dist` apart, starting at the left
/// edge of the component.
pub fn run(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    nodes: &mut [Node],
    boxes: &VertexMap<BoundingBox>,
    attrs: &Attributes,
    origin: Point,
) -> Point {
    if g.is_empty() {
        return Point::default();
    }

    for layer in &h.layers {
        let mut x = 0.0;
        for &u in layer {
            x += boxes[u].left();
            nodes[u].pos.x = x;
            x += boxes[u].right() + attrs.node_dist;
        }
    }

    let height = super::assign_y(h, nodes, attrs, origin.y);
    let width = super::normalize_x(g, nodes, boxes, origin.x);
    Point::new(width, height)
}
