//! The layout entry point.
//!
//! Connected components are laid out one after another and placed side by side, left to
//! right, `node_dist` apart. Dummy vertices created for long edges stay in the working copy of
//! the graph and show up in the node list with size zero.

use crate::error::{Result, Stage};
use crate::graph::{Graph, Subgraph, VertexId, VertexMap};
use crate::model::{Attributes, BoundingBox, Layout, LayoutStats, Node, Path, Point};
use crate::rank::Ranking;
use crate::{acyclic, normalize, order, position, rank, route};

/// Lays out `graph`.
///
/// The caller's graph is left untouched. Node `i` of the result belongs to vertex `i`; nodes
/// past the original vertex count are dummy vertices.
pub fn layout(graph: &Graph, attrs: &Attributes) -> Result<Layout> {
    let mut g = graph.clone();
    let mut state = LayoutState::new(&g, attrs);

    let components = g.components();
    let mut origin = Point::default();
    let mut width = 0.0;
    let mut height = 0.0f64;

    for vertices in components.iter().cloned() {
        let dims = state.process_component(&mut g, vertices, origin)?;
        origin.x += dims.x + attrs.node_dist;
        width += dims.x + attrs.node_dist;
        height = height.max(dims.y);
    }
    if !components.is_empty() {
        width -= attrs.node_dist;
    }

    state.stats.components = components.len();
    state.grow(g.len());

    tracing::debug!(
        components = components.len(),
        vertices = graph.len(),
        dummies = state.stats.dummy_vertices,
        width,
        height,
        "layout finished"
    );

    Ok(Layout {
        nodes: state.nodes,
        paths: state.paths,
        width,
        height,
        stats: state.stats,
    })
}

struct LayoutState<'a> {
    attrs: &'a Attributes,
    nodes: Vec<Node>,
    boxes: VertexMap<BoundingBox>,
    paths: Vec<Path>,
    stats: LayoutStats,
}

impl<'a> LayoutState<'a> {
    fn new(g: &Graph, attrs: &'a Attributes) -> Self {
        let mut nodes = Vec::with_capacity(g.len());
        let mut boxes = Vec::with_capacity(g.len());
        for u in g.vertices() {
            let size = node_size(g.size(u), attrs.default_node_size);
            nodes.push(Node {
                id: u,
                pos: Point::default(),
                size,
            });
            boxes.push(BoundingBox::around(size));
        }

        Self {
            attrs,
            nodes,
            boxes: VertexMap::from(boxes),
            paths: Vec::new(),
            stats: LayoutStats::default(),
        }
    }

    /// Adds size-less nodes and empty boxes for vertices created since the last call.
    fn grow(&mut self, len: usize) {
        for u in self.nodes.len()..len {
            self.nodes.push(Node {
                id: u,
                pos: Point::default(),
                size: 0.0,
            });
        }
        self.boxes.grow(len, BoundingBox::default());
    }

    fn process_component(
        &mut self,
        g: &mut Graph,
        vertices: Vec<VertexId>,
        origin: Point,
    ) -> Result<Point> {
        let attrs = self.attrs;
        let mut sub = Subgraph::new(g, vertices);
        let original = sub.len();

        let mut feedback = acyclic::run(&mut sub);

        let Ranking {
            hierarchy: mut h,
            simplex_iterations,
        } = rank::run(&sub, attrs.ranker, &attrs.limits)?;
        h.check(&sub, Stage::Layering)?;

        let long_edges = normalize::run(&mut sub, &mut h);
        feedback.rewrite_long_edges(&long_edges);
        self.grow(sub.id_bound());
        h.check(&sub, Stage::Normalization)?;
        h.check_proper(&sub)?;

        let crossings = order::run(&sub, &mut h, &attrs.ordering, &attrs.limits)?;
        h.check(&sub, Stage::Ordering)?;

        for &u in &feedback.loops {
            self.boxes[u].size.x += attrs.loop_size;
        }

        let dims = position::run(&sub, &h, &mut self.nodes, &self.boxes, attrs, origin);
        let paths = route::run(&sub, &h, &feedback, &self.nodes, attrs)?;
        self.paths.extend(paths);

        let dummies = sub.len() - original;
        self.stats.dummy_vertices += dummies;
        self.stats.simplex_iterations += simplex_iterations;
        self.stats.initial_crossings += crossings.initial_crossings;
        self.stats.final_crossings += crossings.final_crossings;
        self.stats.sweeps += crossings.sweeps;

        tracing::debug!(
            vertices = original,
            dummies,
            layers = h.len(),
            crossings = crossings.final_crossings,
            width = dims.x,
            height = dims.y,
            "component laid out"
        );

        Ok(dims)
    }
}

/// Radius used for a vertex of the given size.
fn node_size(size: f64, default: f64) -> f64 {
    if size > 0.0 && size.is_finite() {
        size
    } else {
        default
    }
}
