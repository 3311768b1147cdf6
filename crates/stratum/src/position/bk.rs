//! Brandes & Köpf coordinate assignment.
//!
//! Four alignments are computed, one per combination of vertical direction (medians taken from
//! the layer above or below) and horizontal direction (blocks packed to the left or to the
//! right). Each vertex is aligned with a median neighbor into vertical blocks, blocks are
//! compacted against their neighbors, and the final x coordinate is the mean of the two middle
//! candidates.

use crate::graph::{Edge, EdgeSet, Subgraph, VertexId, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Attributes, BoundingBox, Node, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orient {
    UpperLeft = 0,
    LowerLeft = 1,
    UpperRight = 2,
    LowerRight = 3,
}

impl Orient {
    const ALL: [Orient; 4] = [
        Orient::UpperLeft,
        Orient::LowerLeft,
        Orient::UpperRight,
        Orient::LowerRight,
    ];

    fn left(self) -> bool {
        matches!(self, Orient::UpperLeft | Orient::LowerLeft)
    }

    fn up(self) -> bool {
        matches!(self, Orient::UpperLeft | Orient::UpperRight)
    }

    fn mirrored(self) -> Orient {
        match self {
            Orient::UpperLeft => Orient::UpperRight,
            Orient::UpperRight => Orient::UpperLeft,
            Orient::LowerLeft => Orient::LowerRight,
            Orient::LowerRight => Orient::LowerLeft,
        }
    }
}

/// Block structure and coordinates of one orientation.
#[derive(Debug, Clone)]
struct Alignment {
    medians: VertexMap<VertexId>,
    root: VertexMap<VertexId>,
    align: VertexMap<VertexId>,
    /// Class of each block.
    sink: VertexMap<VertexId>,
    shift: VertexMap<f64>,
    x: VertexMap<Option<f64>>,
    min: f64,
    max: f64,
}

impl Alignment {
    fn new(g: &Subgraph<'_>) -> Self {
        let ids: Vec<VertexId> = (0..g.id_bound()).collect();
        Self {
            medians: VertexMap::from(ids.clone()),
            root: VertexMap::from(ids.clone()),
            align: VertexMap::from(ids.clone()),
            sink: VertexMap::from(ids),
            shift: VertexMap::new(g.id_bound(), 0.0),
            x: VertexMap::new(g.id_bound(), None),
            min: f64::MAX,
            max: f64::MIN,
        }
    }

    fn x(&self, u: VertexId) -> f64 {
        self.x[u].unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Root of the block being placed.
    u: VertexId,
    /// Current member of the block.
    w: VertexId,
    /// Neighbor of `w` whose block has to be placed before `w` can be settled.
    pending: Option<VertexId>,
}

struct BrandesKopf<'a, 'g> {
    g: &'a Subgraph<'g>,
    h: &'a Hierarchy,
    boxes: &'a VertexMap<BoundingBox>,
    node_dist: f64,
    conflicting: EdgeSet,
    alignments: [Alignment; 4],
}

/// Assigns positions to the vertices of `g` and returns the size of the drawing.
///
/// The leftmost bounding box starts at `origin.x`, the first layer at `origin.y`.
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

    let mut bk = BrandesKopf {
        g,
        h,
        boxes,
        node_dist: attrs.node_dist,
        conflicting: EdgeSet::new(),
        alignments: std::array::from_fn(|_| Alignment::new(g)),
    };

    bk.init_medians();
    bk.mark_conflicts();
    for o in Orient::ALL {
        bk.vertical_align(o);
        bk.horizontal_compaction(o);
    }
    bk.align_layouts();

    let height = super::assign_y(h, nodes, attrs, origin.y);
    let mut vals = [0.0f64; 4];
    for &u in g.vertices() {
        for (i, a) in bk.alignments.iter().enumerate() {
            vals[i] = a.x(u);
        }
        vals.sort_by(f64::total_cmp);
        nodes[u].pos.x = (vals[1] + vals[2]) / 2.0;
    }

    let width = super::normalize_x(g, nodes, boxes, origin.x);
    Point::new(width, height)
}

/// Left and right median of `neighbors` by layer position; `(u, u)` without neighbors.
fn median(h: &Hierarchy, u: VertexId, neighbors: &[VertexId]) -> (VertexId, VertexId) {
    if neighbors.is_empty() {
        return (u, u);
    }
    let mut sorted = neighbors.to_vec();
    sorted.sort_by_key(|&v| h.pos[v]);

    let m = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        (sorted[m], sorted[m])
    } else {
        (sorted[m - 1], sorted[m])
    }
}

fn indices(len: usize, desc: bool) -> Box<dyn Iterator<Item = usize>> {
    if desc {
        Box::new((0..len).rev())
    } else {
        Box::new(0..len)
    }
}

impl BrandesKopf<'_, '_> {
    fn init_medians(&mut self) {
        let (g, h) = (self.g, self.h);
        for &u in g.vertices() {
            let (left, right) = median(h, u, g.out_neighbors(u));
            self.alignments[Orient::LowerLeft as usize].medians[u] = left;
            self.alignments[Orient::LowerRight as usize].medians[u] = right;

            let (left, right) = median(h, u, g.in_neighbors(u));
            self.alignments[Orient::UpperLeft as usize].medians[u] = left;
            self.alignments[Orient::UpperRight as usize].medians[u] = right;
        }
    }

    /// Is `u` the upper end of an edge between two dummy vertices?
    fn is_inner(&self, u: VertexId) -> bool {
        let out = self.g.out_neighbors(u);
        out.len() == 1 && self.g.is_dummy(u) && self.g.is_dummy(out[0])
    }

    /// Records type 1 conflicts: edges that cross an inner segment. Inner segments win, so
    /// the conflicting edges are never used for alignment.
    fn mark_conflicts(&mut self) {
        let (g, h) = (self.g, self.h);
        if h.len() < 4 {
            return;
        }

        for i in 1..h.len() - 2 {
            let layer = &h.layers[i];
            let mut last_pos = 0;
            let mut p = 0;

            for (j, &u) in layer.iter().enumerate() {
                let inner = self.is_inner(u);
                if j + 1 != layer.len() && !inner {
                    continue;
                }

                let curr_pos = if inner {
                    h.pos[g.out_neighbors(u)[0]]
                } else {
                    h.layers[i + 1].len()
                };

                while p <= j {
                    let pth = layer[p];
                    for &v in g.out_neighbors(pth) {
                        if h.pos[v] < last_pos || h.pos[v] > curr_pos {
                            self.conflicting.insert(Edge::new(pth, v));
                        }
                    }
                    p += 1;
                }
                last_pos = curr_pos;
            }
        }
    }

    fn is_conflicting(&self, u: VertexId, median: VertexId, o: Orient) -> bool {
        if o.up() {
            self.conflicting.contains(Edge::new(median, u))
        } else {
            self.conflicting.contains(Edge::new(u, median))
        }
    }

    /// Aligns every vertex with one of its medians, as long as alignments do not cross.
    fn vertical_align(&mut self, o: Orient) {
        let (g, h) = (self.g, self.h);
        let d: isize = if o.left() { 1 } else { -1 };

        for l in indices(h.len(), !o.up()) {
            let layer = &h.layers[l];
            let mut m_pos: isize = if o.left() { 0 } else { g.len() as isize };

            for k in indices(layer.len(), !o.left()) {
                let u = layer[k];
                let candidates = [
                    self.alignments[o as usize].medians[u],
                    self.alignments[o.mirrored() as usize].medians[u],
                ];

                for m in candidates {
                    let pos = h.pos[m] as isize;
                    if m != u && !self.is_conflicting(u, m, o) && d * pos >= d * m_pos {
                        let a = &mut self.alignments[o as usize];
                        a.align[m] = u;
                        a.root[u] = a.root[m];
                        a.align[u] = a.root[m];
                        m_pos = pos + d;
                        break;
                    }
                }
            }
        }
    }

    fn horizontal_compaction(&mut self, o: Orient) {
        let (g, h) = (self.g, self.h);
        let mut a = std::mem::replace(&mut self.alignments[o as usize], Alignment::new(g));

        for &u in g.vertices() {
            if a.root[u] == u {
                self.place_block(&mut a, o.left(), u);
            }
        }

        for l in indices(h.len(), o.up()) {
            for &u in &h.layers[l] {
                let r = a.root[u];
                let x = a.x(r) + a.shift[a.sink[r]];
                a.x[u] = Some(x);
                a.max = a.max.max(x);
                a.min = a.min.min(x);
            }
        }

        self.alignments[o as usize] = a;
    }

    /// Neighbor of `w` on its layer in the direction blocks are packed against.
    fn packing_neighbor(&self, w: VertexId, left: bool) -> Option<VertexId> {
        if left {
            self.h.prev(w)
        } else {
            self.h.next(w)
        }
    }

    fn separation(&self, u: VertexId, v: VertexId) -> f64 {
        self.boxes[u].right() + self.boxes[v].left() + self.node_dist
    }

    /// Places the block rooted at `start`, placing the blocks it is packed against first.
    fn place_block(&self, a: &mut Alignment, left: bool, start: VertexId) {
        if a.x[start].is_some() {
            return;
        }
        a.x[start] = Some(0.0);

        let mut stack = vec![Frame {
            u: start,
            w: start,
            pending: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let (u, w) = (frame.u, frame.w);
            match frame.pending.take() {
                None => {
                    if let Some(v) = self.packing_neighbor(w, left) {
                        frame.pending = Some(v);
                        let rv = a.root[v];
                        if a.x[rv].is_none() {
                            a.x[rv] = Some(0.0);
                            stack.push(Frame {
                                u: rv,
                                w: rv,
                                pending: None,
                            });
                        }
                        continue;
                    }
                }
                Some(v) => self.settle(a, left, u, w, v),
            }

            let next = a.align[w];
            if next == u {
                stack.pop();
            } else if let Some(frame) = stack.last_mut() {
                frame.w = next;
            }
        }
    }

    /// Packs the block of `u` against the already placed block of `v`, the neighbor of `w`.
    fn settle(&self, a: &mut Alignment, left: bool, u: VertexId, w: VertexId, v: VertexId) {
        let rv = a.root[v];
        let (d, dist) = if left {
            (-1.0, self.separation(v, w))
        } else {
            (1.0, self.separation(w, v))
        };

        if a.sink[u] == u {
            a.sink[u] = a.sink[rv];
        }

        if a.sink[u] != a.sink[rv] {
            let su = a.sink[u];
            let new_shift = a.shift[a.sink[rv]] + a.x(rv) - a.x(u) - d * dist;
            a.shift[su] = if left {
                a.shift[su].max(new_shift)
            } else {
                a.shift[su].min(new_shift)
            };
        } else {
            let new_x = a.x(rv) - d * dist;
            a.x[u] = Some(if left {
                a.x(u).max(new_x)
            } else {
                a.x(u).min(new_x)
            });
        }
    }

    /// Shifts every alignment onto the narrowest one: left alignments share its minimum,
    /// right alignments its maximum.
    fn align_layouts(&mut self) {
        let g = self.g;
        let mut best = 0;
        for i in 1..4 {
            let (b, c) = (&self.alignments[best], &self.alignments[i]);
            if b.max - b.min > c.max - c.min {
                best = i;
            }
        }
        let (best_min, best_max) = (self.alignments[best].min, self.alignments[best].max);

        for o in Orient::ALL {
            let a = &mut self.alignments[o as usize];
            let d = if o.left() {
                best_min - a.min
            } else {
                best_max - a.max
            };
            for &u in g.vertices() {
                a.x[u] = Some(a.x(u) + d);
            }
        }
    }
}
