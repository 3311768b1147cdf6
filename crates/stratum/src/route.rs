//! Edge routing.
//!
//! Every vertex has a port shift per quadrant (see [`quadrant`]): how far below or above its
//! center edges leaving in that direction attach. Shifts grow in fixed steps until an edge
//! keeps a minimum clearance from the vertices next to its endpoints, never beyond the vertex
//! radius. Chains of dummy vertices become elbow points; self-loops are drawn as a square on
//! the right side of their vertex.

use crate::acyclic::FeedbackSet;
use crate::error::{Error, Result};
use crate::geom::{line_circle_intersection, line_point_dist};
use crate::graph::{Edge, Subgraph, VertexId, VertexMap};
use crate::hierarchy::Hierarchy;
use crate::model::{Attributes, Node, Path, Point, sign};

const SHIFT_STEP: f64 = 5.0;
const MIN_SEP: f64 = 5.0;
const LOOP_ANGLE_SEP: f64 = 5.0;

/// Index of the quadrant `dirs` points to (y axis pointing down):
///
/// ```text
///    2 | 1
///   ---+--->
///    3 | 0
///      v
/// ```
pub fn quadrant(dirs: Point) -> usize {
    if dirs.x == 1.0 {
        usize::from(dirs.y != 1.0)
    } else {
        2 + usize::from(dirs.y == 1.0)
    }
}

/// Checks that every recorded feedback edge is still present in `g`.
pub fn check_feedback(g: &Subgraph<'_>, fs: &FeedbackSet) -> Result<()> {
    for e in fs.reversed.sorted().into_iter().chain(fs.removed.sorted()) {
        if !g.has_edge(e) {
            return Err(Error::FeedbackReplay {
                from: e.from,
                to: e.to,
            });
        }
    }
    Ok(())
}

/// Routes every edge of the component and every self-loop recorded in `fs`.
///
/// Paths start at a real vertex and continue through dummy vertices to the next real one.
/// Reversed edges get their original orientation back, removed edges of a two-cycle turn
/// the remaining path bidirectional.
pub fn run(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    fs: &FeedbackSet,
    nodes: &[Node],
    attrs: &Attributes,
) -> Result<Vec<Path>> {
    check_feedback(g, fs)?;

    let mut router = Router {
        g,
        h,
        nodes,
        attrs,
        shifts: VertexMap::new(g.id_bound(), [0.0; 4]),
        has_loop: VertexMap::new(g.id_bound(), false),
    };
    for &u in &fs.loops {
        router.has_loop[u] = true;
    }

    router.calculate_shifts();
    Ok(router.make_paths(fs))
}

struct Router<'a, 'g> {
    g: &'a Subgraph<'g>,
    h: &'a Hierarchy,
    nodes: &'a [Node],
    attrs: &'a Attributes,
    shifts: VertexMap<[f64; 4]>,
    has_loop: VertexMap<bool>,
}

impl Router<'_, '_> {
    fn pos(&self, u: VertexId) -> Point {
        self.nodes[u].pos
    }

    fn dirs(&self, e: Edge) -> Point {
        (self.pos(e.to) - self.pos(e.from)).signum()
    }

    fn shift(&self, u: VertexId, dirs: Point) -> f64 {
        self.shifts[u][quadrant(dirs)]
    }

    /// Largest shift a port of `u` may get.
    fn max_shift(&self, u: VertexId) -> f64 {
        if self.g.is_dummy(u) {
            self.attrs.default_node_size
        } else {
            self.nodes[u].size
        }
    }

    fn center(&self, u: VertexId, dirs: Point) -> Point {
        self.pos(u) + Point::new(0.0, dirs.y * self.shift(u, dirs))
    }

    fn calculate_shifts(&mut self) {
        let (g, h) = (self.g, self.h);
        for layer in &h.layers {
            for &u in layer {
                for &v in g.out_neighbors(u) {
                    if !g.is_dummy(u) || !g.is_dummy(v) {
                        self.set_regular_shifts(Edge::new(u, v));
                    }
                }
            }
        }
        self.unify_dummy_shifts();
    }

    fn set_regular_shifts(&mut self, e: Edge) {
        let dirs = self.dirs(e);
        if dirs.x == 0.0 {
            return;
        }

        self.check_loop(e);
        self.check_loop(e.reversed());

        // Dummy neighbors are checked together with the closest real vertex behind them.
        let d = dirs.x as isize;
        let up = self.next_non_dummy(e.from, d);
        let down = self.next_non_dummy(e.to, -d);
        let up_d = self.next_vertex(e.from, d);
        let down_d = self.next_vertex(e.to, -d);

        self.set_shift(e, up, down, dirs);
        self.set_shift(e, up, down_d, dirs);
        self.set_shift(e, up_d, down, dirs);
        self.set_shift(e, up_d, down_d, dirs);
    }

    /// Obstacle center and radius; a missing obstacle sits behind the edge's start.
    fn obstacle(&self, e: Edge, v: Option<VertexId>, dirs: Point) -> (Point, f64) {
        match v {
            Some(v) if self.g.is_dummy(v) => (self.pos(v), self.shift(v, dirs)),
            Some(v) => (self.pos(v), self.nodes[v].size),
            None => (self.pos(e.from) - Point::new(dirs.x * 10.0, 0.0), 0.0),
        }
    }

    fn set_shift(&mut self, e: Edge, up: Option<VertexId>, down: Option<VertexId>, dirs: Point) {
        let mut from = self.center(e.from, dirs);
        let mut to = self.center(e.to, -dirs);

        let (c_up, r_up) = self.obstacle(e, up, dirs);
        let (c_down, r_down) = self.obstacle(e, down, -dirs);

        let can_inter_up = sign(c_up.x - from.x) != sign(c_up.x - to.x);
        let can_inter_down = sign(c_down.x - from.x) != sign(c_down.x - to.x);
        if !can_inter_up && !can_inter_down {
            return;
        }

        let max_s = self.max_shift(e.from);
        let max_t = self.max_shift(e.to);
        let mut s = self.shift(e.from, dirs);
        let mut t = self.shift(e.to, -dirs);

        loop {
            let mut moved = false;
            if can_inter_up && s <= max_s && line_point_dist(from, to, c_up) <= r_up + MIN_SEP {
                s += SHIFT_STEP;
                from = self.pos(e.from) + Point::new(0.0, dirs.y * s);
                moved = true;
            }
            if can_inter_down && t <= max_t && line_point_dist(to, from, c_down) <= r_down + MIN_SEP
            {
                t += SHIFT_STEP;
                to = self.pos(e.to) + Point::new(0.0, -dirs.y * t);
                moved = true;
            }
            if !moved {
                break;
            }
        }

        let s = s.min(max_s);
        let t = t.min(max_t);

        let qf = quadrant(dirs);
        let qt = quadrant(-dirs);
        self.shifts[e.from][qf] = self.shifts[e.from][qf].max(s);
        self.shifts[e.to][qt] = self.shifts[e.to][qt].max(t);
    }

    /// Keeps edges leaving to the right of a looped vertex clear of the loop's anchor.
    fn check_loop(&mut self, e: Edge) {
        let dirs = self.dirs(e);
        let q = quadrant(dirs);
        if !self.has_loop[e.from] || q == 2 || q == 3 {
            return;
        }

        let from = self.center(e.from, dirs);
        let to = self.center(e.to, -dirs);
        let center = self.pos(e.from);
        let size = self.nodes[e.from].size;
        let Some(intersection) = line_circle_intersection(from, to, center, size) else {
            return;
        };

        let limit = self.attrs.loop_angle - LOOP_ANGLE_SEP;
        if angle(center, intersection) > limit {
            let p = self.angle_point(limit, e.from, dirs);
            if let Some(s) = loop_shift(center, p, to, size) {
                self.shifts[e.from][q] = s;
            }
        }
    }

    fn angle_point(&self, angle: f64, u: VertexId, dirs: Point) -> Point {
        let size = self.nodes[u].size;
        let (sin, cos) = angle.to_radians().sin_cos();
        self.pos(u) + Point::new(dirs.x * size * sin, dirs.y * size * cos)
    }

    fn unify_dummy_shifts(&mut self) {
        let (g, h) = (self.g, self.h);
        for (l, layer) in h.layers.iter().enumerate() {
            let mut start = 0;
            for (i, &u) in layer.iter().enumerate() {
                if !g.is_dummy(u) {
                    self.set_sequence_shifts(l, start, i);
                    start = i + 1;
                }
            }
            self.set_sequence_shifts(l, start, layer.len());
        }
    }

    /// Gives the run of dummy vertices `layer[start..end]` the largest shift of the run.
    fn set_sequence_shifts(&mut self, l: usize, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let h = self.h;
        let layer = &h.layers[l];

        let mut s = [0.0f64; 4];
        for &u in &layer[start..end] {
            for (q, value) in s.iter_mut().enumerate() {
                *value = value.max(self.shifts[u][q]);
            }
        }
        for &u in &layer[start..end] {
            self.shifts[u] = s;
        }

        self.fix_regular_ends(layer[start], layer[end - 1]);
    }

    /// Re-evaluates the edges of the real vertices bordering a run of dummy vertices.
    fn fix_regular_ends(&mut self, first: VertexId, last: VertexId) {
        let g = self.g;
        for u in [self.h.prev(first), self.h.next(last)].into_iter().flatten() {
            let neighbors: Vec<VertexId> = g.neighbors(u).collect();
            for v in neighbors {
                self.set_regular_shifts(Edge::new(u, v));
            }
        }
    }

    /// Closest real vertex on the layer of `u` in direction `d`.
    fn next_non_dummy(&self, u: VertexId, d: isize) -> Option<VertexId> {
        let layer = self.h.layer(u);
        let mut i = self.h.pos[u] as isize + d;
        while i >= 0 && (i as usize) < layer.len() {
            let v = layer[i as usize];
            if !self.g.is_dummy(v) {
                return Some(v);
            }
            i += d;
        }
        None
    }

    fn next_vertex(&self, u: VertexId, d: isize) -> Option<VertexId> {
        if d < 0 {
            self.h.prev(u)
        } else {
            self.h.next(u)
        }
    }

    fn make_paths(&self, fs: &FeedbackSet) -> Vec<Path> {
        let g = self.g;
        let mut paths = Vec::new();
        for &u in g.vertices() {
            if g.is_dummy(u) {
                continue;
            }
            for &v in g.out_neighbors(u) {
                paths.push(self.make_path(fs, u, v));
            }
        }
        for &u in &fs.loops {
            paths.push(self.make_loop_square(u));
        }
        paths
    }

    fn make_path(&self, fs: &FeedbackSet, mut u: VertexId, mut v: VertexId) -> Path {
        let orig = Edge::new(u, v);
        let mut points = vec![self.port(u, self.pos(v) - self.pos(u))];

        while self.g.is_dummy(v) {
            let pv = self.pos(v);
            let s = self.shift(v, self.dirs(Edge::new(v, u)));
            if s > 0.0 {
                points.push(pv + Point::new(0.0, -s));
            }
            points.push(pv);

            let Some(&n) = self.g.out_neighbors(v).first() else {
                break;
            };
            let s = self.shift(v, self.dirs(Edge::new(v, n)));
            if s > 0.0 {
                points.push(pv + Point::new(0.0, s));
            }
            u = v;
            v = n;
        }

        points.push(self.port(v, self.pos(u) - self.pos(v)));

        let mut path = Path {
            from: orig.from,
            to: v,
            points,
            bidirectional: false,
        };
        if fs.reversed.contains(orig) {
            path.reverse();
        } else if fs.removed.contains(orig) {
            path.bidirectional = true;
        }
        path
    }

    fn make_loop_square(&self, u: VertexId) -> Path {
        let p0 = self.angle_point(self.attrs.loop_angle, u, Point::new(1.0, -1.0));
        let p3 = self.angle_point(self.attrs.loop_angle, u, Point::new(1.0, 1.0));
        let x = self.pos(u).x + self.nodes[u].size + self.attrs.loop_size / 2.0;

        Path {
            from: u,
            to: u,
            points: vec![p0, Point::new(x, p0.y), Point::new(x, p3.y), p3],
            bidirectional: false,
        }
    }

    /// Where an edge leaving `u` in direction `dir` meets the boundary of `u`, taking the port
    /// shift into account.
    fn port(&self, u: VertexId, dir: Point) -> Point {
        let dirs = dir.signum();
        let s = self.shift(u, dirs);
        let center = self.center(u, dirs);
        if s == self.nodes[u].size {
            return center;
        }
        line_circle_intersection(center, center + dir, self.pos(u), self.nodes[u].size)
            .unwrap_or(center)
    }
}

/// Shift that makes the line through `anchor` and `to` pass the vertical through `center`
/// at the port, clamped to `[0, size]`. `None` when the line is vertical.
fn loop_shift(center: Point, anchor: Point, to: Point, size: f64) -> Option<f64> {
    let dx = anchor.x - to.x;
    if dx == 0.0 {
        return None;
    }
    let t = (center.x - anchor.x) / dx;
    let s = (center.y - (anchor.y + t * (anchor.y - to.y))).abs();
    s.is_finite().then(|| s.clamp(0.0, size))
}

/// Angle in degrees between the vertical and the segment `from -> to`.
fn angle(from: Point, to: Point) -> f64 {
    let d = to - from;
    (d.x.abs() / d.y.abs()).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_shift_meets_the_vertex_axis() {
        // Line through (10, -5) and (20, -10) crosses x = 0 at y = 0.
        let s = loop_shift(
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
            Point::new(20.0, -10.0),
            15.0,
        );
        assert_eq!(s, Some(0.0));

        let s = loop_shift(
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 15.0),
            15.0,
        );
        assert_eq!(s, Some(5.0));
    }

    #[test]
    fn loop_shift_is_clamped_to_the_radius() {
        let s = loop_shift(
            Point::new(0.0, 0.0),
            Point::new(10.0, 30.0),
            Point::new(20.0, 40.0),
            15.0,
        );
        assert_eq!(s, Some(15.0));
    }

    #[test]
    fn vertical_line_gives_no_loop_shift() {
        let s = loop_shift(
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(10.0, 40.0),
            15.0,
        );
        assert_eq!(s, None);
    }
}
