//! Layout configuration and output types.
//!
//! Everything here is plain data: `Clone`-friendly, serializable, and free of references into
//! the graph, so callers can keep a [`Layout`] after the graph is gone.

use crate::graph::VertexId;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).magnitude()
    }

    /// Component-wise sign, with `0.0` for zero components.
    pub fn signum(self) -> Point {
        Point::new(sign(self.x), sign(self.y))
    }
}

pub(crate) fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

/// Layer assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ranker {
    /// Network simplex over a tight spanning tree; minimizes total edge span.
    #[default]
    NetworkSimplex,
    /// Sources first, every vertex one layer below its lowest-ranked predecessor set.
    LongestPath,
}

/// Horizontal coordinate assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Positioning {
    /// Four-direction block alignment (Brandes & Köpf).
    #[default]
    BrandesKopf,
    /// Packs every layer from the left edge.
    Naive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderingOptions {
    /// Number of randomized restarts, at least one run is always made.
    pub restarts: usize,
    /// Consecutive non-improving sweeps tolerated before a restart ends.
    pub forgiveness: usize,
    pub transpose: bool,
    pub seed: u64,
}

impl Default for OrderingOptions {
    fn default() -> Self {
        Self {
            restarts: 1,
            forgiveness: 7,
            transpose: true,
            seed: 5489,
        }
    }
}

/// Caps on the convergence loops; exceeding one is reported as an internal error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    pub simplex_iterations: usize,
    pub sweeps: usize,
    pub transpose_passes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            simplex_iterations: 100_000,
            sweeps: 10_000,
            transpose_passes: 10_000,
        }
    }
}

/// Spacing parameters and stage options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attributes {
    /// Radius used for vertices whose size is not positive.
    pub default_node_size: f64,
    /// Minimum distance between the borders of two vertices on a layer.
    pub node_dist: f64,
    /// Minimum distance between the borders of vertices on adjacent layers.
    pub layer_dist: f64,
    /// Angle (degrees from vertical) where a self-loop attaches to its vertex.
    pub loop_angle: f64,
    /// How far a self-loop extends from its vertex.
    pub loop_size: f64,
    pub ranker: Ranker,
    pub positioning: Positioning,
    pub ordering: OrderingOptions,
    pub limits: Limits,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            default_node_size: 15.0,
            node_dist: 10.0,
            layer_dist: 30.0,
            loop_angle: 55.0,
            loop_size: 15.0,
            ranker: Ranker::default(),
            positioning: Positioning::default(),
            ordering: OrderingOptions::default(),
            limits: Limits::default(),
        }
    }
}

/// Size and center of a vertex's footprint; the center is relative to the upper left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub size: Point,
    pub center: Point,
}

impl BoundingBox {
    pub fn around(radius: f64) -> Self {
        Self {
            size: Point::new(2.0 * radius, 2.0 * radius),
            center: Point::new(radius, radius),
        }
    }

    /// Horizontal extent to the left of the center.
    pub fn left(&self) -> f64 {
        self.center.x
    }

    /// Horizontal extent to the right of the center.
    pub fn right(&self) -> f64 {
        self.size.x - self.center.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: VertexId,
    pub pos: Point,
    /// Radius.
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub from: VertexId,
    pub to: VertexId,
    pub points: Vec<Point>,
    pub bidirectional: bool,
}

impl Path {
    pub(crate) fn reverse(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.points.reverse();
    }
}

/// Counters collected while laying out, summed over all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub components: usize,
    pub dummy_vertices: usize,
    pub simplex_iterations: usize,
    pub initial_crossings: usize,
    pub final_crossings: usize,
    pub sweeps: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// One entry per vertex of the expanded graph, indexed by vertex id.
    pub nodes: Vec<Node>,
    pub paths: Vec<Path>,
    pub width: f64,
    pub height: f64,
    pub stats: LayoutStats,
}

impl Layout {
    pub fn dimensions(&self) -> Point {
        Point::new(self.width, self.height)
    }
}
