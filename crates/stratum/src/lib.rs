#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) graph layout.
//!
//! The pipeline runs per connected component:
//!
//! 1. [`acyclic`] reverses or removes edges until the component is acyclic,
//! 2. [`rank`] assigns layers with network simplex,
//! 3. [`normalize`] splits long edges with dummy vertices,
//! 4. [`order`] reorders layers to reduce crossings,
//! 5. [`position`] assigns coordinates and [`route`] draws the edges.
//!
//! [`layout`] drives the stages and places components side by side.

pub use stratum_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod error;
pub mod geom;
pub mod hierarchy;
pub mod model;
pub mod normalize;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod route;

pub use error::{Error, Result, Stage};
pub use hierarchy::Hierarchy;
pub use model::{
    Attributes, BoundingBox, Layout, LayoutStats, Limits, Node, OrderingOptions, Path, Point,
    Positioning, Ranker,
};
pub use pipeline::layout;
