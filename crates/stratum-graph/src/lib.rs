#![forbid(unsafe_code)]

//! Graph container APIs used by `stratum`.
//!
//! Vertices are dense `usize` ids handed out by [`Graph::add_vertex`]; every per-vertex
//! attribute elsewhere in the workspace is a flat vector indexed by that id.

mod graph;

pub use graph::alg;
pub use graph::builder::GraphBuilder;
pub use graph::edge::{Edge, EdgeSet};
pub use graph::subgraph::Subgraph;
pub use graph::vertex_map::VertexMap;
pub use graph::{Graph, VertexId};
