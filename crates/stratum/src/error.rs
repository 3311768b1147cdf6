use crate::graph::VertexId;
use std::fmt;

/// Pipeline stage that detected a broken invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CycleRemoval,
    Layering,
    Normalization,
    Ordering,
    Positioning,
    Routing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::CycleRemoval => "cycle removal",
            Stage::Layering => "layering",
            Stage::Normalization => "normalization",
            Stage::Ordering => "crossing reduction",
            Stage::Positioning => "positioning",
            Stage::Routing => "edge routing",
        })
    }
}

/// Internal invariant violations. Input problems (duplicate edges, foreign ids) are caller
/// errors and are not reported here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{stage}: vertex {vertex} is not stored at its recorded layer position")]
    LayerMismatch { stage: Stage, vertex: VertexId },

    #[error("normalization: edge ({from}, {to}) spans {span} layers, expected 1")]
    NotProper {
        from: VertexId,
        to: VertexId,
        span: i32,
    },

    #[error("{stage}: no convergence after {limit} iterations")]
    IterationLimit { stage: Stage, limit: usize },

    #[error("{stage}: {message}")]
    Invariant { stage: Stage, message: String },

    #[error("edge routing: feedback edge ({from}, {to}) is no longer in the graph")]
    FeedbackReplay { from: VertexId, to: VertexId },
}

impl Error {
    pub(crate) fn invariant(stage: Stage, message: impl Into<String>) -> Self {
        Self::Invariant {
            stage,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
