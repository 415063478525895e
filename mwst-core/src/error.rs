//! Error types for the MST core library.

use thiserror::Error;

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested an MST for a graph with no nodes.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a node id outside `[1, node_count]`.
    #[error("edge {label} references node {node}, but node ids must lie in [1, {node_count}]")]
    InvalidNodeId {
        /// The out-of-range node id referenced by the edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
        /// Input label of the offending edge.
        label: usize,
    },
    /// An edge carried a non-finite weight.
    #[error("edge {label} ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// Input label of the offending edge.
        label: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::InvalidNodeId { .. } => MstErrorCode::InvalidNodeId,
            Self::NonFiniteWeight { .. } => MstErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The caller requested an MST for a graph with no nodes.
    EmptyGraph,
    /// An edge referenced a node id outside the graph.
    InvalidNodeId,
    /// An edge carried a non-finite weight.
    NonFiniteWeight,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::InvalidNodeId => "INVALID_NODE_ID",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
