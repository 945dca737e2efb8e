use thiserror::Error;

use crate::graph::NodeId;
use crate::map::MapNodeId;

/// Convenient result alias for the pbfroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised while building a graph when an edge endpoint is not a valid node.
    #[error("edge #{index} references node {node}, but the graph only has {node_count} nodes")]
    EdgeOutOfRange {
        index: usize,
        node: NodeId,
        node_count: usize,
    },

    /// Raised when a search source or target is not a valid node.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    /// Raised when a search would grow the frontier beyond the caller's ceiling.
    #[error("search frontier exceeded the configured limit of {limit} entries")]
    FrontierLimitExceeded { limit: usize },

    /// Raised when the adjacency or search arrays for `node_count` nodes cannot
    /// be allocated.
    #[error("cannot allocate storage for a graph with {node_count} nodes")]
    CapacityExceeded { node_count: usize },

    /// Raised when an external road-map node id is not present in the map.
    #[error("unknown map node: {id}")]
    UnknownMapNode { id: MapNodeId },

    /// Raised when an ingested document is structurally valid JSON but unusable.
    #[error("invalid graph document: {message}")]
    InvalidDocument { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error reports a caller-supplied argument outside the graph.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EdgeOutOfRange { .. } | Error::InvalidNode { .. } | Error::UnknownMapNode { .. }
        )
    }
}
