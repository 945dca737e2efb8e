use crate::graph::NodeId;

/// A single settle event recorded in the exploration trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExploredNode {
    pub node: NodeId,
    /// Distance from the source at the moment the node was settled.
    pub distance: f64,
}

/// Immutable outcome of one shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    path: Vec<NodeId>,
    distance: f64,
    iterations: usize,
    explored: Option<Vec<ExploredNode>>,
    explored_truncated: bool,
}

impl PathResult {
    pub(crate) fn new(
        path: Vec<NodeId>,
        distance: f64,
        iterations: usize,
        explored: Option<Vec<ExploredNode>>,
        explored_truncated: bool,
    ) -> Self {
        Self {
            path,
            distance,
            iterations,
            explored,
            explored_truncated,
        }
    }

    /// Nodes from source to target, or empty when the target is unreachable.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Total path cost; `f64::INFINITY` when the target is unreachable.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of settle events performed by the search.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Settle-ordered trace, or `None` when tracing was not requested.
    ///
    /// `Some(&[])` means tracing was on but nothing was settled.
    pub fn explored(&self) -> Option<&[ExploredNode]> {
        self.explored.as_deref()
    }

    /// Whether the trace stopped recording because it reached its cap.
    pub fn explored_truncated(&self) -> bool {
        self.explored_truncated
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
