use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Outgoing edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Directed, weighted edge used as input when building a [`Graph`].
///
/// Weights are expected to be finite and non-negative. They are not checked;
/// searches over other weights return unspecified (but memory-safe) results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl From<(NodeId, NodeId, f64)> for EdgeSpec {
    fn from((from, to, weight): (NodeId, NodeId, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// Immutable adjacency structure used by the search engine.
///
/// Edges live in one flat array grouped by source node; `offsets[n]..offsets[n + 1]`
/// is the slice of node `n`. Cloning is cheap and clones share storage, so a single
/// graph can back any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

#[derive(Debug)]
struct GraphInner {
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.inner.offsets.len() - 1
    }

    /// Total number of directed edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.inner.edges.len()
    }

    /// Whether `node` is a valid identifier for this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Return the outgoing edges for `node` in the order they were added.
    ///
    /// Unknown nodes have no neighbours.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        match self.edge_range(node) {
            Some(range) => &self.inner.edges[range],
            None => &[],
        }
    }

    /// Number of outgoing edges for `node`.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.edge_range(node).map_or(0, |range| range.len())
    }

    fn edge_range(&self, node: NodeId) -> Option<Range<usize>> {
        let start = *self.inner.offsets.get(node)?;
        let end = *self.inner.offsets.get(node + 1)?;
        Some(start..end)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            inner: Arc::new(GraphInner {
                offsets: vec![0],
                edges: Vec::new(),
            }),
        }
    }
}

/// Build a graph with `node_count` nodes from a list of directed edges.
///
/// Every endpoint is validated before any adjacency storage is allocated, so a
/// failed build leaves nothing behind. Parallel edges are kept as-is.
pub fn build_graph<I, E>(node_count: usize, edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec>,
{
    let specs: Vec<EdgeSpec> = edges.into_iter().map(Into::into).collect();

    for (index, spec) in specs.iter().enumerate() {
        for node in [spec.from, spec.to] {
            if node >= node_count {
                return Err(Error::EdgeOutOfRange {
                    index,
                    node,
                    node_count,
                });
            }
        }
    }

    let capacity_exceeded = || Error::CapacityExceeded { node_count };

    // Counting sort by source node keeps each node's edges in input order.
    let mut offsets = node_count
        .checked_add(1)
        .and_then(|len| try_filled(len, 0usize))
        .ok_or_else(capacity_exceeded)?;
    for spec in &specs {
        offsets[spec.from + 1] += 1;
    }
    for node in 0..node_count {
        offsets[node + 1] += offsets[node];
    }

    let mut cursor = offsets.clone();
    let mut slots: Vec<Option<Edge>> =
        try_filled(specs.len(), None).ok_or_else(capacity_exceeded)?;
    for spec in &specs {
        let slot = &mut cursor[spec.from];
        slots[*slot] = Some(Edge {
            target: spec.to,
            weight: spec.weight,
        });
        *slot += 1;
    }

    Ok(Graph {
        inner: Arc::new(GraphInner {
            offsets,
            edges: slots.into_iter().flatten().collect(),
        }),
    })
}

/// Allocate `len` copies of `value`, or `None` if the allocation cannot be made.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut items = Vec::new();
    items.try_reserve_exact(len).ok()?;
    items.resize(len, value);
    Some(items)
}
