//! Single-source, single-target Dijkstra search.
//!
//! Each call allocates its own distance, predecessor and settled arrays plus a
//! private [`Frontier`]; nothing is shared between calls except the read-only
//! [`Graph`]. The loop stops as soon as the target is settled.

use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierEntry};
use crate::graph::{try_filled, Graph, NodeId};
use crate::result::{ExploredNode, PathResult};

/// Per-search tunables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Record the order in which nodes are settled.
    pub trace: bool,
    /// Stop recording the trace after this many entries. Truncation is reported
    /// through [`PathResult::explored_truncated`].
    pub max_explored: Option<usize>,
    /// Fail with [`Error::FrontierLimitExceeded`] instead of growing the frontier
    /// beyond this many entries.
    pub max_frontier: Option<usize>,
}

impl SearchOptions {
    /// Options with tracing enabled and no caps.
    pub fn traced() -> Self {
        Self {
            trace: true,
            ..Self::default()
        }
    }

    pub fn with_max_explored(mut self, limit: usize) -> Self {
        self.max_explored = Some(limit);
        self
    }

    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = Some(limit);
        self
    }
}

/// Shortest-path engine bound to one graph.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'g> {
    graph: &'g Graph,
}

impl<'g> SearchEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Find the least-cost path from `source` to `target`.
    ///
    /// Out-of-range endpoints are rejected before any search state is allocated.
    /// An unreachable target is not an error: the result has an empty path and an
    /// infinite distance. When `source == target` the result is `[source]` at
    /// distance zero with no settle events.
    pub fn shortest_path(
        &self,
        source: NodeId,
        target: NodeId,
        options: &SearchOptions,
    ) -> Result<PathResult> {
        let node_count = self.graph.node_count();
        for node in [source, target] {
            if node >= node_count {
                return Err(Error::InvalidNode { node, node_count });
            }
        }

        if source == target {
            let explored = options.trace.then(Vec::new);
            return Ok(PathResult::new(vec![source], 0.0, 0, explored, false));
        }

        let mut state = SearchState::new(node_count, source)?;
        let mut trace = Trace::new(options);
        let mut frontier = Frontier::new();
        push_bounded(&mut frontier, options, source, 0.0)?;

        let mut iterations = 0;
        let mut found = false;

        while let Some(FrontierEntry { node, distance }) = frontier.pop_min() {
            if state.settled[node] {
                continue;
            }
            state.settled[node] = true;
            iterations += 1;
            trace.record(node, distance);

            if node == target {
                found = true;
                break;
            }

            for edge in self.graph.neighbours(node) {
                let candidate = distance + edge.weight;
                if candidate < state.distances[edge.target] {
                    state.distances[edge.target] = candidate;
                    state.predecessors[edge.target] = Some(node);
                    push_bounded(&mut frontier, options, edge.target, candidate)?;
                }
            }
        }

        let (explored, truncated) = trace.finish();
        if !found {
            return Ok(PathResult::new(
                Vec::new(),
                f64::INFINITY,
                iterations,
                explored,
                truncated,
            ));
        }

        Ok(PathResult::new(
            state.reconstruct_path(source, target),
            state.distances[target],
            iterations,
            explored,
            truncated,
        ))
    }
}

/// Find the least-cost path from `source` to `target` in `graph`.
///
/// Convenience wrapper over [`SearchEngine::shortest_path`] with an uncapped trace.
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    trace: bool,
) -> Result<PathResult> {
    let options = SearchOptions {
        trace,
        ..SearchOptions::default()
    };
    SearchEngine::new(graph).shortest_path(source, target, &options)
}

fn push_bounded(
    frontier: &mut Frontier,
    options: &SearchOptions,
    node: NodeId,
    distance: f64,
) -> Result<()> {
    if let Some(limit) = options.max_frontier {
        if frontier.len() >= limit {
            return Err(Error::FrontierLimitExceeded { limit });
        }
    }
    frontier.push(node, distance);
    Ok(())
}

struct SearchState {
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
    settled: Vec<bool>,
}

impl SearchState {
    fn new(node_count: usize, source: NodeId) -> Result<Self> {
        let capacity_exceeded = || Error::CapacityExceeded { node_count };
        let mut distances = try_filled(node_count, f64::INFINITY).ok_or_else(capacity_exceeded)?;
        distances[source] = 0.0;
        Ok(Self {
            distances,
            predecessors: try_filled(node_count, None).ok_or_else(capacity_exceeded)?,
            settled: try_filled(node_count, false).ok_or_else(capacity_exceeded)?,
        })
    }

    fn reconstruct_path(&self, source: NodeId, target: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(node) = current {
            path.push(node);
            if node == source {
                break;
            }
            current = self.predecessors[node];
        }
        path.reverse();
        path
    }
}

struct Trace {
    entries: Option<Vec<ExploredNode>>,
    limit: Option<usize>,
    truncated: bool,
}

impl Trace {
    fn new(options: &SearchOptions) -> Self {
        Self {
            entries: options.trace.then(Vec::new),
            limit: options.max_explored,
            truncated: false,
        }
    }

    fn record(&mut self, node: NodeId, distance: f64) {
        let Some(entries) = self.entries.as_mut() else {
            return;
        };
        if self.limit.is_some_and(|limit| entries.len() >= limit) {
            self.truncated = true;
            return;
        }
        entries.push(ExploredNode { node, distance });
    }

    fn finish(self) -> (Option<Vec<ExploredNode>>, bool) {
        (self.entries, self.truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn trace_cap_marks_truncation() {
        let graph = build_graph(4, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).expect("graph");
        let options = SearchOptions::traced().with_max_explored(2);
        let result = SearchEngine::new(&graph)
            .shortest_path(0, 3, &options)
            .expect("search");

        let explored: Vec<_> = result
            .explored()
            .expect("trace present")
            .iter()
            .map(|entry| entry.node)
            .collect();
        assert_eq!(explored, vec![0, 1]);
        assert!(result.explored_truncated());
        assert_eq!(result.iterations(), 4);
    }

    #[test]
    fn trace_at_exact_cap_is_not_truncated() {
        let graph = build_graph(2, [(0, 1, 1.0)]).expect("graph");
        let options = SearchOptions::traced().with_max_explored(2);
        let result = SearchEngine::new(&graph)
            .shortest_path(0, 1, &options)
            .expect("search");

        assert_eq!(result.explored().map(<[_]>::len), Some(2));
        assert!(!result.explored_truncated());
    }

    #[test]
    fn frontier_limit_is_reported_as_error() {
        let graph = build_graph(4, [(0, 1, 1.0), (0, 2, 1.0), (0, 3, 5.0)]).expect("graph");
        let options = SearchOptions::default().with_max_frontier(2);
        let err = SearchEngine::new(&graph)
            .shortest_path(0, 3, &options)
            .expect_err("frontier limit should trip");

        assert!(matches!(err, Error::FrontierLimitExceeded { limit: 2 }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn reconstruct_stops_at_source() {
        let mut state = SearchState::new(3, 0).expect("small state");
        state.predecessors[1] = Some(0);
        state.predecessors[2] = Some(1);
        assert_eq!(state.reconstruct_path(0, 2), vec![0, 1, 2]);
    }
}
