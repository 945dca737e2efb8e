use std::fmt::Write;

use serde::Serialize;

use crate::map::RoadMap;
use crate::result::PathResult;

/// Structured representation of a search result that consumers can serialise.
///
/// Node identifiers are external ids: dense graph ids for plain graphs, map ids
/// for road maps. JSON has no infinity, so an unreachable target is reported as
/// `"reachable": false` with a `null` distance.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub reachable: bool,
    pub distance: Option<f64>,
    pub iterations: usize,
    pub hops: usize,
    pub path: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<Vec<i64>>,
    pub explored_truncated: bool,
}

impl RouteSummary {
    /// Summarise a result over a plain graph.
    pub fn from_result(result: &PathResult) -> Self {
        Self::with_ids(result, |node| Some(node as i64))
    }

    /// Summarise a road-map result using the map's external node ids.
    pub fn from_map_result(map: &RoadMap, result: &PathResult) -> Self {
        Self::with_ids(result, |node| map.external_id(node))
    }

    fn with_ids(result: &PathResult, resolve: impl Fn(usize) -> Option<i64>) -> Self {
        let path = result.path().iter().filter_map(|&node| resolve(node)).collect();
        let explored = result.explored().map(|entries| {
            entries
                .iter()
                .filter_map(|entry| resolve(entry.node))
                .collect()
        });

        Self {
            reachable: result.is_reachable(),
            distance: result.is_reachable().then(|| result.distance()),
            iterations: result.iterations(),
            hops: result.hop_count(),
            path,
            explored,
            explored_truncated: result.explored_truncated(),
        }
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.reachable {
            let hops: Vec<String> = self.path.iter().map(i64::to_string).collect();
            let _ = writeln!(out, "Route: {}", hops.join(" -> "));
            let _ = writeln!(out, "Distance: {:.6}", self.distance.unwrap_or(f64::INFINITY));
            let _ = writeln!(out, "Hops: {}", self.hops);
        } else {
            let _ = writeln!(out, "No route found");
            let _ = writeln!(out, "Distance: inf");
        }
        let _ = writeln!(out, "Iterations: {}", self.iterations);

        if let Some(explored) = &self.explored {
            let suffix = if self.explored_truncated {
                " (truncated)"
            } else {
                ""
            };
            let _ = writeln!(out, "Explored: {} nodes{}", explored.len(), suffix);
        }
        out
    }

    /// Render the summary as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
