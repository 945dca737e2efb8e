//! Route command handlers for graph documents and road maps.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pbfroute_lib::{
    load_graph, load_road_map, MapNodeId, NodeId, RouteSummary, SearchEngine, SearchOptions,
};

use pbfroute_cli::output::{render_route, OutputFormat};

/// Search flags shared by both route subcommands.
#[derive(Debug, Clone, Copy)]
pub struct TraceArgs {
    pub trace: bool,
    pub max_explored: Option<usize>,
}

impl TraceArgs {
    fn to_options(self) -> SearchOptions {
        SearchOptions {
            trace: self.trace,
            max_explored: self.max_explored,
            max_frontier: None,
        }
    }
}

/// Handle `route`: search a graph document by dense node id.
pub fn handle_route_command(
    graph_path: &Path,
    from: NodeId,
    to: NodeId,
    trace: TraceArgs,
    format: OutputFormat,
) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let result = SearchEngine::new(&graph)
        .shortest_path(from, to, &trace.to_options())
        .with_context(|| format!("failed to route from {} to {}", from, to))?;

    let summary = RouteSummary::from_result(&result);
    print!("{}", render_route(&summary, format)?);
    Ok(())
}

/// Handle `map-route`: search a road map by external node id.
pub fn handle_map_route_command(
    map_path: &Path,
    from: MapNodeId,
    to: MapNodeId,
    trace: TraceArgs,
    format: OutputFormat,
) -> Result<()> {
    let map = load_road_map(map_path)
        .with_context(|| format!("failed to load road map from {}", map_path.display()))?;

    let result = map
        .route(from, to, &trace.to_options())
        .with_context(|| format!("failed to route from {} to {}", from, to))?;

    let summary = RouteSummary::from_map_result(&map, &result);
    print!("{}", render_route(&summary, format)?);
    Ok(())
}
