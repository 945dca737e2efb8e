//! Info command handler reporting graph sizes.

use std::path::Path;

use anyhow::{Context, Result};

use pbfroute_lib::{load_graph, load_road_map};

use pbfroute_cli::output::{render_info, GraphInfo, OutputFormat};

/// Input selected for the `info` command.
#[derive(Debug, Clone, Copy)]
pub enum InfoSource<'a> {
    Graph(&'a Path),
    Map(&'a Path),
}

/// Handle `info`: print node, edge and (for maps) way counts.
pub fn handle_info_command(source: InfoSource<'_>, format: OutputFormat) -> Result<()> {
    let info = match source {
        InfoSource::Graph(path) => {
            let graph = load_graph(path)
                .with_context(|| format!("failed to load graph from {}", path.display()))?;
            GraphInfo {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                ways: None,
            }
        }
        InfoSource::Map(path) => {
            let map = load_road_map(path)
                .with_context(|| format!("failed to load road map from {}", path.display()))?;
            GraphInfo {
                nodes: map.node_count(),
                edges: map.graph().edge_count(),
                ways: Some(map.way_count()),
            }
        }
    };

    print!("{}", render_info(&info, format)?);
    Ok(())
}
