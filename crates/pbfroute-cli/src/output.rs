//! Output formatting for route and graph reports.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use pbfroute_lib::RouteSummary;

/// Rendering style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Single-line JSON document.
    Json,
}

/// Counts reported by the `info` subcommand.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ways: Option<usize>,
}

impl GraphInfo {
    fn render_text(&self) -> String {
        let mut out = format!("Nodes: {}\nEdges: {}\n", self.nodes, self.edges);
        if let Some(ways) = self.ways {
            out.push_str(&format!("Ways: {}\n", ways));
        }
        out
    }
}

/// Render a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render_text()),
        OutputFormat::Json => Ok(format!("{}\n", summary.to_json()?)),
    }
}

/// Render graph counts in the requested format.
pub fn render_info(info: &GraphInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.render_text()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(info)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_text_omits_ways_for_plain_graphs() {
        let info = GraphInfo {
            nodes: 4,
            edges: 3,
            ways: None,
        };
        let text = render_info(&info, OutputFormat::Text).expect("renders");
        assert_eq!(text, "Nodes: 4\nEdges: 3\n");
    }

    #[test]
    fn info_json_includes_ways_for_maps() {
        let info = GraphInfo {
            nodes: 6,
            edges: 10,
            ways: Some(3),
        };
        let json = render_info(&info, OutputFormat::Json).expect("renders");
        assert_eq!(json, "{\"nodes\":6,\"edges\":10,\"ways\":3}\n");
    }
}
