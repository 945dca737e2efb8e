//! JSON graph documents.
//!
//! A graph document carries an explicit node count and a flat list of directed
//! edges:
//!
//! ```json
//! { "node_count": 3, "edges": [ { "from": 0, "to": 1, "weight": 2.5 } ] }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{build_graph, EdgeSpec, Graph};

/// Deserialized graph document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub node_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Parse a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the routing graph described by this document.
    pub fn build(&self) -> Result<Graph> {
        build_graph(self.node_count, self.edges.iter().copied())
    }
}

/// Load a graph document from disk.
pub fn load_graph_document(path: &Path) -> Result<GraphDocument> {
    let file = File::open(path)?;
    let document = GraphDocument::from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        nodes = document.node_count,
        edges = document.edges.len(),
        "loaded graph document"
    );
    Ok(document)
}

/// Load a graph document from disk and build its graph.
pub fn load_graph(path: &Path) -> Result<Graph> {
    load_graph_document(path)?.build()
}
