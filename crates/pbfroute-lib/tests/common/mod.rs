#![allow(dead_code)]

use std::path::PathBuf;

use pbfroute_lib::{build_graph, Graph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Four-node graph where the cheap route detours through node 1.
pub fn detour_graph() -> Graph {
    build_graph(4, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0), (2, 3, 1.0)]).expect("valid graph")
}
