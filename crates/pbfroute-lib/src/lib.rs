//! pbfroute library entry points.
//!
//! This crate builds immutable weighted graphs, runs single-source,
//! single-target Dijkstra searches over them, and provides the helpers
//! surrounding the engine: JSON graph and road-map ingestion, great-circle
//! edge weights, and result summaries. Higher-level consumers (CLI, HTTP
//! service) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!
//! ```
//! use pbfroute_lib::{build_graph, shortest_path};
//!
//! let graph = build_graph(3, [(0, 1, 1.5), (1, 2, 1.0), (0, 2, 4.0)])?;
//! let result = shortest_path(&graph, 0, 2, false)?;
//! assert_eq!(result.path(), &[0, 1, 2]);
//! assert_eq!(result.distance(), 2.5);
//! # Ok::<(), pbfroute_lib::Error>(())
//! ```

#![deny(warnings)]

pub mod document;
pub mod error;
pub mod frontier;
pub mod geo;
pub mod graph;
pub mod map;
pub mod output;
pub mod result;
pub mod search;

pub use document::{load_graph, load_graph_document, GraphDocument};
pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierEntry};
pub use geo::{haversine_km, Coordinate};
pub use graph::{build_graph, Edge, EdgeSpec, Graph, NodeId};
pub use map::{
    load_road_map, Bounds, MapNeighbour, MapNode, MapNodeId, RoadMap, Way, WayGeometry,
};
pub use output::RouteSummary;
pub use result::{ExploredNode, PathResult};
pub use search::{shortest_path, SearchEngine, SearchOptions};
