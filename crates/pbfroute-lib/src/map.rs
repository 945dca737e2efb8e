//! Road maps: geographic nodes joined by ways.
//!
//! A road map is ingested from JSON of the form
//!
//! ```json
//! {
//!   "nodes": [ { "id": 101, "lat": 52.1, "lon": 4.3 } ],
//!   "ways":  [ { "id": 7, "nodes": [101, 102, 103] } ]
//! }
//! ```
//!
//! Each pair of consecutive way nodes becomes two directed edges weighted by
//! their great-circle distance in kilometres. External node ids are mapped to
//! dense [`NodeId`]s in node order.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::{haversine_km, Coordinate};
use crate::graph::{build_graph, Edge, EdgeSpec, Graph, NodeId};
use crate::result::PathResult;
use crate::search::{SearchEngine, SearchOptions};

/// External identifier of a map node (e.g. an OpenStreetMap node id).
pub type MapNodeId = i64;

/// Positioned node within a road map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: MapNodeId,
    pub lat: f64,
    pub lon: f64,
}

impl MapNode {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Ordered chain of node references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub id: i64,
    pub nodes: Vec<MapNodeId>,
}

/// Serialized form of a road map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMapDocument {
    #[serde(default)]
    pub nodes: Vec<MapNode>,
    #[serde(default)]
    pub ways: Vec<Way>,
}

/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn contains(&self, node: &MapNode) -> bool {
        (self.min_lat..=self.max_lat).contains(&node.lat)
            && (self.min_lon..=self.max_lon).contains(&node.lon)
    }

    /// Whether both ranges are ordered (`min <= max`).
    pub fn is_valid(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lon <= self.max_lon
    }

    /// Midpoint of both ranges.
    pub fn centre(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    fn around(node: &MapNode) -> Self {
        Self {
            min_lat: node.lat,
            max_lat: node.lat,
            min_lon: node.lon,
            max_lon: node.lon,
        }
    }

    fn extend(mut self, node: &MapNode) -> Self {
        self.min_lat = self.min_lat.min(node.lat);
        self.max_lat = self.max_lat.max(node.lat);
        self.min_lon = self.min_lon.min(node.lon);
        self.max_lon = self.max_lon.max(node.lon);
        self
    }
}

/// Polyline of a way as `[lat, lon]` pairs, for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WayGeometry {
    pub id: i64,
    pub coords: Vec<[f64; 2]>,
}

/// Neighbour of a map node along with the connecting edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapNeighbour {
    pub id: MapNodeId,
    pub distance: f64,
}

/// Road map with its routing graph.
#[derive(Debug, Clone)]
pub struct RoadMap {
    nodes: Vec<MapNode>,
    index: HashMap<MapNodeId, NodeId>,
    ways: Vec<Way>,
    graph: Graph,
}

impl RoadMap {
    /// Build a road map from parsed nodes and ways.
    ///
    /// Way references to unknown nodes are skipped, which splits the way at
    /// that point. Duplicate node ids are rejected.
    pub fn from_document(document: RoadMapDocument) -> Result<Self> {
        let RoadMapDocument { nodes, ways } = document;

        let mut index = HashMap::with_capacity(nodes.len());
        for (dense, node) in nodes.iter().enumerate() {
            if index.insert(node.id, dense).is_some() {
                return Err(Error::InvalidDocument {
                    message: format!("duplicate node id {}", node.id),
                });
            }
        }

        let mut edges = Vec::new();
        for way in &ways {
            for pair in way.nodes.windows(2) {
                let (Some(&from), Some(&to)) = (index.get(&pair[0]), index.get(&pair[1])) else {
                    continue;
                };
                let distance = haversine_km(nodes[from].coordinate(), nodes[to].coordinate());
                edges.push(EdgeSpec::new(from, to, distance));
                edges.push(EdgeSpec::new(to, from, distance));
            }
        }

        let graph = build_graph(nodes.len(), edges)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            ways = ways.len(),
            "road map graph ready"
        );

        Ok(Self {
            nodes,
            index,
            ways,
            graph,
        })
    }

    /// Parse and build a road map from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: RoadMapDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// Smallest rectangle holding every node, or `None` for an empty map.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.nodes.split_first()?;
        Some(rest.iter().fold(Bounds::around(first), Bounds::extend))
    }

    /// Coordinates of the first `limit` ways.
    ///
    /// Unknown node references are dropped from each polyline, and ways left
    /// with fewer than two points are omitted.
    pub fn way_geometries(&self, limit: usize) -> Vec<WayGeometry> {
        self.ways
            .iter()
            .take(limit)
            .map(|way| WayGeometry {
                id: way.id,
                coords: way
                    .nodes
                    .iter()
                    .filter_map(|&id| self.node_by_id(id))
                    .map(|node| [node.lat, node.lon])
                    .collect(),
            })
            .filter(|geometry| geometry.coords.len() >= 2)
            .collect()
    }

    /// Resolve an external id to the dense graph identifier.
    pub fn node_id(&self, id: MapNodeId) -> Option<NodeId> {
        self.index.get(&id).copied()
    }

    /// Node stored at a dense graph identifier.
    pub fn node(&self, node: NodeId) -> Option<&MapNode> {
        self.nodes.get(node)
    }

    /// Node with the given external id.
    pub fn node_by_id(&self, id: MapNodeId) -> Option<&MapNode> {
        self.node_id(id).and_then(|node| self.node(node))
    }

    /// Translate a dense identifier back to its external id.
    pub fn external_id(&self, node: NodeId) -> Option<MapNodeId> {
        self.node(node).map(|node| node.id)
    }

    /// Outgoing neighbours of an external id, in edge insertion order.
    pub fn neighbours(&self, id: MapNodeId) -> Result<Vec<MapNeighbour>> {
        let node = self.require(id)?;
        Ok(self
            .graph
            .neighbours(node)
            .iter()
            .map(|&Edge { target, weight }| MapNeighbour {
                id: self.nodes[target].id,
                distance: weight,
            })
            .collect())
    }

    /// Nodes within `bounds`, in document order, capped at `limit`.
    pub fn nodes_within(&self, bounds: &Bounds, limit: usize) -> Vec<&MapNode> {
        self.nodes
            .iter()
            .filter(|node| bounds.contains(node))
            .take(limit)
            .collect()
    }

    /// Route between two external node ids.
    pub fn route(
        &self,
        from: MapNodeId,
        to: MapNodeId,
        options: &SearchOptions,
    ) -> Result<PathResult> {
        let source = self.require(from)?;
        let target = self.require(to)?;
        debug!(from, to, source, target, "routing over road map");
        SearchEngine::new(&self.graph).shortest_path(source, target, options)
    }

    fn require(&self, id: MapNodeId) -> Result<NodeId> {
        self.node_id(id).ok_or(Error::UnknownMapNode { id })
    }
}

/// Load a road map from a JSON file.
pub fn load_road_map(path: &Path) -> Result<RoadMap> {
    debug!(path = %path.display(), "loading road map");
    let file = File::open(path)?;
    RoadMap::from_reader(BufReader::new(file))
}
