//! Application state shared by axum handlers.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use pbfroute_lib::{load_road_map, Bounds, Coordinate, Error as LibError, RoadMap, SearchOptions};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Map file not found.
    MapNotFound(String),

    /// Failed to read or build the road map.
    MapLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MapNotFound(path) => write!(f, "road map not found: {}", path),
            Self::MapLoad(e) => write!(f, "failed to load road map: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapLoad(e) => Some(e),
            Self::MapNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::MapLoad(err)
    }
}

/// Extent of the loaded map with its centre point, for initial map views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapExtent {
    #[serde(flatten)]
    pub bounds: Bounds,
    pub centre: Coordinate,
}

/// Size and extent of the loaded map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapStats {
    pub nodes: usize,
    pub edges: usize,
    pub ways: usize,
    pub bounds: Option<MapExtent>,
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; the road map and its graph are shared, read-only, across
/// every in-flight request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    map: RoadMap,
    max_frontier: Option<usize>,
}

impl AppState {
    /// Load application state from a road map JSON file.
    pub fn load(map_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let map_path = map_path.as_ref();
        if !map_path.exists() {
            return Err(AppStateError::MapNotFound(map_path.display().to_string()));
        }

        tracing::info!(path = %map_path.display(), "loading road map");
        let map = load_road_map(map_path)?;
        Ok(Self::from_map(map))
    }

    /// Create application state from an already-built map.
    pub fn from_map(map: RoadMap) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                map,
                max_frontier: None,
            }),
        }
    }

    /// Impose a frontier ceiling on every search served by this state.
    pub fn with_max_frontier(self, limit: Option<usize>) -> Self {
        let map = match Arc::try_unwrap(self.inner) {
            Ok(inner) => inner.map,
            Err(shared) => shared.map.clone(),
        };
        Self {
            inner: Arc::new(AppStateInner {
                map,
                max_frontier: limit,
            }),
        }
    }

    pub fn map(&self) -> &RoadMap {
        &self.inner.map
    }

    pub fn stats(&self) -> MapStats {
        let map = &self.inner.map;
        MapStats {
            nodes: map.node_count(),
            edges: map.graph().edge_count(),
            ways: map.way_count(),
            bounds: map.bounds().map(|bounds| MapExtent {
                bounds,
                centre: bounds.centre(),
            }),
        }
    }

    /// Search options for a request, with the service-wide ceiling applied.
    pub fn search_options(&self, trace: bool, max_explored: Option<usize>) -> SearchOptions {
        SearchOptions {
            trace,
            max_explored,
            max_frontier: self.inner.max_frontier,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.inner.map.node_count())
            .field("max_frontier", &self.inner.max_frontier)
            .finish()
    }
}
