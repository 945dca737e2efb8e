//! Request bodies and query strings, with validation.

use serde::{Deserialize, Serialize};

use pbfroute_lib::{Bounds, MapNodeId};

use crate::ApiError;

/// Largest number of nodes a bounding-box search may return.
pub const MAX_SEARCH_LIMIT: usize = 1000;

/// Largest page the node and way listings serve.
pub const MAX_LIST_LIMIT: usize = 10_000;

/// Checks run on a request before it reaches the map.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Request for computing a route between two map nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from: MapNodeId,
    pub to: MapNodeId,

    /// Include the settle-ordered exploration trace in the response.
    #[serde(default)]
    pub trace: bool,

    /// Cap on the number of trace entries returned. Implies `trace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_explored: Option<usize>,
}

impl RouteRequest {
    pub fn wants_trace(&self) -> bool {
        self.trace || self.max_explored.is_some()
    }
}

impl Validate for RouteRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.max_explored == Some(0) {
            return Err(ApiError::InvalidRequest(
                "The 'max_explored' field must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

/// Request for nodes inside a latitude/longitude rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchNodesRequest {
    #[serde(flatten)]
    pub bounds: Bounds,

    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    100
}

impl Validate for SearchNodesRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if !self.bounds.is_valid() {
            return Err(ApiError::InvalidRequest(
                "Bounds must satisfy min_lat <= max_lat and min_lon <= max_lon".into(),
            ));
        }
        check_limit(self.limit, MAX_SEARCH_LIMIT)
    }
}

/// `?limit=` query for the node and way listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

impl ListQuery {
    /// The requested limit, or `default` when absent.
    pub fn limit_or(&self, default: usize) -> Result<usize, ApiError> {
        let limit = self.limit.unwrap_or(default);
        check_limit(limit, MAX_LIST_LIMIT)?;
        Ok(limit)
    }
}

fn check_limit(limit: usize, max: usize) -> Result<(), ApiError> {
    if limit == 0 || limit > max {
        return Err(ApiError::InvalidRequest(format!(
            "The 'limit' field must be between 1 and {}",
            max
        )));
    }
    Ok(())
}
