//! Liveness and readiness probes.
//!
//! Liveness only proves the process answers HTTP. Readiness reports what was
//! loaded and fails with 503 while the map has no nodes to route between.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{AppState, MapStats};

/// Body of both probes.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// "ok", or "empty" when no map nodes are loaded.
    pub status: &'static str,
    pub version: &'static str,
    #[serde(flatten)]
    pub map: Option<MapStats>,
}

impl HealthStatus {
    pub fn alive() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            map: None,
        }
    }

    /// Readiness derived from the loaded map.
    pub fn for_map(stats: MapStats) -> Self {
        Self {
            status: if stats.nodes == 0 { "empty" } else { "ok" },
            version: env!("CARGO_PKG_VERSION"),
            map: Some(stats),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.map.as_ref().is_some_and(|map| map.nodes > 0)
    }
}

/// `GET /health/live`
pub async fn health_live() -> Json<HealthStatus> {
    Json(HealthStatus::alive())
}

/// `GET /health/ready`
pub async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = HealthStatus::for_map(state.stats());
    let code = if status.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
