//! Road map shortest-path HTTP microservice.
//!
//! # Endpoints
//!
//! - `POST /api/v1/route` - Compute a route between two map nodes
//! - `GET /api/v1/map-info` - Node, edge and way counts with map bounds
//! - `GET /api/v1/ways?limit=N` - Way polylines for drawing
//! - `GET /api/v1/nodes?limit=N` - Node listing
//! - `GET /api/v1/nodes/{id}` - A node and its neighbours
//! - `POST /api/v1/nodes/search` - Nodes inside a bounding box
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `PBFROUTE_MAP_PATH` - Road map JSON (default: /data/map.json)
//! - `PBFROUTE_MAX_FRONTIER` - Optional frontier ceiling per search
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `SERVICE_NAME` - Name stamped on log output (default: pbfroute-service)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use pbfroute_service::{init_logging, router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env();
    init_logging(&config)?;

    info!(
        map_path = %config.map_path.display(),
        port = config.port,
        max_frontier = ?config.max_frontier,
        "starting route service"
    );

    let state = AppState::load(&config.map_path)
        .map_err(|e| {
            error!(error = %e, path = %config.map_path.display(), "failed to load application state");
            e
        })?
        .with_max_frontier(config.max_frontier);

    let stats = state.stats();
    info!(
        nodes = stats.nodes,
        edges = stats.edges,
        ways = stats.ways,
        "application state loaded"
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
