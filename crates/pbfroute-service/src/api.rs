//! HTTP endpoints over the loaded road map.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use pbfroute_lib::{MapNeighbour, MapNode, MapNodeId, RouteSummary, WayGeometry};

use crate::{
    health_live, health_ready, ApiError, AppState, ListQuery, MapStats, ProblemDetails,
    RouteRequest, SearchNodesRequest, Validate,
};

/// Neighbours listed by the node endpoint.
const NEIGHBOUR_PREVIEW: usize = 10;

const DEFAULT_WAY_LIMIT: usize = 1000;
const DEFAULT_NODE_LIMIT: usize = 500;

type ApiResult<T> = Result<Json<T>, ProblemDetails>;

/// Build the service router around shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/route", post(route_handler))
        .route("/api/v1/map-info", get(map_info_handler))
        .route("/api/v1/ways", get(ways_handler))
        .route("/api/v1/nodes", get(nodes_handler))
        .route("/api/v1/nodes/search", post(search_nodes_handler))
        .route("/api/v1/nodes/{id}", get(node_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ExploredCoordinate {
    #[serde(flatten)]
    node: MapNode,
    distance: f64,
    iteration: usize,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    #[serde(flatten)]
    summary: RouteSummary,
    path_coords: Vec<MapNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explored_coords: Option<Vec<ExploredCoordinate>>,
}

#[derive(Debug, Serialize)]
struct MapInfoResponse {
    #[serde(flatten)]
    stats: MapStats,
    loaded: bool,
}

#[derive(Debug, Serialize)]
struct NodeResponse {
    #[serde(flatten)]
    node: MapNode,
    neighbour_count: usize,
    neighbours: Vec<MapNeighbour>,
}

#[derive(Debug, Serialize)]
struct NodeListResponse {
    count: usize,
    nodes: Vec<MapNode>,
}

#[derive(Debug, Serialize)]
struct WayListResponse {
    count: usize,
    ways: Vec<WayGeometry>,
}

/// `POST /api/v1/route`
async fn route_handler(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> ApiResult<RouteResponse> {
    let request_id = generate_request_id();
    info!(
        request_id = %request_id,
        from = request.from,
        to = request.to,
        trace = request.wants_trace(),
        "handling route request"
    );

    request
        .validate()
        .map_err(|e| e.into_problem(&request_id))?;

    let map = state.map();
    let options = state.search_options(request.wants_trace(), request.max_explored);
    let result = map.route(request.from, request.to, &options).map_err(|e| {
        warn!(request_id = %request_id, error = %e, "route search failed");
        ApiError::from(e).into_problem(&request_id)
    })?;

    if !result.is_reachable() {
        info!(request_id = %request_id, iterations = result.iterations(), "target unreachable");
        return Err(ApiError::RouteNotFound {
            from: request.from,
            to: request.to,
        }
        .into_problem(&request_id));
    }

    let path_coords = result
        .path()
        .iter()
        .filter_map(|&node| map.node(node).copied())
        .collect();

    let explored_coords = result.explored().map(|entries| {
        entries
            .iter()
            .enumerate()
            .filter_map(|(iteration, entry)| {
                map.node(entry.node).map(|&node| ExploredCoordinate {
                    node,
                    distance: entry.distance,
                    iteration,
                })
            })
            .collect()
    });

    let summary = RouteSummary::from_map_result(map, &result);
    info!(
        request_id = %request_id,
        hops = summary.hops,
        iterations = summary.iterations,
        "route computed"
    );

    Ok(Json(RouteResponse {
        summary,
        path_coords,
        explored_coords,
    }))
}

/// `GET /api/v1/map-info`
async fn map_info_handler(State(state): State<AppState>) -> Json<MapInfoResponse> {
    let stats = state.stats();
    Json(MapInfoResponse {
        loaded: stats.nodes > 0,
        stats,
    })
}

/// `GET /api/v1/ways?limit=N`
async fn ways_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<WayListResponse> {
    let request_id = generate_request_id();
    let limit = query
        .limit_or(DEFAULT_WAY_LIMIT)
        .map_err(|e| e.into_problem(&request_id))?;
    info!(request_id = %request_id, limit, "listing ways");

    let ways = state.map().way_geometries(limit);
    Ok(Json(WayListResponse {
        count: ways.len(),
        ways,
    }))
}

/// `GET /api/v1/nodes?limit=N`
async fn nodes_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<NodeListResponse> {
    let request_id = generate_request_id();
    let limit = query
        .limit_or(DEFAULT_NODE_LIMIT)
        .map_err(|e| e.into_problem(&request_id))?;
    info!(request_id = %request_id, limit, "listing nodes");

    let nodes: Vec<MapNode> = state.map().nodes().iter().take(limit).copied().collect();
    Ok(Json(NodeListResponse {
        count: nodes.len(),
        nodes,
    }))
}

/// `GET /api/v1/nodes/{id}`
async fn node_handler(
    State(state): State<AppState>,
    Path(id): Path<MapNodeId>,
) -> ApiResult<NodeResponse> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, id, "handling node request");

    let map = state.map();
    let node = *map
        .node_by_id(id)
        .ok_or_else(|| ApiError::UnknownNode(id).into_problem(&request_id))?;
    let neighbours = map
        .neighbours(id)
        .map_err(|e| ApiError::from(e).into_problem(&request_id))?;

    Ok(Json(NodeResponse {
        node,
        neighbour_count: neighbours.len(),
        neighbours: neighbours.into_iter().take(NEIGHBOUR_PREVIEW).collect(),
    }))
}

/// `POST /api/v1/nodes/search`
async fn search_nodes_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchNodesRequest>,
) -> ApiResult<NodeListResponse> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, limit = request.limit, "handling node search request");

    request
        .validate()
        .map_err(|e| e.into_problem(&request_id))?;

    let nodes: Vec<MapNode> = state
        .map()
        .nodes_within(&request.bounds, request.limit)
        .into_iter()
        .copied()
        .collect();
    Ok(Json(NodeListResponse {
        count: nodes.len(),
        nodes,
    }))
}

/// Request id for log correlation and problem `instance` fields.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    format!("req-{:x}", timestamp)
}
