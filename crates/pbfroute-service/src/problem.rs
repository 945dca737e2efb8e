//! Failures returned by the HTTP API, rendered as RFC 9457 problem documents.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use pbfroute_lib::{Error as LibError, MapNodeId};

/// Every way a request can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The body or path failed validation.
    InvalidRequest(String),
    /// A node id is not part of the loaded map.
    UnknownNode(MapNodeId),
    /// Both ids exist but no road connects them.
    RouteNotFound { from: MapNodeId, to: MapNodeId },
    /// The search outgrew the configured frontier ceiling.
    SearchLimit(usize),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnknownNode(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::SearchLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Relative problem type URI.
    pub fn type_uri(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "/problems/invalid-request",
            Self::UnknownNode(_) => "/problems/unknown-node",
            Self::RouteNotFound { .. } => "/problems/route-not-found",
            Self::SearchLimit(_) => "/problems/search-limit-exceeded",
            Self::Internal(_) => "/problems/internal-error",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "Invalid Request",
            Self::UnknownNode(_) => "Unknown Node",
            Self::RouteNotFound { .. } => "Route Not Found",
            Self::SearchLimit(_) => "Search Limit Exceeded",
            Self::Internal(_) => "Internal Error",
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidRequest(detail) | Self::Internal(detail) => detail.clone(),
            Self::UnknownNode(id) => format!("Node {} is not part of the loaded map", id),
            Self::RouteNotFound { from, to } => {
                format!("No route exists from {} to {}", from, to)
            }
            Self::SearchLimit(limit) => format!(
                "The search frontier exceeded {} entries; try closer endpoints",
                limit
            ),
        }
    }

    /// Attach the request id and produce the response body.
    pub fn into_problem(self, request_id: &str) -> ProblemDetails {
        ProblemDetails {
            type_uri: self.type_uri().to_string(),
            title: self.title().to_string(),
            status: self.status().as_u16(),
            detail: self.detail(),
            instance: request_id.to_string(),
        }
    }
}

impl From<LibError> for ApiError {
    fn from(error: LibError) -> Self {
        match error {
            LibError::UnknownMapNode { id } => Self::UnknownNode(id),
            LibError::FrontierLimitExceeded { limit } => Self::SearchLimit(limit),
            LibError::InvalidNode { .. } | LibError::EdgeOutOfRange { .. } => {
                Self::InvalidRequest(error.to_string())
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Problem document body. `instance` carries the request id from the logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
