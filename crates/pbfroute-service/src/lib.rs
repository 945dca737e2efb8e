//! HTTP glue for the pbfroute shortest-path engine.
//!
//! [`router`] serves route, node, way and map endpoints over an [`AppState`]
//! loaded once at startup. Failures are RFC 9457 problem documents built from
//! [`ApiError`]. Handlers stay thin: parse, validate, call `pbfroute-lib`,
//! shape the JSON.

#![deny(warnings)]

mod api;
pub mod config;
mod health;
pub mod logging;
mod problem;
mod request;
mod state;

pub use api::router;
pub use config::{LogFormat, ServiceConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::init_logging;
pub use problem::{ApiError, ProblemDetails};
pub use request::{ListQuery, RouteRequest, SearchNodesRequest, Validate};
pub use state::{AppState, AppStateError, MapExtent, MapStats};
