//! Environment-driven service configuration.
//!
//! - `PBFROUTE_MAP_PATH`: road map JSON to load (default `/data/map.json`)
//! - `SERVICE_PORT`: HTTP port (default 8080)
//! - `PBFROUTE_MAX_FRONTIER`: optional per-search frontier ceiling
//! - `SERVICE_NAME`: name stamped on log output (default `pbfroute-service`)
//! - `LOG_FORMAT`: `json` (default) or `text`/`pretty`
//! - `RUST_LOG`: log filter (default `info`)

use std::path::PathBuf;

/// Default location of the road map inside the container image.
pub const DEFAULT_MAP_PATH: &str = "/data/map.json";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    /// Unrecognised names fall back to JSON.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Self::Text,
            _ => Self::Json,
        }
    }
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub map_path: PathBuf,
    pub port: u16,
    pub max_frontier: Option<usize>,
    pub service_name: String,
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            port: DEFAULT_PORT,
            max_frontier: None,
            service_name: env!("CARGO_PKG_NAME").to_string(),
            log_format: LogFormat::Json,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            map_path: lookup("PBFROUTE_MAP_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.map_path),
            port: lookup("SERVICE_PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            max_frontier: lookup("PBFROUTE_MAX_FRONTIER").and_then(|value| value.parse().ok()),
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_format: lookup("LOG_FORMAT")
                .map(|value| LogFormat::parse(&value))
                .unwrap_or(defaults.log_format),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
