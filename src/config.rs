//! Configuration loading and constants.
//!
//! All configuration comes from the process environment. There are no config
//! files: the deployment platform injects `PORT` and the tracked secrets, and
//! this module turns them into an `AppConfig` plus a handful of constants used
//! across the router, the landing page and the startup banner.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// HTTP Listener
// =============================================================================

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on every interface so the orchestrator can reach the probe
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Diagnostic responses must never be cached by intermediaries
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Tracked Secrets
// =============================================================================

/// A secret whose presence is reported by `/secrets` and the startup banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedVar {
    /// Environment variable name
    pub name: &'static str,
    /// Number of leading characters revealed in the preview
    pub preview_len: usize,
}

/// Secrets checked on every request, in reporting order.
pub const TRACKED_VARS: [TrackedVar; 2] = [
    TrackedVar {
        name: "ATLAS_CONNECTION_STRING",
        preview_len: 20,
    },
    TrackedVar {
        name: "GITHUB_TOKEN",
        preview_len: 10,
    },
];

/// Suffix appended to every preview, whatever the value's length
pub const PREVIEW_SUFFIX: &str = "...";

/// Message reported for a tracked variable that is unset or empty
pub const NOT_SET_MESSAGE: &str = "Environment variable not set";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "envcheck=info,tower_http=info";

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

// =============================================================================
// Application Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpServerConfig {
    /// Socket address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// An empty `PORT` is treated the same as an unset one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            Some(raw) if !raw.trim().is_empty() => parse_port(&raw)?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            http: HttpServerConfig {
                host: DEFAULT_HOST,
                port,
            },
        })
    }
}

/// Parse a `PORT` value. Port 0 is rejected: the landing page must be able
/// to show the port clients actually connect to.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let port = raw
        .trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        })?;
    if port == 0 {
        return Err(ConfigError::ZeroPort);
    }
    Ok(port)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid PORT value \"0\": an explicit port is required")]
    ZeroPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_port_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.http.host, DEFAULT_HOST);
    }

    #[test]
    fn test_port_defaults_when_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "")])).unwrap();
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_port_from_env() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_surrounding_whitespace_is_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", " 9090\n")])).unwrap();
        assert_eq!(config.http.port, 9090);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("\"http\""));
    }

    #[test]
    fn test_port_rejects_out_of_range() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "-1")])).is_err());
    }

    #[test]
    fn test_port_rejects_zero() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPort));
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", " 00 ")])).is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Text);
    }

    #[test]
    fn test_tracked_vars_order() {
        let names: Vec<_> = TRACKED_VARS.iter().map(|v| v.name).collect();
        assert_eq!(names, ["ATLAS_CONNECTION_STRING", "GITHUB_TOKEN"]);
    }
}
