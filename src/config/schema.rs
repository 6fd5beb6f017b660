//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the API.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Access-control settings.
    pub security: SecurityConfig,

    /// Application metadata served by the info endpoint.
    pub app: AppInfoConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Access-control configuration.
///
/// `public_paths` is an ordered allow-list evaluated top-down; the first
/// matching pattern wins. Anything that matches no pattern requires
/// authentication. The deny fallback is not configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Path patterns admitted without credentials, in evaluation order.
    /// A pattern is either an exact path or a `/**` prefix wildcard.
    pub public_paths: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            public_paths: vec![
                // Operational health namespace stays open for probes.
                "/actuator/**".to_string(),
                "/api/v1/ping".to_string(),
                // /api/v1/info is deliberately absent: it stays behind the
                // gate until credential validation is wired in.
            ],
        }
    }
}

/// Metadata returned by the info endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: "Plataforma de Cursos".to_string(),
            version: "1.0.0".to_string(),
            description: "Plataforma privada de cursos offline".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(
            config.security.public_paths,
            vec!["/actuator/**", "/api/v1/ping"]
        );
        assert_eq!(config.app.name, "Plataforma de Cursos");
    }

    #[test]
    fn partial_config_overrides_one_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9090"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9090");
        // Untouched sections keep their defaults.
        assert_eq!(config.app.version, "1.0.0");
    }
}
