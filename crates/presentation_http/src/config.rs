//! Application configuration
//!
//! Serde defaults, then an optional `config.*` file, then `FORMOSA_*`
//! environment overrides.

use integration_cwa::CwaConfig;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream CWA client configuration
    #[serde(default)]
    pub upstream: CwaConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.*` file and
    /// `FORMOSA`-prefixed environment variables. `__` separates
    /// nesting levels so multi-word keys stay addressable, e.g.
    /// `FORMOSA_UPSTREAM__API_KEY`, `FORMOSA_SERVER__PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error when a source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("FORMOSA")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn app_config_default_has_no_api_key() {
        let config = AppConfig::default();
        assert!(config.upstream.api_key.is_none());
        assert_eq!(config.upstream.base_url, "https://opendata.cwa.gov.tw/api");
    }

    #[test]
    fn deserializes_from_empty_document() {
        let config: AppConfig = serde_json::from_str("{}").expect("deserializes");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn deserializes_partial_overrides() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 8080}, "upstream": {"api_key": "CWA-XXXX"}}"#,
        )
        .expect("deserializes");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.upstream.api_key.is_some());
    }
}
