//! API configuration.

use leaderboard_common::AppConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP-facing settings, derived from the `server` section of [`AppConfig`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// CORS allowed origins; empty or `*` allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Enable OpenAPI documentation
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

impl ApiConfig {
    /// Extract the HTTP settings from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            cors_allowed_origins: config.server.cors_allowed_origins.clone(),
            max_body_size: config.server.max_upload_bytes,
            request_timeout_seconds: config.server.request_timeout_seconds,
            enable_swagger: config.server.enable_swagger,
        }
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty() || self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_app_config() {
        let mut app = AppConfig::development();
        app.server.max_upload_bytes = 1024;
        app.server.cors_allowed_origins = vec!["https://example.org".to_string()];

        let config = ApiConfig::from_app_config(&app);

        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert_eq!(config.max_body_size, 1024);
        assert!(!config.allows_any_origin());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_allows_any_origin() {
        assert!(ApiConfig::default().allows_any_origin());
    }
}
