// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub release: ReleaseConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Subset of the configuration that can be swapped at runtime via SIGHUP
#[derive(Debug, Clone)]
pub struct DynamicConfig {
    pub release: Arc<ReleaseConfig>,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where redirected downloads live and how requests reach the handler
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Base URL of the release download tree, without a trailing slash.
    /// Redirect targets are `{base_url}/{tag}/{package}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Tag used when the request omits one or sends an empty value
    #[serde(default = "default_tag")]
    pub default_tag: String,
    /// Required package filename suffix (case-sensitive)
    #[serde(default = "default_package_suffix")]
    pub package_suffix: String,
    /// Request path served by the redirect handler
    #[serde(default = "default_download_path")]
    pub download_path: String,
    /// Health check configuration
    #[serde(default)]
    pub health: HealthConfig,
}

#[allow(clippy::missing_const_for_fn)]
fn default_base_url() -> String {
    "https://github.com/denova234/novaide-packages/releases/download".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_tag() -> String {
    "1.0".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_package_suffix() -> String {
    ".deb".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_download_path() -> String {
    "/download".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_tag: default_tag(),
            package_suffix: default_package_suffix(),
            download_path: default_download_path(),
            health: HealthConfig::default(),
        }
    }
}

/// Health check configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HealthConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}
