// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, DynamicConfig, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    ReleaseConfig, ServerConfig,
};

/// Config file name without extension, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the default `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// Missing files are fine; defaults reproduce the production redirect
    /// target exactly. Environment variables prefixed `DEBRELAY` override.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEBRELAY"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default(
                "release.base_url",
                "https://github.com/denova234/novaide-packages/releases/download",
            )?
            .set_default("release.default_tag", "1.0")?
            .set_default("release.package_suffix", ".deb")?
            .set_default("release.download_path", "/download")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "debrelay/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn to_dynamic(&self) -> DynamicConfig {
        DynamicConfig {
            release: Arc::new(self.release.clone()),
            logging: self.logging.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_release_target() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(
            cfg.release.base_url,
            "https://github.com/denova234/novaide-packages/releases/download"
        );
        assert_eq!(cfg.release.default_tag, "1.0");
        assert_eq!(cfg.release.package_suffix, ".deb");
        assert_eq!(cfg.release.download_path, "/download");
        assert!(cfg.release.health.enabled);
    }

    #[test]
    fn defaults_bind_localhost() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.socket_addr().is_ok());
    }

    #[test]
    fn release_config_default_matches_loaded_defaults() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.release, ReleaseConfig::default());
    }
}
