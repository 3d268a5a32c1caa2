// Application state module
// Manages runtime state and the reloadable configuration cache

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};

use super::types::{Config, DynamicConfig};

/// Application state shared across all connections
pub struct AppState {
    pub config: Config,
    pub dynamic_config: RwLock<DynamicConfig>,
    /// Notified by the signal task when SIGHUP requests a config reload
    pub reload_signal: Arc<Notify>,

    // Cached config value for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let dynamic = config.to_dynamic();
        let cached_access_log = Arc::new(AtomicBool::new(dynamic.logging.access_log));

        Self {
            config: config.clone(),
            dynamic_config: RwLock::new(dynamic),
            reload_signal: Arc::new(Notify::new()),
            cached_access_log,
        }
    }

    /// Swap in a freshly loaded configuration.
    ///
    /// Only the dynamic subset (release target, logging) takes effect;
    /// listener address and worker count require a process restart.
    pub async fn apply_reload(&self, new_config: &Config) {
        let dynamic = new_config.to_dynamic();
        self.cached_access_log
            .store(dynamic.logging.access_log, Ordering::Relaxed);
        let mut guard = self.dynamic_config.write().await;
        *guard = dynamic;
    }
}
