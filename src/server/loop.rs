// Server loop module
// Accept loop with config reload and graceful shutdown branches

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::{AppState, Config};
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// Three branches:
/// - incoming connections are handed to the connection module,
/// - a reload signal re-reads the config file and swaps the dynamic
///   subset (the listener keeps its address; address changes need a
///   process restart),
/// - a shutdown signal stops accepting and returns. In-flight
///   connections finish in their own tasks.
pub async fn run_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = state.reload_signal.notified() => {
                logger::log_reload_triggered();
                reload_config(&state).await;
            }

            _ = signals.shutdown.notified() => {
                logger::log_shutdown(active_connections.load(Ordering::SeqCst));
                return Ok(());
            }
        }
    }
}

/// Re-read the config file and apply the dynamic subset.
///
/// A failed load keeps the current configuration; the server never
/// degrades because a reload was attempted with a broken file.
async fn reload_config(state: &Arc<AppState>) {
    match Config::load() {
        Ok(new_config) => {
            if let Err(e) = logger::reconfigure(&new_config) {
                logger::log_error(&format!("Failed to retarget log files: {e}"));
            }
            if new_config.socket_addr().ok() != state.config.socket_addr().ok() {
                logger::log_warning(
                    "Listener address changed in config; restart the process to apply it",
                );
            }
            state.apply_reload(&new_config).await;
            logger::log_reload_applied();
        }
        Err(e) => {
            logger::log_error(&format!(
                "Config reload failed, keeping current configuration: {e}"
            ));
        }
    }
}
