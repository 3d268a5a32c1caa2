// Signal handling module (nginx-style)
//
// Supported signals:
// - SIGHUP:  Reload configuration
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
    /// Whether shutdown has been requested
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix).
///
/// SIGHUP notifies the reload signal so the server loop re-reads the
/// config file; SIGTERM and SIGINT request graceful shutdown.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>, reload_signal: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGHUP handler: {e}"));
                return;
            }
        };
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    crate::logger::log_warning("SIGHUP received, reloading configuration");
                    reload_signal.notify_one();
                }

                _ = sigterm.recv() => {
                    crate::logger::log_warning("SIGTERM received, initiating graceful shutdown");
                    handler.shutdown_requested.store(true, Ordering::SeqCst);
                    handler.shutdown.notify_waiters();
                    break;
                }

                _ = sigint.recv() => {
                    crate::logger::log_warning("SIGINT received, initiating graceful shutdown");
                    handler.shutdown_requested.store(true, Ordering::SeqCst);
                    handler.shutdown.notify_waiters();
                    break;
                }
            }
        }
    });
}

/// Windows fallback - only handles Ctrl+C, reload requires a restart
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>, _reload_signal: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_warning("Ctrl+C received, initiating graceful shutdown");
            handler.shutdown_requested.store(true, Ordering::SeqCst);
            handler.shutdown.notify_waiters();
        }
    });
}
