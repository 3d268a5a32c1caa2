// Server module entry point
// Listener setup, connection handling, signals and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// loop is a keyword, the file keeps the short name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::run_server_loop;
pub use signal::{start_signal_handler, SignalHandler};
