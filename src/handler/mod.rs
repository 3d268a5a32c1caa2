//! Request handler module
//!
//! Redirect resolution plus the routing layer that hosts it. The resolver
//! is a pure function; the router adapts it to hyper's request/response
//! types.

pub mod redirect;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
