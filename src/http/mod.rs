//! HTTP protocol layer module
//!
//! Query parsing and response building, decoupled from redirect business
//! logic so the handler stays a pure mapping from parameters to outcome.

pub mod query;
pub mod response;

// Re-export commonly used functions
pub use query::parse_query;
pub use response::{
    build_400_response, build_404_response, build_405_response, build_413_response,
    build_health_response, build_options_response, build_redirect_response,
};
