//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching and access logging.

use crate::config::AppState;
use crate::handler::redirect::{self, RedirectOutcome};
use crate::http::{self, query};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let is_head = method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);

    // 1. Method gate
    let response = if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        resp
    // 2. Body size gate
    } else if let Some(resp) = check_body_size(&req, state.config.http.max_body_size, is_head) {
        resp
    } else {
        // 3. Log headers if enabled
        let show_headers = state.dynamic_config.read().await.logging.show_headers;
        logger::log_headers_count(req.headers().len(), show_headers);

        // 4. Dispatch on path
        dispatch(&uri, is_head, &state).await
    };

    if access_log {
        let format = {
            let config = state.dynamic_config.read().await;
            config.logging.access_log_format.clone()
        };
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = http_version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &format);
    }

    Ok(response)
}

/// Route request based on path and the current release configuration
async fn dispatch(
    uri: &hyper::Uri,
    is_head: bool,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let release = {
        let config = state.dynamic_config.read().await;
        Arc::clone(&config.release)
    };
    let path = uri.path();

    // 1. Health check endpoints (always fast)
    if release.health.enabled
        && (path == release.health.liveness_path || path == release.health.readiness_path)
    {
        return http::build_health_response("ok", is_head);
    }

    // 2. Release redirect endpoint
    if path == release.download_path {
        let params = query::parse_query(uri.query());
        return match redirect::resolve(&params, &release) {
            RedirectOutcome::Found { location } => http::build_redirect_response(&location),
            RedirectOutcome::InvalidPackage => {
                http::build_400_response(redirect::INVALID_PACKAGE_BODY, is_head)
            }
        };
    }

    // 3. Everything else
    http::build_404_response(is_head)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response(false))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
    is_head: bool,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response(is_head))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Access log label for the HTTP version
fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
