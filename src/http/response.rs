//! HTTP response building module
//!
//! Provides builders for the status codes the service emits, decoupled
//! from redirect business logic. HEAD requests get identical status and
//! headers with an empty body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 302 redirect response pointing at the release asset.
/// Carries no body, so GET and HEAD get the same bytes.
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response with a fixed plain-text message
pub fn build_400_response(message: &'static str, is_head: bool) -> Response<Full<Bytes>> {
    plain_text_response(400, message, is_head)
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    plain_text_response(404, "404 Not Found", is_head)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from("405 Method Not Allowed")
    };
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response(is_head: bool) -> Response<Full<Bytes>> {
    plain_text_response(413, "413 Payload Too Large", is_head)
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response
pub fn build_health_response(status_text: &'static str, is_head: bool) -> Response<Full<Bytes>> {
    plain_text_response(200, status_text, is_head)
}

/// Build a plain-text response with explicit Content-Length
fn plain_text_response(
    status: u16,
    message: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(message)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", message.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("plain-text", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_sets_location() {
        let resp = build_redirect_response("https://example.com/x.deb");
        assert_eq!(resp.status(), 302);
        assert_eq!(
            resp.headers().get("Location").and_then(|v| v.to_str().ok()),
            Some("https://example.com/x.deb")
        );
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_404_response(true);
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers()
                .get("Content-Length")
                .and_then(|v| v.to_str().ok()),
            Some("13")
        );
    }

    #[test]
    fn test_options_with_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert!(resp.headers().contains_key("Access-Control-Allow-Origin"));
    }
}
