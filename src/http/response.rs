//! HTTP response building module
//!
//! Provides builders for the status codes the site emits, decoupled from
//! page and API logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Response, StatusCode};

use super::cache::CachePolicy;
use super::mime;

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, policy: CachePolicy) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .header("Cache-Control", policy.to_header_value())
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", mime::TEXT_PLAIN)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::PAYLOAD_TOO_LARGE)
        .header("Content-Type", mime::TEXT_PLAIN)
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build plain-text 500 response, used when the error page cannot render
pub fn build_500_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from("500 Internal Server Error")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert("content-type", HeaderValue::from_static(mime::TEXT_PLAIN));
    response
}

/// Build rendered HTML page response
pub fn build_html_response(
    status: StatusCode,
    content: String,
) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
    let content_length = content.len();
    Response::builder()
        .status(status)
        .header("Content-Type", mime::HTML)
        .header("Content-Length", content_length)
        .header("Cache-Control", CachePolicy::NoCache.to_header_value())
        .body(Full::new(Bytes::from(content)))
}

/// Build file response with `ETag` and cache control
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    policy: CachePolicy,
) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", policy.to_header_value())
        .body(Full::new(data))
}

/// Add headers carried by every response
pub fn apply_common_headers(
    response: &mut Response<Full<Bytes>>,
    server_name: &str,
    strict_transport: bool,
) {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(server_name) {
        headers.insert(hyper::header::SERVER, value);
    }
    headers.insert(
        hyper::header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        hyper::header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );
    if strict_transport {
        headers.insert(
            HeaderName::from_static("strict-transport-security"),
            HeaderValue::from_static("max-age=63072000; includeSubDomains"),
        );
    }
}

/// Drop the body for HEAD requests, keeping status and headers
pub fn strip_body(response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_common_headers() {
        let mut response = build_405_response();
        apply_common_headers(&mut response, "avatararts-site/1.0", false);
        let headers = response.headers();
        assert_eq!(headers["server"], "avatararts-site/1.0");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert!(!headers.contains_key("strict-transport-security"));

        apply_common_headers(&mut response, "avatararts-site/1.0", true);
        assert!(response.headers().contains_key("strict-transport-security"));
    }

    #[tokio::test]
    async fn test_strip_body_keeps_headers() {
        let response = build_html_response(StatusCode::OK, "<p>hi</p>".to_string()).unwrap();
        let stripped = strip_body(response);
        assert_eq!(stripped.status(), StatusCode::OK);
        assert_eq!(stripped.headers()["content-length"], "9");
        let body = stripped.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
