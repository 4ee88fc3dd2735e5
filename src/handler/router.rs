//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, dispatching and the headers every response carries.

use crate::api;
use crate::config::AppState;
use crate::handler::{pages, static_files, SiteError};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body so it can be driven by hyper connections
/// and directly from tests. Request bodies are never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let start = Instant::now();
    let (req, _) = req.into_parts();
    let is_head = req.method == Method::HEAD;

    let mut response = match check_http_method(&req.method) {
        Some(resp) => resp,
        None => match check_body_size(&req, state.config.http.max_body_size) {
            Some(resp) => resp,
            None => route_isolated(&req, &state, is_head).await,
        },
    };

    http::apply_common_headers(
        &mut response,
        &state.config.http.server_name,
        state.config.security.prefers_https(),
    );
    if is_head {
        response = http::strip_body(response);
    }

    if state.access_log_enabled() {
        log_access(&req, &response, peer, start, &state);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(req: &Parts, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers.get("content-length")?;
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
                Some(http::build_413_response())
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

/// Run `route_request` on its own task
///
/// A panic anywhere below the router (a catalog provider, a template)
/// becomes the 500 page instead of a dropped connection.
async fn route_isolated(
    req: &Parts,
    state: &Arc<AppState>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let path = req.uri.path().to_string();
    let if_none_match = header_value(req, "if-none-match");
    let task_state = Arc::clone(state);
    let task_path = path.clone();

    let routed = tokio::spawn(async move {
        let ctx = RequestContext {
            path: &task_path,
            is_head,
            if_none_match,
        };
        route_request(&ctx, &task_state).await
    })
    .await;

    match routed {
        Ok(response) => response,
        Err(e) => {
            let error = SiteError::from(e);
            logger::log_error(&format!("Error handling {path}: {error}"));
            pages::server_error(state, &error).await
        }
    }
}

/// Route request to the page, API or static handler for its path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let static_dir = state.config.http.static_dir.as_str();

    let result: Result<Response<Full<Bytes>>, SiteError> = match ctx.path {
        "/" => pages::index(state).await,
        "/about" => pages::about(state).await,
        "/collection" => pages::collection(state).await,
        "/technology" => pages::technology(state).await,
        "/contact" => pages::contact(state).await,
        "/api/collection-stats" => Ok(api::collection_stats(state).await),
        "/api/insights" => Ok(api::insights(state).await),
        "/health" => Ok(api::health(state)),
        "/favicon.ico" => {
            or_not_found(static_files::serve_favicon(ctx, static_dir).await, state).await
        }
        "/robots.txt" => {
            or_not_found(static_files::serve_robots(ctx, static_dir).await, state).await
        }
        path if path.starts_with(static_files::STATIC_PREFIX) => {
            or_not_found(static_files::serve_directory(ctx, static_dir).await, state).await
        }
        _ => pages::not_found(state).await,
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            logger::log_error(&format!("Error handling {}: {e}", ctx.path));
            pages::server_error(state, &e).await
        }
    }
}

async fn or_not_found(
    response: Option<Response<Full<Bytes>>>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, SiteError> {
    match response {
        Some(response) => Ok(response),
        None => pages::not_found(state).await,
    }
}

fn log_access(
    req: &Parts,
    response: &Response<Full<Bytes>>,
    peer: Option<SocketAddr>,
    start: Instant,
    state: &AppState,
) {
    let remote_addr = peer.map_or_else(|| "-".to_string(), |addr| addr.ip().to_string());
    let mut entry = AccessLogEntry::new(
        remote_addr,
        req.method.to_string(),
        req.uri.path().to_string(),
    );
    entry.query = req.uri.query().map(ToString::to_string);
    entry.http_version = version_label(req.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header_value(req, "referer");
    entry.user_agent = header_value(req, "user-agent");
    entry.request_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn header_value(req: &Parts, name: &str) -> Option<String> {
    req.headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_http_method() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());
        assert_eq!(
            check_http_method(&Method::OPTIONS).unwrap().status(),
            hyper::StatusCode::NO_CONTENT
        );
        assert_eq!(
            check_http_method(&Method::DELETE).unwrap().status(),
            hyper::StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_check_body_size() {
        let req = |len: &str| {
            Request::builder()
                .header("content-length", len)
                .body(())
                .unwrap()
                .into_parts()
                .0
        };
        assert!(check_body_size(&req("10"), 100).is_none());
        assert!(check_body_size(&req("not-a-number"), 100).is_none());
        assert_eq!(
            check_body_size(&req("101"), 100).unwrap().status(),
            hyper::StatusCode::PAYLOAD_TOO_LARGE
        );
        assert!(check_body_size(&Request::new(()).into_parts().0, 100).is_none());
    }
}
