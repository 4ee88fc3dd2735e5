//! Static file serving module
//!
//! Handles static file loading, MIME type detection, and response building.
//! Every loader returns `None` when the file is missing so the router can
//! render the 404 page.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, CachePolicy};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const FAVICON_PATH: &str = "images/favicon.ico";
const ROBOTS_PATH: &str = "robots.txt";

/// URL prefix mapped onto the static directory
pub const STATIC_PREFIX: &str = "/static/";

/// Serve `/favicon.ico`
pub async fn serve_favicon(
    ctx: &RequestContext<'_>,
    static_dir: &str,
) -> Option<Response<Full<Bytes>>> {
    let data = fs::read(Path::new(static_dir).join(FAVICON_PATH)).await.ok()?;
    Some(build_static_file_response(data, mime::ICON, ctx))
}

/// Serve `/robots.txt`
pub async fn serve_robots(
    ctx: &RequestContext<'_>,
    static_dir: &str,
) -> Option<Response<Full<Bytes>>> {
    let data = fs::read(Path::new(static_dir).join(ROBOTS_PATH)).await.ok()?;
    Some(build_static_file_response(data, mime::TEXT_PLAIN, ctx))
}

/// Serve files below `/static/` from the static directory
pub async fn serve_directory(
    ctx: &RequestContext<'_>,
    static_dir: &str,
) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) = load_from_directory(static_dir, ctx.path).await?;
    Some(build_static_file_response(content, content_type, ctx))
}

/// Load a file below `static_dir` for a `/static/...` request path
///
/// Paths resolving outside `static_dir` are refused.
pub async fn load_from_directory(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative_path = path
        .strip_prefix(STATIC_PREFIX)?
        .replace("..", "")
        .trim_start_matches('/')
        .to_string();
    if relative_path.is_empty() {
        return None;
    }

    let file_path = Path::new(static_dir).join(&relative_path);

    // Security: ensure file_path is within static_dir
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build static file response with `ETag` support
fn build_static_file_response(
    data: Vec<u8>,
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&data);
    let policy = CachePolicy::default();

    // Check if client has cached version
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag, policy);
    }

    http::build_file_response(Bytes::from(data), content_type, &etag, policy).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build static file response: {e}"));
        http::build_500_response()
    })
}
