// API module entry
// Read-only JSON endpoints over the catalog, plus the health check

mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::handler::fetch;
use crate::http::CachePolicy;

// Re-export public types
pub use response::*;
pub use types::HealthStatus;

/// `GET /api/collection-stats`
///
/// Serializes the collection summary; `{}` when the provider fails.
pub async fn collection_stats(state: &AppState) -> Response<Full<Bytes>> {
    let policy = CachePolicy::Public(state.config.cache.collection_stats_timeout);
    match fetch::collection(state).await {
        Some(summary) => json_response(StatusCode::OK, &summary, policy),
        None => empty_object(),
    }
}

/// `GET /api/insights`
///
/// Serializes the insights summary; `{}` when the provider fails.
pub async fn insights(state: &AppState) -> Response<Full<Bytes>> {
    let policy = CachePolicy::Public(state.config.cache.insights_timeout);
    match fetch::insights(state).await {
        Some(summary) => json_response(StatusCode::OK, &summary, policy),
        None => empty_object(),
    }
}

/// `GET /health`
pub fn health(state: &AppState) -> Response<Full<Bytes>> {
    let status = HealthStatus::healthy(&state.config);
    json_response(StatusCode::OK, &status, CachePolicy::NoCache)
}

// Degraded responses are never cached
fn empty_object() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({}), CachePolicy::NoCache)
}
