//! Request handler module
//!
//! Responsible for request routing dispatch and page rendering.
//! Pages, the JSON API and static files all share the router's
//! method checks, security headers and access logging.

pub mod fetch;
pub mod pages;
pub mod router;
pub mod static_files;

use thiserror::Error;

// Re-export main entry point
pub use router::{handle_request, RequestContext};

/// Failure inside a route handler; rendered as the 500 page
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to build response: {0}")]
    Response(#[from] hyper::http::Error),

    /// The route task panicked or was cancelled
    #[error("Route task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for SiteError {
    fn from(err: tokio::task::JoinError) -> Self {
        if !err.is_panic() {
            return Self::Task(err.to_string());
        }
        let payload = err.into_panic();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_string());
        Self::Task(format!("panicked: {message}"))
    }
}
