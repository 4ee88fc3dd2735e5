//! Catalog fetch helpers
//!
//! Provider failures are logged here and degraded to `None`, so callers
//! render with empty statistics instead of failing the request.

use crate::catalog::{CollectionSummary, InsightsSummary};
use crate::config::AppState;
use crate::logger;

pub async fn collection(state: &AppState) -> Option<CollectionSummary> {
    match state.catalog.collection_summary().await {
        Ok(summary) => Some(summary),
        Err(e) => {
            logger::log_fetch_failure("collection data", state.catalog.name(), &e);
            None
        }
    }
}

pub async fn insights(state: &AppState) -> Option<InsightsSummary> {
    match state.catalog.insights_summary().await {
        Ok(summary) => Some(summary),
        Err(e) => {
            logger::log_fetch_failure("insights", state.catalog.name(), &e);
            None
        }
    }
}
