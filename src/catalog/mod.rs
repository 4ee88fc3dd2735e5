//! Catalog module
//!
//! Data-provider seam for the site's statistics:
//! - `CatalogProvider` trait with the two fetch capabilities
//! - `StaticCatalog`, the built-in provider assembled from the registry
//! - Summary types serialized by the JSON API and rendered by pages

pub mod registry;
mod static_catalog;
mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use registry::{CollectionInfo, SPECIAL_COLLECTIONS, THEMES};
pub use static_catalog::StaticCatalog;
pub use types::{
    CollectionEntry, CollectionOverview, CollectionSummary, Distribution, GenreAnalysis,
    GithubIntegration, InsightsSummary, IntegrationStatus, MoodAnalysis, Score, SunoIntegration,
    ThematicAnalysis,
};

/// Errors a catalog provider can report
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    #[error("Inconsistent catalog data: {0}")]
    InvalidData(String),
}

/// Source of collection and insights summaries.
///
/// Implementations may read from a live backend; route handlers only depend
/// on this trait.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Fetch catalog-wide counts and curated collections
    async fn collection_summary(&self) -> Result<CollectionSummary, CatalogError>;

    /// Fetch aggregate statistics over the catalog
    async fn insights_summary(&self) -> Result<InsightsSummary, CatalogError>;
}
