// Catalog data types
// Collection and insights bundles returned by catalog providers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection state of an external platform account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
}

impl std::fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => f.write_str("connected"),
            Self::Disconnected => f.write_str("disconnected"),
        }
    }
}

/// Per-collection record inside a `CollectionSummary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub track_count: u32,
    pub primary_theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunoIntegration {
    pub username: String,
    pub tracks_count: u32,
    pub followers_count: u32,
    pub status: IntegrationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubIntegration {
    pub username: String,
    pub repositories_count: u32,
    pub avatararts_repos: u32,
    pub status: IntegrationStatus,
}

/// Catalog-wide counts, curated collections and integration status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub total_tracks: u32,
    pub total_albums: u32,
    pub total_repositories: u32,
    pub avatararts_repositories: u32,
    pub special_collections: BTreeMap<String, CollectionEntry>,
    pub avatararts_themes: Vec<String>,
    pub suno_integration: SunoIntegration,
    pub github_integration: GithubIntegration,
    /// ISO-8601 time the summary was assembled
    pub last_updated: String,
}

impl CollectionSummary {
    /// Sum of tracks across the curated collections
    pub fn curated_track_count(&self) -> u32 {
        self.special_collections
            .values()
            .map(|c| c.track_count)
            .sum()
    }
}

/// Score in the closed interval `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Score {
    /// Clamp `value` into `[0, 1]`; non-finite input becomes 0
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Score as a whole percentage, for display
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

/// Category counts with an optional catch-all bucket
#[derive(Debug, Clone)]
pub struct Distribution {
    counts: BTreeMap<String, u32>,
    catch_all: Option<String>,
}

impl Distribution {
    pub fn new(entries: &[(&str, u32)], catch_all: Option<&str>) -> Self {
        Self {
            counts: entries
                .iter()
                .map(|(name, count)| ((*name).to_string(), *count))
                .collect(),
            catch_all: catch_all.map(ToString::to_string),
        }
    }

    pub fn counts(&self) -> BTreeMap<String, u32> {
        self.counts.clone()
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Largest `n` categories by count, descending, ties by name.
    /// The catch-all bucket never ranks.
    pub fn top(&self, n: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .counts
            .iter()
            .filter(|(name, _)| self.catch_all.as_deref() != Some(name.as_str()))
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionOverview {
    pub total_tracks: u32,
    pub total_duration_hours: f64,
    pub average_duration_seconds: f64,
    pub most_popular_track: String,
    pub most_popular_track_plays: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicAnalysis {
    pub theme_distribution: BTreeMap<String, u32>,
    pub top_themes: Vec<(String, u32)>,
    pub theme_diversity_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAnalysis {
    pub genre_distribution: BTreeMap<String, u32>,
    pub top_genres: Vec<(String, u32)>,
    pub genre_diversity_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood_distribution: BTreeMap<String, u32>,
    pub top_moods: Vec<(String, u32)>,
    pub mood_balance_score: Score,
}

/// Aggregate statistics over the full catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    pub collection_overview: CollectionOverview,
    pub thematic_analysis: ThematicAnalysis,
    pub genre_analysis: GenreAnalysis,
    pub mood_analysis: MoodAnalysis,
    pub avatararts_brand: String,
    pub artist_identity: String,
    pub analysis_timestamp: String,
}
