// Built-in catalog provider
// Assembles summaries from the collection registry and fixed catalog figures

use async_trait::async_trait;
use chrono::Local;

use super::registry::{SPECIAL_COLLECTIONS, THEMES};
use super::types::{
    CollectionEntry, CollectionOverview, CollectionSummary, Distribution, GenreAnalysis,
    GithubIntegration, InsightsSummary, IntegrationStatus, MoodAnalysis, Score, SunoIntegration,
    ThematicAnalysis,
};
use super::{CatalogError, CatalogProvider};
use crate::config::Config;

const TOTAL_TRACKS: u32 = 1184;
const TOTAL_ALBUMS: u32 = 665;
const TOTAL_REPOSITORIES: u32 = 12;
const AVATARARTS_REPOSITORIES: u32 = 3;
const SUNO_FOLLOWERS: u32 = 156;
const GITHUB_REPOSITORIES: u32 = 47;

const TOP_N: usize = 5;

const THEME_COUNTS: [(&str, u32); 6] = [
    ("Urban Mythology", 320),
    ("Nature Mythology", 180),
    ("Emotional Journey", 210),
    ("Hero Mythology", 150),
    ("Classical Mythology", 80),
    ("General", 244),
];

const GENRE_COUNTS: [(&str, u32); 7] = [
    ("Folk/Acoustic", 280),
    ("Ambient", 190),
    ("Chill/Lo-fi", 150),
    ("Rock/Punk", 120),
    ("Electronic", 180),
    ("Classical", 80),
    ("Mixed", 184),
];

const MOOD_COUNTS: [(&str, u32); 6] = [
    ("melancholic", 290),
    ("calm", 210),
    ("joyful", 180),
    ("epic", 150),
    ("energetic", 120),
    ("neutral", 234),
];

/// Provider backed by the registry and fixed catalog figures
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    suno_username: String,
    github_username: String,
    brand: String,
    artist: String,
}

impl StaticCatalog {
    pub fn new(
        suno_username: impl Into<String>,
        github_username: impl Into<String>,
        brand: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            suno_username: suno_username.into(),
            github_username: github_username.into(),
            brand: brand.into(),
            artist: artist.into(),
        }
    }

    /// Build the provider from configured integration accounts and brand
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.integrations.suno_username.clone(),
            config.integrations.github_username.clone(),
            config.site.brand.clone(),
            config.site.author.clone(),
        )
    }

    fn build_collection(&self) -> CollectionSummary {
        let special_collections = SPECIAL_COLLECTIONS
            .iter()
            .map(|c| {
                (
                    c.id.to_string(),
                    CollectionEntry {
                        name: c.name.to_string(),
                        track_count: c.track_count,
                        primary_theme: c.primary_theme.to_string(),
                    },
                )
            })
            .collect();

        CollectionSummary {
            total_tracks: TOTAL_TRACKS,
            total_albums: TOTAL_ALBUMS,
            total_repositories: TOTAL_REPOSITORIES,
            avatararts_repositories: AVATARARTS_REPOSITORIES,
            special_collections,
            avatararts_themes: THEMES.iter().map(ToString::to_string).collect(),
            suno_integration: SunoIntegration {
                username: self.suno_username.clone(),
                tracks_count: TOTAL_TRACKS,
                followers_count: SUNO_FOLLOWERS,
                status: IntegrationStatus::Connected,
            },
            github_integration: GithubIntegration {
                username: self.github_username.clone(),
                repositories_count: GITHUB_REPOSITORIES,
                avatararts_repos: AVATARARTS_REPOSITORIES,
                status: IntegrationStatus::Connected,
            },
            last_updated: Local::now().to_rfc3339(),
        }
    }

    fn build_insights(&self) -> Result<InsightsSummary, CatalogError> {
        let themes = Distribution::new(&THEME_COUNTS, Some("General"));
        let genres = Distribution::new(&GENRE_COUNTS, Some("Mixed"));
        let moods = Distribution::new(&MOOD_COUNTS, Some("neutral"));
        check_coverage("theme", &themes)?;
        check_coverage("genre", &genres)?;
        check_coverage("mood", &moods)?;

        Ok(InsightsSummary {
            collection_overview: CollectionOverview {
                total_tracks: TOTAL_TRACKS,
                total_duration_hours: 1247.5,
                average_duration_seconds: 378.2,
                most_popular_track: "In This Alley Where I Hide".to_string(),
                most_popular_track_plays: 1247,
            },
            thematic_analysis: ThematicAnalysis {
                theme_distribution: themes.counts(),
                top_themes: themes.top(TOP_N),
                theme_diversity_score: Score::new(0.78),
            },
            genre_analysis: GenreAnalysis {
                genre_distribution: genres.counts(),
                top_genres: genres.top(TOP_N),
                genre_diversity_score: Score::new(0.82),
            },
            mood_analysis: MoodAnalysis {
                mood_distribution: moods.counts(),
                top_moods: moods.top(TOP_N),
                mood_balance_score: Score::new(0.65),
            },
            avatararts_brand: self.brand.clone(),
            artist_identity: self.artist.clone(),
            analysis_timestamp: Local::now().to_rfc3339(),
        })
    }
}

/// Every track falls in exactly one bucket of each distribution
fn check_coverage(label: &str, distribution: &Distribution) -> Result<(), CatalogError> {
    let total = distribution.total();
    if total == TOTAL_TRACKS {
        Ok(())
    } else {
        Err(CatalogError::InvalidData(format!(
            "{label} distribution covers {total} tracks but the catalog has {TOTAL_TRACKS}"
        )))
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn collection_summary(&self) -> Result<CollectionSummary, CatalogError> {
        let summary = self.build_collection();
        if summary.curated_track_count() > summary.total_tracks {
            return Err(CatalogError::InvalidData(format!(
                "curated collections hold {} tracks but the catalog only has {}",
                summary.curated_track_count(),
                summary.total_tracks
            )));
        }
        Ok(summary)
    }

    async fn insights_summary(&self) -> Result<InsightsSummary, CatalogError> {
        self.build_insights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new("avatararts", "ichoake", "AvatarArts", "Steven Chaplinski")
    }

    #[tokio::test]
    async fn test_collection_summary_lists_registry() {
        let summary = catalog().collection_summary().await.unwrap();
        let counts: Vec<(&str, u32)> = [
            "alley_chronicles",
            "willow_variations",
            "summer_remixes",
            "hero_collections",
            "junkyard_symphonies",
        ]
        .iter()
        .map(|id| (*id, summary.special_collections[*id].track_count))
        .collect();
        assert_eq!(
            counts,
            vec![
                ("alley_chronicles", 151),
                ("willow_variations", 47),
                ("summer_remixes", 34),
                ("hero_collections", 30),
                ("junkyard_symphonies", 50),
            ]
        );
        assert_eq!(summary.special_collections.len(), 5);
        assert_eq!(summary.total_tracks, 1184);
        assert_eq!(summary.suno_integration.username, "avatararts");
        assert_eq!(summary.github_integration.status, IntegrationStatus::Connected);
        assert!(chrono::DateTime::parse_from_rfc3339(&summary.last_updated).is_ok());
    }

    #[tokio::test]
    async fn test_collection_uses_configured_usernames() {
        let catalog = StaticCatalog::new("someone", "elsewhere", "Brand", "Artist");
        let summary = catalog.collection_summary().await.unwrap();
        assert_eq!(summary.suno_integration.username, "someone");
        assert_eq!(summary.github_integration.username, "elsewhere");
    }

    #[tokio::test]
    async fn test_insights_top_lists() {
        let insights = catalog().insights_summary().await.unwrap();
        let themes: Vec<&str> = insights
            .thematic_analysis
            .top_themes
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(
            themes,
            vec![
                "Urban Mythology",
                "Emotional Journey",
                "Nature Mythology",
                "Hero Mythology",
                "Classical Mythology",
            ]
        );
        let genres: Vec<&str> = insights
            .genre_analysis
            .top_genres
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(
            genres,
            vec!["Folk/Acoustic", "Ambient", "Electronic", "Chill/Lo-fi", "Rock/Punk"]
        );
        assert_eq!(insights.mood_analysis.top_moods[0], ("melancholic".to_string(), 290));
        assert!(!insights
            .mood_analysis
            .top_moods
            .iter()
            .any(|(n, _)| n == "neutral"));
    }

    #[tokio::test]
    async fn test_insights_scores_in_unit_interval() {
        let insights = catalog().insights_summary().await.unwrap();
        for score in [
            insights.thematic_analysis.theme_diversity_score,
            insights.genre_analysis.genre_diversity_score,
            insights.mood_analysis.mood_balance_score,
        ] {
            assert!((0.0..=1.0).contains(&score.value()));
        }
    }

    #[test]
    fn test_distributions_cover_catalog() {
        for (label, counts) in [
            ("theme", &THEME_COUNTS[..]),
            ("genre", &GENRE_COUNTS[..]),
            ("mood", &MOOD_COUNTS[..]),
        ] {
            assert!(check_coverage(label, &Distribution::new(counts, None)).is_ok());
        }
    }

    #[test]
    fn test_partial_distribution_is_rejected() {
        let partial = Distribution::new(&THEME_COUNTS[..5], Some("General"));
        let err = check_coverage("theme", &partial).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData(_)));
        assert!(err.to_string().contains("940"));
    }
}
