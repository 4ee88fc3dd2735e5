//! Askama Templates
//!
//! Template structs for rendering HTML pages. Every page extends
//! `base.html` and carries a `Layout` for the shared chrome.

use askama::Template;
use chrono::{Datelike, Local};

use crate::catalog::{CollectionSummary, InsightsSummary};
use crate::config::Config;

/// Values used by `base.html` on every page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub brand: String,
    pub author: String,
    pub current_year: i32,
    /// Navigation entry to highlight
    pub active: &'static str,
}

impl Layout {
    pub fn new(config: &Config, active: &'static str) -> Self {
        Self {
            site_name: config.site.name.clone(),
            brand: config.site.brand.clone(),
            author: config.site.author.clone(),
            current_year: Local::now().year(),
            active,
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
    pub insights: Option<InsightsSummary>,
}

/// About page template.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
}

/// Collection page template.
#[derive(Template)]
#[template(path = "collection.html")]
pub struct CollectionTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
    pub insights: Option<InsightsSummary>,
}

/// Technology page template.
#[derive(Template)]
#[template(path = "technology.html")]
pub struct TechnologyTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
    pub tech_info: TechInfo,
}

/// Contact page template.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate {
    pub layout: Layout,
    pub collection: Option<CollectionSummary>,
    /// Error text, only present in debug mode
    pub detail: Option<String>,
}

/// Fixed description of the platform shown on `/technology`.
#[derive(Debug, Clone)]
pub struct TechInfo {
    pub v4_features: Vec<&'static str>,
    pub core_technologies: Vec<&'static str>,
    pub integration_points: Vec<&'static str>,
}

impl TechInfo {
    pub fn current() -> Self {
        Self {
            v4_features: vec![
                "Dual Platform Integration (Suno.com & GitHub)",
                "AI-Enhanced Content Analysis",
                "Album-Based Organization System",
                "AvatarArts-Themed Content Grouping",
                "Cross-Platform Content Linking",
                "Advanced Recommendation Engine",
            ],
            core_technologies: vec![
                "Python 3.8+",
                "Flask Web Framework",
                "React 18 (Frontend)",
                "PyTorch (AI Models)",
                "Librosa (Audio Analysis)",
                "PostgreSQL (Database)",
            ],
            integration_points: vec![
                "Suno.com/@avatararts",
                "GitHub.com/ichoake/AvaTar-Arts",
                "Local nocTurneMeLoDieS System",
                "AI Content Analysis Engine",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};
    use crate::config::Config;

    fn test_config() -> Config {
        Config::load_from("nonexistent-config", &config::Map::new()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_statistics() {
        let config = test_config();
        let catalog = StaticCatalog::from_config(&config);
        let page = IndexTemplate {
            layout: Layout::new(&config, "home"),
            collection: catalog.collection_summary().await.ok(),
            insights: catalog.insights_summary().await.ok(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("1184"));
        assert!(html.contains("Alley Chronicles"));
        assert!(html.contains("In This Alley Where I Hide"));
        assert!(html.contains(&Local::now().year().to_string()));
    }

    #[test]
    fn test_pages_render_without_data() {
        let config = test_config();
        let html = IndexTemplate {
            layout: Layout::new(&config, "home"),
            collection: None,
            insights: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("AvatarArts"));
        assert!(!html.contains("Alley Chronicles"));

        let html = NotFoundTemplate {
            layout: Layout::new(&config, ""),
            collection: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("Page Not Found"));
    }

    #[test]
    fn test_error_detail_is_escaped() {
        let config = test_config();
        let html = ServerErrorTemplate {
            layout: Layout::new(&config, ""),
            collection: None,
            detail: Some("<script>boom</script>".to_string()),
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>boom"));
        assert!(html.contains("&lt;script&gt;boom"));
    }

    #[test]
    fn test_technology_lists() {
        let config = test_config();
        let html = TechnologyTemplate {
            layout: Layout::new(&config, "technology"),
            collection: None,
            tech_info: TechInfo::current(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Album-Based Organization System"));
        assert!(html.contains("Local nocTurneMeLoDieS System"));
    }
}
