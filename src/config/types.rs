// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Deployment mode; resolved before deserialization
    #[serde(skip)]
    pub mode: Mode,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub site: SiteConfig,
    pub catalog: CatalogConfig,
    pub integrations: IntegrationsConfig,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
    pub cache: CacheConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (stdout only if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound on a connection's lifetime, in seconds
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub static_dir: String,
    /// Largest accepted request body (`Content-Length`), in bytes
    pub max_body_size: u64,
}

/// Application identity and behavior flags
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub secret_key: String,
    pub debug: bool,
    pub testing: bool,
    pub name: String,
    pub service_name: String,
    pub version: String,
    pub author: String,
    pub brand: String,
}

/// Locations of the local music library
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub library_path: String,
    pub integration_path: String,
}

/// External platform accounts
#[derive(Debug, Deserialize, Clone)]
pub struct IntegrationsConfig {
    pub suno_username: String,
    #[serde(default)]
    pub suno_api_key: Option<String>,
    pub github_username: String,
    #[serde(default)]
    pub github_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub database_url: String,
}

/// Cookie and transport security flags
#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    pub session_cookie_secure: bool,
    pub session_cookie_httponly: bool,
    pub session_cookie_samesite: String,
    pub csrf_enabled: bool,
    pub preferred_url_scheme: String,
}

impl SecurityConfig {
    pub fn prefers_https(&self) -> bool {
        self.preferred_url_scheme.eq_ignore_ascii_case("https")
    }
}

/// Client cache lifetimes for the JSON API, in seconds
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    pub collection_stats_timeout: u64,
    pub insights_timeout: u64,
}
