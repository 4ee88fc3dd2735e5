// Configuration module entry point
// Resolves the deployment mode and builds the immutable application settings

mod mode;
mod state;
mod types;

use config::{ConfigBuilder, ConfigError, Environment, File, Map};
use config::builder::DefaultState;
use std::net::SocketAddr;

use crate::catalog::{CollectionInfo, SPECIAL_COLLECTIONS, THEMES};

// Re-export public types
pub use mode::Mode;
pub use state::AppState;
pub use types::{
    CacheConfig, CatalogConfig, Config, HttpConfig, IntegrationsConfig, LoggingConfig,
    PerformanceConfig, SecurityConfig, ServerConfig, SiteConfig, StorageConfig,
};

/// Default config file name (without extension)
pub const CONFIG_FILE: &str = "config";

/// Environment variable selecting the deployment mode
pub const MODE_ENV: &str = "AVATARARTS_ENV";

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
const DEFAULT_LIBRARY_PATH: &str = "/Users/steven/Music/nocTurneMeLoDieS";
const INTEGRATION_SUBPATH: &str = "github.com/ichoake/AvaTar-Arts/V4_SUNO_INTEGRATION";

/// Named variables copied verbatim when set and non-empty
const ENV_STRINGS: [(&str, &str); 8] = [
    ("AVATARARTS_SECRET_KEY", "site.secret_key"),
    ("NOCTURNEMELODIES_PATH", "catalog.library_path"),
    ("AVATARARTS_V4_PATH", "catalog.integration_path"),
    ("SUNO_USERNAME", "integrations.suno_username"),
    ("SUNO_API_KEY", "integrations.suno_api_key"),
    ("GITHUB_USERNAME", "integrations.github_username"),
    ("GITHUB_TOKEN", "integrations.github_token"),
    ("DATABASE_URL", "storage.database_url"),
];

/// Named variables read as flags: true only for "true", any case
const ENV_FLAGS: [(&str, &str); 1] = [(
    "SESSION_COOKIE_SECURE",
    "security.session_cookie_secure",
)];

/// Debug flag variable
const DEBUG_ENV: &str = "AVATARARTS_DEBUG";

/// Older name for `AVATARARTS_DEBUG`, read only when that one is unset
const LEGACY_DEBUG_ENV: &str = "FLASK_DEBUG";

/// Named variables parsed as unsigned integers
const ENV_NUMBERS: [(&str, &str); 3] = [
    ("COLLECTION_STATS_CACHE_TIMEOUT", "cache.collection_stats_timeout"),
    ("INSIGHTS_CACHE_TIMEOUT", "cache.insights_timeout"),
    ("MAX_CONTENT_LENGTH", "http.max_body_size"),
];

impl Config {
    /// Load configuration from `config.toml` (optional) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let env: Map<String, String> = std::env::vars().collect();
        Self::load_from(CONFIG_FILE, &env)
    }

    /// Load configuration from the given file path (without extension) and
    /// environment map.
    ///
    /// Precedence, lowest first: defaults, config file, `SITE_` variables,
    /// named variables, mode overrides.
    pub fn load_from(config_path: &str, env: &Map<String, String>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| env.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let mode: Mode = lookup(MODE_ENV).unwrap_or_default().parse()?;
        let library_path = lookup("NOCTURNEMELODIES_PATH").unwrap_or(DEFAULT_LIBRARY_PATH);

        let mut builder = Self::defaults(library_path)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("SITE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env.clone())),
            );

        for (name, key) in ENV_STRINGS {
            if let Some(value) = lookup(name) {
                builder = builder.set_override(key, value)?;
            }
        }
        for (name, key) in ENV_FLAGS {
            if let Some(value) = lookup(name) {
                builder = builder.set_override(key, value.eq_ignore_ascii_case("true"))?;
            }
        }
        if let Some(debug) = debug_flag(env) {
            builder = builder.set_override("site.debug", debug)?;
        }
        for (name, key) in ENV_NUMBERS {
            if let Some(value) = lookup(name) {
                builder = builder.set_override(key, parse_number(name, value)?)?;
            }
        }

        let settings = mode.apply(builder)?.build()?;
        let mut config: Self = settings.try_deserialize()?;
        config.mode = mode;
        Ok(config)
    }

    fn defaults(library_path: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .set_default("http.server_name", "avatararts-site/1.0")?
            .set_default("http.static_dir", "static")?
            .set_default("http.max_body_size", 16 * 1024 * 1024)? // 16MB
            .set_default("site.secret_key", DEFAULT_SECRET_KEY)?
            .set_default("site.debug", false)?
            .set_default("site.testing", false)?
            .set_default("site.name", "AvatarArts Website")?
            .set_default("site.service_name", "avatararts-website")?
            .set_default("site.version", "1.0.0")?
            .set_default("site.author", "Steven Chaplinski")?
            .set_default("site.brand", "AvatarArts")?
            .set_default("catalog.library_path", library_path)?
            .set_default(
                "catalog.integration_path",
                format!("{library_path}/{INTEGRATION_SUBPATH}"),
            )?
            .set_default("integrations.suno_username", "avatararts")?
            .set_default("integrations.github_username", "ichoake")?
            .set_default("storage.database_url", "sqlite://avatararts.db")?
            .set_default("security.session_cookie_secure", false)?
            .set_default("security.session_cookie_httponly", true)?
            .set_default("security.session_cookie_samesite", "Lax")?
            .set_default("security.csrf_enabled", true)?
            .set_default("security.preferred_url_scheme", "http")?
            .set_default("cache.collection_stats_timeout", 300)? // 5 minutes
            .set_default("cache.insights_timeout", 600) // 10 minutes
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Curated collection registry
    pub const fn special_collections(&self) -> &'static [CollectionInfo] {
        &SPECIAL_COLLECTIONS
    }

    /// Brand theme names
    pub const fn themes(&self) -> &'static [&'static str] {
        &THEMES
    }

    pub fn uses_default_secret(&self) -> bool {
        self.site.secret_key == DEFAULT_SECRET_KEY
    }
}

/// `AVATARARTS_DEBUG`, falling back to `FLASK_DEBUG`
fn debug_flag(env: &Map<String, String>) -> Option<bool> {
    [DEBUG_ENV, LEGACY_DEBUG_ENV]
        .iter()
        .find_map(|name| env.get(*name).map(|v| v.trim()).filter(|v| !v.is_empty()))
        .map(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_number(name: &str, value: &str) -> Result<i64, ConfigError> {
    let number = value
        .parse::<u64>()
        .map_err(|e| ConfigError::Message(format!("{name}='{value}' is not a valid number: {e}")))?;
    i64::try_from(number)
        .map_err(|_| ConfigError::Message(format!("{name}='{value}' is too large (max {})", i64::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FILE: &str = "does-not-exist/config";

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::load_from(NO_FILE, &env)
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.mode, Mode::Development);
        assert!(cfg.site.debug);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.integrations.suno_username, "avatararts");
        assert!(cfg.integrations.github_token.is_none());
        assert_eq!(cfg.cache.collection_stats_timeout, 300);
        assert_eq!(cfg.cache.insights_timeout, 600);
        assert_eq!(cfg.http.max_body_size, 16 * 1024 * 1024);
        assert_eq!(cfg.security.session_cookie_samesite, "Lax");
        assert!(cfg.uses_default_secret());
        assert_eq!(cfg.special_collections().len(), 5);
        assert_eq!(cfg.themes().len(), 5);
    }

    #[test]
    fn test_debug_only_outside_production() {
        for (mode, debug_env, expected) in [
            ("development", "false", true),
            ("testing", "false", true),
            ("production", "true", false),
        ] {
            let cfg = load(&[(MODE_ENV, mode), ("AVATARARTS_DEBUG", debug_env)]).unwrap();
            assert_eq!(cfg.site.debug, expected, "mode {mode}");
        }
    }

    #[test]
    fn test_production_overrides() {
        let cfg = load(&[(MODE_ENV, "production"), ("SESSION_COOKIE_SECURE", "false")]).unwrap();
        assert_eq!(cfg.mode, Mode::Production);
        assert!(cfg.security.session_cookie_secure);
        assert!(cfg.security.prefers_https());
    }

    #[test]
    fn test_testing_overrides() {
        let cfg = load(&[(MODE_ENV, "testing"), ("DATABASE_URL", "postgres://db")]).unwrap();
        assert!(cfg.site.testing);
        assert!(!cfg.security.csrf_enabled);
        assert_eq!(cfg.storage.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_flag_coercion() {
        let cfg = load(&[("SESSION_COOKIE_SECURE", "TRUE")]).unwrap();
        assert!(cfg.security.session_cookie_secure);
        let cfg = load(&[("SESSION_COOKIE_SECURE", "yes")]).unwrap();
        assert!(!cfg.security.session_cookie_secure);
    }

    #[test]
    fn test_named_variables() {
        let cfg = load(&[
            ("AVATARARTS_SECRET_KEY", "s3cret"),
            ("GITHUB_TOKEN", "ghp_x"),
            ("NOCTURNEMELODIES_PATH", "/srv/music"),
            ("INSIGHTS_CACHE_TIMEOUT", "60"),
        ])
        .unwrap();
        assert_eq!(cfg.site.secret_key, "s3cret");
        assert!(!cfg.uses_default_secret());
        assert_eq!(cfg.integrations.github_token.as_deref(), Some("ghp_x"));
        assert_eq!(cfg.catalog.library_path, "/srv/music");
        assert!(cfg.catalog.integration_path.starts_with("/srv/music/"));
        assert_eq!(cfg.cache.insights_timeout, 60);
    }

    #[test]
    fn test_malformed_number_is_descriptive() {
        let err = load(&[("MAX_CONTENT_LENGTH", "16MB")]).unwrap_err();
        assert!(err.to_string().contains("MAX_CONTENT_LENGTH"));
    }

    #[test]
    fn test_large_body_limit() {
        let cfg = load(&[("MAX_CONTENT_LENGTH", "5000000000")]).unwrap();
        assert_eq!(cfg.http.max_body_size, 5_000_000_000);

        let err = load(&[("MAX_CONTENT_LENGTH", "18446744073709551615")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("MAX_CONTENT_LENGTH"));
        assert!(message.contains("too large"));
    }

    #[test]
    fn test_debug_flag_sources() {
        let env = |vars: &[(&str, &str)]| -> Map<String, String> {
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };
        assert_eq!(debug_flag(&env(&[])), None);
        assert_eq!(debug_flag(&env(&[("FLASK_DEBUG", "True")])), Some(true));
        assert_eq!(debug_flag(&env(&[("FLASK_DEBUG", "1")])), Some(false));
        assert_eq!(
            debug_flag(&env(&[("AVATARARTS_DEBUG", "false"), ("FLASK_DEBUG", "true")])),
            Some(false)
        );
        assert_eq!(
            debug_flag(&env(&[("AVATARARTS_DEBUG", " "), ("FLASK_DEBUG", "true")])),
            Some(true)
        );

        // Mode overrides still have the last word
        let cfg = load(&[(MODE_ENV, "production"), ("FLASK_DEBUG", "true")]).unwrap();
        assert!(!cfg.site.debug);
    }

    #[test]
    fn test_unknown_mode_fails() {
        let err = load(&[(MODE_ENV, "staging")]).unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_prefixed_server_variables() {
        let cfg = load(&[("SITE_SERVER__PORT", "9000"), ("SITE_SERVER__HOST", "127.0.0.1")])
            .unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }
}
