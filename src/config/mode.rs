// Deployment mode module
// Each mode overrides a subset of the shared base settings

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use std::fmt;
use std::str::FromStr;

/// Deployment mode selected at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Development,
    Production,
    Testing,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Apply this mode's overrides on top of every other source
    pub fn apply(
        self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        match self {
            Self::Development => builder.set_override("site.debug", true),
            Self::Production => builder
                .set_override("site.debug", false)?
                .set_override("security.session_cookie_secure", true)?
                .set_override("security.preferred_url_scheme", "https"),
            Self::Testing => builder
                .set_override("site.debug", true)?
                .set_override("site.testing", true)?
                .set_override("security.csrf_enabled", false)?
                .set_override("storage.database_url", "sqlite::memory:"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" | "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            other => Err(ConfigError::Message(format!(
                "Unknown deployment mode '{other}' (expected development, production or testing)"
            ))),
        }
    }
}
