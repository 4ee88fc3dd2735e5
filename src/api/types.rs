// API type definitions

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// ISO-8601 time the health check was answered
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy(config: &Config) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Local::now().to_rfc3339(),
            service: config.site.service_name.clone(),
            version: config.site.version.clone(),
        }
    }
}
