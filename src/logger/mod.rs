//! Logger module
//!
//! Provides logging utilities for the site including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - Optional file output for the access log
//!
//! Events are emitted through `tracing`; `init` installs the subscriber.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::fs::{File, OpenOptions};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::{filter_fn, EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, Layer};

/// Target used for access log events
pub const ACCESS_TARGET: &str = "access";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to open log file '{path}': {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid log level: {0}")]
    Filter(#[from] ParseError),

    #[error("Logger already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup. `RUST_LOG` takes precedence
/// over `logging.level`.
pub fn init(config: &Config) -> Result<(), LoggerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level)?,
    };

    let access_file = match config.logging.access_log_file.as_deref() {
        Some(path) => Some(open_log_file(path).map_err(|source| LoggerError::File {
            path: path.to_string(),
            source,
        })?),
        None => None,
    };
    let access_layer = access_file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .with_filter(filter_fn(|meta| meta.target() == ACCESS_TARGET))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter))
        .with(access_layer)
        .try_init()?;
    Ok(())
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> std::io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("{} {} started", config.site.name, config.site.version);
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Mode: {}", config.mode);
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(ref path) = config.logging.access_log_file {
        tracing::info!("Access log: {path}");
    }
    tracing::info!("Static files: {}", config.http.static_dir);
    tracing::info!("======================================");
}

/// Warn about settings that are unsafe for the selected mode
pub fn log_config_warnings(config: &Config) {
    if config.mode == crate::config::Mode::Production && config.uses_default_secret() {
        log_warning("Running in production with the default secret key; set AVATARARTS_SECRET_KEY");
    }
    if config.integrations.suno_api_key.is_none() {
        tracing::debug!("SUNO_API_KEY not set");
    }
    if config.integrations.github_token.is_none() {
        tracing::debug!("GITHUB_TOKEN not set");
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log a catalog fetch that was degraded to empty data
pub fn log_fetch_failure(what: &str, provider: &str, err: &impl std::fmt::Display) {
    tracing::error!("Error loading {what} from '{provider}' catalog: {err}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown(active_connections: usize) {
    tracing::info!("Shutting down, {active_connections} connection(s) still active");
}
