//! Configuration for Tandem.
//!
//! Loaded once at startup from the environment (with `.env` support) and
//! exposed process-wide. The backend project URL and public API key are
//! configuration, never compiled in.

use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::{Error, Result};

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    /// Where the persisted session JSON lives on device.
    pub session_file: PathBuf,
}

/// Hosted table store connection settings.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://abc.example.co`.
    pub url: String,
    /// Public (anonymous) API key sent with every request.
    pub anon_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Load configuration from the environment and store it globally.
///
/// Safe to call more than once; later calls return the first result.
pub fn init() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    dotenvy::dotenv().ok();

    let url = require("TANDEM_BACKEND_URL")?;
    let anon_key = require("TANDEM_BACKEND_ANON_KEY")?;

    let timeout_secs = std::env::var("TANDEM_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let session_file = std::env::var("TANDEM_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".tandem/session.json"));

    let config = Config {
        backend: BackendConfig {
            url,
            anon_key,
            timeout: Duration::from_secs(timeout_secs),
        },
        session_file,
    };

    Ok(CONFIG.get_or_init(|| config))
}

/// Access the global configuration.
///
/// Panics if `init` has not been called; that is a programming error.
pub fn config() -> &'static Config {
    CONFIG.get().expect("config::init() must be called first")
}

fn require(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| Error::Config(format!("missing required environment variable {}", key)))
        .and_then(|v| {
            if v.trim().is_empty() {
                Err(Error::Config(format!("{} is set but empty", key)))
            } else {
                Ok(v)
            }
        })
}
