//! Client configuration
//!
//! Read once at startup from the environment (with `.env` support via
//! dotenvy). The only required knob is the backend base URL, which falls
//! back to the localhost development default.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::api::error::{ApiError, Result};

/// Backend base URL used when `QUICKXPOS_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Default freshness window for cached query results.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

const SESSION_FILE_NAME: &str = "auth.json";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the QuickXPos backend.
    pub api_base_url: Url,
    /// Path of the persisted session record.
    pub session_file: PathBuf,
    /// How long a cached query result is served without refetching.
    pub cache_ttl: Duration,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; only load errors for present files
        // are worth surfacing, and even those only as a debug line.
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                debug!("skipping .env: {err}");
            }
        }

        let raw_base = env::var("QUICKXPOS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_base_url = Url::parse(&raw_base)
            .map_err(|err| ApiError::Config(format!("invalid base URL '{raw_base}': {err}")))?;

        let session_file = env::var("QUICKXPOS_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let cache_ttl = match env::var("QUICKXPOS_CACHE_TTL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|err| ApiError::Config(format!("invalid cache TTL '{raw}': {err}")))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_CACHE_TTL,
        };

        debug!(base_url = %api_base_url, session_file = %session_file.display(), "settings loaded");

        Ok(Self {
            api_base_url,
            session_file,
            cache_ttl,
        })
    }
}

fn default_session_file() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join("quickxpos").join(SESSION_FILE_NAME)
}
