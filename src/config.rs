// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded once at startup from the environment.
//!
//! Values may be seeded from a dotenv-style file (`strava.env` by default),
//! read from the working directory only. Variables already present in the
//! process environment win over the file.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;

/// Default dotenv file read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strava.env";

/// Strava OAuth token endpoint.
pub const STRAVA_OAUTH_URL: &str = "https://www.strava.com/oauth/token";

/// Strava REST API base.
pub const STRAVA_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Run configuration.
#[derive(Clone)]
pub struct Config {
    // --- Credentials (required) ---
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token exchanged for an access token
    pub strava_refresh_token: String,

    // --- Endpoints (overridable for tests) ---
    /// OAuth token endpoint
    pub oauth_url: String,
    /// REST API base URL, without trailing slash
    pub api_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("strava_client_id", &self.strava_client_id)
            .field("strava_client_secret", &"<redacted>")
            .field("strava_refresh_token", &"<redacted>")
            .field("oauth_url", &self.oauth_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the environment, seeded from the dotenv file
    /// named by `STRAVA_CONFIG_FILE` (or `strava.env`) if it exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(|k| env::var(k).ok())
    }

    /// Resolve the config file through `get`, then merge: values from `get`
    /// first, the file second.
    pub fn from_sources<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let file = get("STRAVA_CONFIG_FILE").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let from_file = read_config_file(Path::new(&file))?;

        Self::from_env_with(|k| get(k).or_else(|| from_file.get(k).cloned()))
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Lets tests supply values without touching the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |key: &'static str| -> Result<String, ConfigError> {
            let value = get(key).ok_or(ConfigError::Missing(key))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value.to_string())
        };

        let strava_client_id = required("STRAVA_CLIENT_ID")?;
        let strava_client_secret = required("STRAVA_CLIENT_SECRET")?;
        let strava_refresh_token = required("STRAVA_REFRESH_TOKEN")?;

        Ok(Self {
            strava_client_id,
            strava_client_secret,
            strava_refresh_token,
            oauth_url: get("STRAVA_OAUTH_URL").unwrap_or_else(|| STRAVA_OAUTH_URL.to_string()),
            api_base_url: get("STRAVA_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| STRAVA_API_BASE_URL.to_string()),
        })
    }
}

/// Parse a dotenv file without touching the process environment.
///
/// Only `path` itself is opened; parent directories are not searched.
/// A missing file yields no values.
fn read_config_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "No config file, using environment only");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(ConfigError::File(format!("{}: {}", path.display(), e))),
    };

    let values = iter
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), keys = values.len(), "Loaded config file");
    Ok(values)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Environment variable is empty: {0}")]
    Empty(&'static str),

    #[error("Failed to read config file: {0}")]
    File(String),
}
