// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Every way a run can fail. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build Strava request: {0}")]
    Request(String),

    #[error("Strava request failed: {0}")]
    Transport(String),

    #[error("Strava rejected the access or refresh token: {0}")]
    Unauthorized(String),

    #[error("Strava rate limit exceeded")]
    RateLimited,

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("Failed to read Strava response: {0}")]
    ResponseRead(String),

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("Strava returned an empty access token")]
    EmptyAccessToken,
}

impl AppError {
    /// Classify a failed `send()`.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            AppError::Request(describe(err))
        } else {
            AppError::Transport(describe(err))
        }
    }

    /// Failure while reading a response body.
    pub fn from_read(err: reqwest::Error) -> Self {
        AppError::ResponseRead(describe(err))
    }

    /// True when Strava rejected our credentials or token.
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::Unauthorized(_) | AppError::EmptyAccessToken)
    }

    /// True when Strava answered 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::RateLimited)
    }
}

/// Render a reqwest error with its cause chain but without the request URL,
/// which carries the client secret and refresh token as query parameters.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;
