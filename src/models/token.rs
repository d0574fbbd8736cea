// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth token refresh response.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Body of a successful `POST /oauth/token` with `grant_type=refresh_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry (unix seconds)
    pub expires_at: Option<i64>,
    /// Possibly rotated refresh token
    #[serde(default)]
    pub refresh_token: String,
}

impl TokenResponse {
    /// When the access token stops working, relative to `now`.
    pub fn expires_at_utc(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(|| now + Duration::seconds(self.expires_in))
    }

    /// True when Strava issued a refresh token different from `current`.
    pub fn rotated_refresh_token(&self, current: &str) -> bool {
        !self.refresh_token.is_empty() && self.refresh_token != current
    }
}
