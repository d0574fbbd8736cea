// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Refresh-token exchange for a short-lived access token
//! - Paginated activity listing with that token

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Activity, TokenResponse};
use crate::time_utils::format_utc_rfc3339;
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a client for the endpoints and credentials in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            oauth_url: config.oauth_url.clone(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
        }
    }

    /// Exchange a refresh token for an access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse> {
        let response = self
            .http
            .post(&self.oauth_url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
                ("f", "json"),
            ])
            .send()
            .await
            .map_err(AppError::from_send)?;

        self.check_response_json(response).await
    }

    /// Refresh the access token and return a session that can list activities.
    pub async fn authenticate(&self, refresh_token: &str) -> Result<StravaSession> {
        let token = self.refresh_token(refresh_token).await?;

        if token.access_token.trim().is_empty() {
            return Err(AppError::EmptyAccessToken);
        }

        let expires_at = token.expires_at_utc(chrono::Utc::now());
        tracing::info!(
            token_type = %token.token_type,
            expires_at = %format_utc_rfc3339(expires_at),
            "Authenticated with Strava"
        );

        if token.rotated_refresh_token(refresh_token) {
            tracing::info!(
                "Strava issued a new refresh token; the configured one may stop working"
            );
        }

        Ok(StravaSession {
            client: self.clone(),
            token,
        })
    }

    /// List one page of the athlete's activities.
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Activity>> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(AppError::from_send)?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::RateLimited);
            }

            if status.as_u16() == 401 {
                return Err(AppError::Unauthorized(body));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        let body = response.bytes().await.map_err(AppError::from_read)?;

        serde_json::from_slice(&body).map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// A client paired with a freshly issued access token.
#[derive(Clone)]
pub struct StravaSession {
    client: StravaClient,
    token: TokenResponse,
}

impl StravaSession {
    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub async fn list_activities(&self, page: u32, per_page: u32) -> Result<Vec<Activity>> {
        self.client
            .list_activities(self.access_token(), page, per_page)
            .await
    }
}
