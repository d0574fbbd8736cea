// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava desk treadmill totals.
//!
//! Refreshes a Strava access token, walks the athlete's full activity
//! history, and totals the distance of activities named "desk treadmill".

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use error::Result;
use models::DeskTreadmillStats;
use services::{fetch_all_activities, StravaClient, PAGE_SIZE};

/// Run the whole pipeline once: authenticate, fetch, aggregate, report.
pub async fn run(config: &Config) -> Result<DeskTreadmillStats> {
    let client = StravaClient::new(config);
    let session = client.authenticate(&config.strava_refresh_token).await?;
    tracing::info!(per_page = PAGE_SIZE, "Preparing to get activities");

    let activities = fetch_all_activities(&session, PAGE_SIZE).await?;
    let stats = DeskTreadmillStats::from_activities(&activities);

    tracing::info!(
        matched = stats.matched_activities,
        "Desk Treadmill activities: {}",
        stats.matched_activities
    );
    tracing::info!(
        miles = stats.total_distance_miles(),
        "Distance: {:.6} miles",
        stats.total_distance_miles()
    );

    Ok(stats)
}
