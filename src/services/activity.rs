// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity history pagination.
//!
//! Pages are requested in order starting at 1. A page shorter than the
//! requested size ends the walk; a full page means more may follow.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Activity;
use crate::services::strava::StravaSession;

/// Page size requested from Strava (its maximum).
pub const PAGE_SIZE: u32 = 200;

/// Anything that can serve numbered pages of activities.
#[async_trait]
pub trait ActivityPageSource {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Activity>>;
}

#[async_trait]
impl ActivityPageSource for StravaSession {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Activity>> {
        self.list_activities(page, per_page).await
    }
}

/// Fetch every activity, one page at a time.
///
/// Any page error aborts the walk and drops what was collected so far.
pub async fn fetch_all_activities<S>(source: &S, per_page: u32) -> Result<Vec<Activity>>
where
    S: ActivityPageSource + ?Sized,
{
    let mut activities = Vec::new();
    let mut page = 1;

    loop {
        tracing::debug!(page, per_page, "Requesting activity page");
        let batch = source.fetch_page(page, per_page).await?;
        let count = batch.len();
        tracing::info!(page, count, "Page retrieved");

        activities.extend(batch);

        if count < per_page as usize {
            break;
        }
        page += 1;
    }

    tracing::info!(total = activities.len(), "Number of activities");
    Ok(activities)
}
