// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava access and pagination.

pub mod activity;
pub mod strava;

pub use activity::{fetch_all_activities, ActivityPageSource, PAGE_SIZE};
pub use strava::{StravaClient, StravaSession};
