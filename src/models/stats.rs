// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Desk treadmill totals over an athlete's activity history.

use crate::models::Activity;

/// Activity name counted toward the totals (compared case-insensitively).
pub const DESK_TREADMILL_NAME: &str = "desk treadmill";

/// Statute miles per meter.
pub const METERS_TO_MILES: f64 = 0.000621371;

/// Convert meters to miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

/// Totals produced by one pass over the activity list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeskTreadmillStats {
    /// Every activity seen, matching or not
    pub total_activities: usize,
    /// Activities named "desk treadmill"
    pub matched_activities: u32,
    /// Summed distance of matched activities (meters)
    pub total_distance_meters: f64,
}

impl DeskTreadmillStats {
    /// Aggregate a full activity list.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let mut stats = Self::default();
        for activity in activities {
            stats.update_from_activity(activity);
        }
        stats
    }

    /// Fold one activity into the totals. Returns whether it matched.
    pub fn update_from_activity(&mut self, activity: &Activity) -> bool {
        self.total_activities += 1;

        if !activity.name_matches(DESK_TREADMILL_NAME) {
            return false;
        }

        self.matched_activities += 1;
        self.total_distance_meters += activity.distance;
        true
    }

    pub fn total_distance_miles(&self) -> f64 {
        meters_to_miles(self.total_distance_meters)
    }
}
