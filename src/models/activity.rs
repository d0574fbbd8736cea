// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity summary as returned by the list endpoint.

use serde::{Deserialize, Deserializer};

/// One entry of `GET /athlete/activities`.
///
/// The list endpoint omits or nulls several of these fields, so everything
/// beyond `id` and `name` falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Free-text description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Distance in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Activity type tag (Run, Walk, Ride, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: String,
    /// Start date/time (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
}

impl Activity {
    /// Exact, case-insensitive name comparison. Whitespace is significant.
    pub fn name_matches(&self, wanted: &str) -> bool {
        self.name.to_lowercase() == wanted.to_lowercase()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
