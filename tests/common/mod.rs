// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use strava_desk_miles::config::Config;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "tok123";

/// Create a config pointing both endpoints at the mock server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    let uri = server.uri();
    Config::from_env_with(|k| match k {
        "STRAVA_CLIENT_ID" => Some("115159".into()),
        "STRAVA_CLIENT_SECRET" => Some("test_secret".into()),
        "STRAVA_REFRESH_TOKEN" => Some("test_refresh".into()),
        "STRAVA_OAUTH_URL" => Some(format!("{}/oauth/token", uri)),
        "STRAVA_API_BASE_URL" => Some(format!("{}/api/v3", uri)),
        _ => None,
    })
    .expect("test config should load")
}

/// Build `count` activities; the first `matching` are desk treadmill walks.
#[allow(dead_code)]
pub fn activity_page(start_id: u64, count: usize, matching: usize, distance: f64) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            let (name, meters, kind) = if i < matching {
                ("Desk Treadmill".to_string(), distance, "Walk")
            } else {
                (format!("Ride {}", i), 12000.0, "Ride")
            };
            json!({
                "id": start_id + i as u64,
                "name": name,
                "description": null,
                "distance": meters,
                "moving_time": 1800,
                "elapsed_time": 1900,
                "type": kind,
                "start_date": "2024-01-15T10:00:00Z"
            })
        })
        .collect();
    Value::Array(items)
}

/// Mount the token endpoint returning `body`.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(query_param("client_id", "115159"))
        .and(query_param("client_secret", "test_secret"))
        .and(query_param("refresh_token", "test_refresh"))
        .and(query_param("f", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount one activity page, expected to be requested exactly once.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("per_page", "200"))
        .and(query_param("page", page.to_string()))
        .and(header("Authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
