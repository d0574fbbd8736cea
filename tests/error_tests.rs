// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use strava_desk_miles::config::ConfigError;
use strava_desk_miles::error::AppError;

#[test]
fn test_is_strava_token_error_matches() {
    let err = AppError::Unauthorized(r#"{"message":"Authorization Error"}"#.to_string());
    assert!(err.is_strava_token_error());
    assert!(!err.is_rate_limited());

    assert!(AppError::EmptyAccessToken.is_strava_token_error());
}

#[test]
fn test_is_strava_token_error_no_match() {
    let err = AppError::RateLimited;
    assert!(!err.is_strava_token_error());
    assert!(err.is_rate_limited());

    // Wording in a non-401 body does not make it a token error
    let err = AppError::StravaApi("HTTP 400 Bad Request: Invalid per_page token".to_string());
    assert!(!err.is_strava_token_error());
    assert!(!err.is_rate_limited());

    let err = AppError::Decode("expected value".to_string());
    assert!(!err.is_strava_token_error());
}

#[test]
fn test_config_error_converts() {
    let err: AppError = ConfigError::Missing("STRAVA_CLIENT_ID").into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing required environment variable: STRAVA_CLIENT_ID"
    );
}
