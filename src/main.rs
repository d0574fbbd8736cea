// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Desk treadmill mileage report.
//!
//! Reads Strava credentials from the environment (or `strava.env`), fetches
//! every activity, and logs the total distance walked on the desk treadmill.

use anyhow::Context;
use std::process::ExitCode;
use strava_desk_miles::{config::Config, error::AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(e) if e.is_strava_token_error() => {
                    tracing::warn!("Strava rejected the credentials; check STRAVA_REFRESH_TOKEN")
                }
                Some(e) if e.is_rate_limited() => {
                    tracing::warn!("Strava rate limit reached; try again in 15 minutes")
                }
                _ => {}
            }
            tracing::error!(error = %format!("{:#}", err), "Aborting");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> anyhow::Result<()> {
    let config = Config::from_env()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    strava_desk_miles::run(&config)
        .await
        .context("Failed to total desk treadmill activities")?;
    Ok(())
}

/// Initialize logging; `LOG_FORMAT=json` selects structured JSON output.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("strava_desk_miles=debug".parse().unwrap())
        .add_directive("info".parse().unwrap());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true);
        tracing_subscriber::registry().with(filter).with(format).init();
    } else {
        let format = tracing_subscriber::fmt::layer().with_target(false);
        tracing_subscriber::registry().with(filter).with(format).init();
    }
}
