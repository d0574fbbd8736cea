// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod stats;
pub mod token;

pub use activity::Activity;
pub use stats::DeskTreadmillStats;
pub use token::TokenResponse;
