// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Skill-Metrics: weekly usage report for an Alexa custom skill
//!
//! This crate exchanges an LWA refresh token for an access token, pulls the
//! trailing week of daily metrics from SMAPI, prints them and optionally
//! writes one line chart per metric.

pub mod config;
pub mod error;
pub mod models;
pub mod runner;
pub mod services;
pub mod time_utils;

pub use runner::{run, RunReport};
