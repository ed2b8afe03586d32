// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{Days, Local, NaiveDateTime, Utc};
use std::str::FromStr;

/// Timestamp shape SMAPI expects for `startTime`/`endTime`.
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Length of the trailing metrics window.
pub const WINDOW_DAYS: u64 = 7;

/// Which clock reading is formatted into the query window.
///
/// `Local` formats the host wall clock and appends a literal `Z`, so the
/// window is offset by the host's UTC offset. `Utc` formats true UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    #[default]
    Local,
    Utc,
}

impl ClockMode {
    /// Current wall-clock reading for this mode.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            ClockMode::Local => Local::now().naive_local(),
            ClockMode::Utc => Utc::now().naive_utc(),
        }
    }
}

impl FromStr for ClockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(ClockMode::Local),
            "utc" => Ok(ClockMode::Utc),
            other => Err(format!("expected 'local' or 'utc', got '{}'", other)),
        }
    }
}

/// Format a clock reading as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_api_timestamp(at: NaiveDateTime) -> String {
    at.format(API_TIMESTAMP_FORMAT).to_string()
}

/// Formatted `[start, end]` query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    /// Window ending at `end` and starting `WINDOW_DAYS` calendar days earlier.
    pub fn trailing_week(end: NaiveDateTime) -> Self {
        let start = end
            .checked_sub_days(Days::new(WINDOW_DAYS))
            .unwrap_or(NaiveDateTime::MIN);
        Self {
            start: format_api_timestamp(start),
            end: format_api_timestamp(end),
        }
    }

    /// Window ending now on the given clock.
    pub fn trailing_week_from(clock: ClockMode) -> Self {
        Self::trailing_week(clock.now())
    }
}
