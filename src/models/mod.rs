// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod metric;
pub mod token;

pub use metric::{MetricName, MetricSeries};
pub use token::{AccessToken, Credentials};
