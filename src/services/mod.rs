// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote API clients and chart rendering.

pub mod chart;
pub mod http;
pub mod lwa;
pub mod smapi;

pub use chart::render_metric_chart;
pub use http::build_client;
pub use lwa::LwaClient;
pub use smapi::SmapiClient;
