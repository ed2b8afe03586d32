// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill Management API (SMAPI) metrics client.

use crate::error::AppError;
use crate::models::{MetricName, MetricSeries};
use crate::services::http::read_json;
use crate::time_utils::{ClockMode, TimeWindow};

/// Fixed query parameters: daily buckets for the live custom skill, en-US.
const PERIOD: &str = "P1D";
const STAGE: &str = "live";
const SKILL_TYPE: &str = "custom";
const LOCALE: &str = "en-US";

/// Build the metrics query URL.
///
/// Parameters are concatenated verbatim. Skill IDs, metric names and window
/// timestamps contain no characters that need escaping.
pub fn metrics_url(
    base_url: &str,
    skill_id: &str,
    window: &TimeWindow,
    metric: MetricName,
) -> String {
    format!(
        "{}/v1/skills/{}/metrics?startTime={}&endTime={}&period={}&metric={}&stage={}&skillType={}&locale={}",
        base_url, skill_id, window.start, window.end, PERIOD, metric, STAGE, SKILL_TYPE, LOCALE
    )
}

/// SMAPI client.
#[derive(Clone)]
pub struct SmapiClient {
    http: reqwest::Client,
    base_url: String,
    clock: ClockMode,
}

impl SmapiClient {
    /// Create a client for the given SMAPI host.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, clock: ClockMode) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            clock,
        }
    }

    /// Fetch the trailing week of daily values for one metric.
    ///
    /// The window is computed at call time, so each metric in a run gets
    /// its own "now".
    pub async fn get_skill_metric(
        &self,
        skill_id: &str,
        metric: MetricName,
        access_token: &str,
    ) -> Result<MetricSeries, AppError> {
        let window = TimeWindow::trailing_week_from(self.clock);
        let url = metrics_url(&self.base_url, skill_id, &window, metric);

        tracing::debug!(
            %metric,
            start = %window.start,
            end = %window.end,
            "Fetching skill metric"
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::transport("SMAPI metrics request failed", e))?;

        let series: MetricSeries = read_json(response, "SMAPI metrics").await?;
        series.validate().map_err(AppError::Decode)?;
        if series.metric != metric.as_str() {
            return Err(AppError::Decode(format!(
                "requested {} but response is for '{}'",
                metric, series.metric
            )));
        }

        tracing::info!(%metric, points = series.len(), "Skill metric fetched");
        Ok(series)
    }
}
