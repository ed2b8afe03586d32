// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One report run: authenticate, then fetch, print and chart each metric.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{AccessToken, MetricSeries};
use crate::services::{render_metric_chart, LwaClient, SmapiClient};
use std::io::Write;
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub series: Vec<MetricSeries>,
    pub charts: Vec<PathBuf>,
}

/// Run the report against an already-built HTTP client.
///
/// Human-readable output goes to `out`. The first failure aborts the run.
pub async fn run<W: Write>(
    config: &Config,
    http: reqwest::Client,
    out: &mut W,
) -> Result<RunReport, AppError> {
    let lwa = LwaClient::new(http.clone(), config.lwa_token_url.as_str());
    let smapi = SmapiClient::new(http, config.smapi_base_url.as_str(), config.clock);

    writeln!(out, "Get the LWA access token")?;
    let token = lwa.exchange_refresh_token(&config.credentials).await?;
    writeln!(out, "LWA Access Token {}", displayed_token(config, &token))?;

    let mut report = RunReport::default();
    for &metric in &config.metrics {
        let series = smapi
            .get_skill_metric(&config.skill_id, metric, &token.access_token)
            .await?;

        writeln!(out, "Number of {} on each day last week", series.metric)?;
        for (timestamp, value) in series.points() {
            writeln!(out, "{} {}", timestamp, value)?;
        }

        if config.render_charts {
            let path = render_metric_chart(&config.deploy_dir, metric, &series)?;
            writeln!(out, "{}", path.display())?;
            report.charts.push(path);
        }

        report.series.push(series);
    }

    out.flush()?;
    Ok(report)
}

fn displayed_token(config: &Config, token: &AccessToken) -> String {
    if config.print_access_token {
        token.access_token.clone()
    } else {
        token.masked()
    }
}
