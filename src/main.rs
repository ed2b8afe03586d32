// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill-Metrics CLI
//!
//! Prints the last week of SMAPI metrics for a skill and writes a chart per
//! metric into `BITRISE_DEPLOY_DIR` (unless `SKIP_CHARTS=true`).

use skill_metrics::{config::Config, error::AppError, services::build_client};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Configuration problems are user-facing, so they go to stdout too.
            if let AppError::Config(config_error) = &e {
                println!("{}", config_error);
            }
            tracing::error!(error = %e, "Run failed");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), AppError> {
    // Nothing touches the network until configuration is complete.
    let config = Config::from_env()?;
    tracing::info!(
        skill_id = %config.skill_id,
        metrics = config.metrics.len(),
        charts = config.render_charts,
        timeout_secs = config.http_timeout.as_secs(),
        "Starting skill metrics report"
    );

    let http = build_client(config.http_timeout)?;
    let stdout = std::io::stdout();
    let report = skill_metrics::run(&config, http, &mut stdout.lock()).await?;

    tracing::info!(
        metrics = report.series.len(),
        charts = report.charts.len(),
        "Report complete"
    );
    Ok(())
}

/// Initialize logging to stderr; `LOG_FORMAT=json` selects structured JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skill_metrics=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(format).init();
    } else {
        let format = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(format).init();
    }
}
