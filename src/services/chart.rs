// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line chart rendering for metric series.
//!
//! Each series becomes `{output_dir}/{metric}.png` with time on the x axis
//! and the raw daily value on the y axis.

use crate::error::AppError;
use crate::models::{MetricName, MetricSeries};
use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1024, 512);
/// Padding around the plot on every side, in pixels.
const PADDING: u32 = 20;
const X_LABEL: &str = "Time";
const Y_LABEL: &str = "Value";

/// Path of the chart for a metric.
pub fn chart_path(output_dir: &Path, metric: &str) -> PathBuf {
    output_dir.join(format!("{}.png", metric))
}

/// Parse SMAPI timestamps (RFC 3339) into UTC instants.
pub fn parse_timestamps(timestamps: &[String]) -> Result<Vec<DateTime<Utc>>, AppError> {
    timestamps
        .iter()
        .map(|ts| {
            DateTime::parse_from_rfc3339(ts)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| AppError::Render(format!("invalid timestamp '{}': {}", ts, e)))
        })
        .collect()
}

/// X range covering every point. A single point gets a one-day span.
fn time_range(times: &[DateTime<Utc>]) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = times.iter().min().copied().unwrap_or_default();
    let end = times.iter().max().copied().unwrap_or_default();
    if end > start {
        (start, end)
    } else {
        (start, start + Duration::days(1))
    }
}

/// Y range with 10% headroom. A flat series gets a unit band around it.
///
/// Headroom that would overflow is dropped; a span that is itself not
/// representable cannot be plotted.
fn value_range(values: &[f64]) -> Result<(f64, f64), AppError> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return Ok((0.0, 1.0));
    }

    let span = max - min;
    if !span.is_finite() {
        return Err(AppError::Render(format!(
            "value span {}..{} is too wide to plot",
            min, max
        )));
    }

    let (low, high) = if span > 0.0 {
        (min - span * 0.1, max + span * 0.1)
    } else {
        (min - 1.0, max + 1.0)
    };
    if low.is_finite() && high.is_finite() && low < high {
        Ok((low, high))
    } else if span > 0.0 {
        Ok((min, max))
    } else {
        Err(AppError::Render(format!("cannot build a range around {}", min)))
    }
}

/// Render a metric series to `{output_dir}/{metric}.png`.
///
/// The file name comes from the requested `metric`, never from the response
/// body. Creates `output_dir` if needed and overwrites an existing chart.
/// Returns the path written.
pub fn render_metric_chart(
    output_dir: &Path,
    metric: MetricName,
    series: &MetricSeries,
) -> Result<PathBuf, AppError> {
    if series.is_empty() {
        return Err(AppError::Render(format!("{}: no data points to plot", metric)));
    }
    series.validate().map_err(AppError::Render)?;

    let times = parse_timestamps(&series.timestamps)?;
    let y_range = value_range(&series.values)?;

    std::fs::create_dir_all(output_dir).map_err(|e| {
        AppError::Render(format!(
            "creating output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let path = chart_path(output_dir, metric.as_str());
    draw_line_chart(&path, metric.as_str(), &times, &series.values, y_range)
        .map_err(|e| AppError::Render(format!("{}: {}", path.display(), e)))?;

    tracing::info!(%metric, path = %path.display(), "Chart written");
    Ok(path)
}

fn draw_line_chart(
    path: &Path,
    title: &str,
    times: &[DateTime<Utc>],
    values: &[f64],
    (y_min, y_max): (f64, f64),
) -> Result<(), Box<dyn std::error::Error>> {
    let (x_start, x_end) = time_range(times);

    // The backend owns the file; it is flushed by present() and closed on drop.
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let plot_area = root.margin(PADDING, PADDING, PADDING, PADDING);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_start..x_end, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(times.len().clamp(2, 10))
        .x_label_formatter(&|t: &DateTime<Utc>| t.format("%m-%d").to_string())
        .draw()?;

    chart.draw_series(LineSeries::new(
        times.iter().copied().zip(values.iter().copied()),
        ShapeStyle::from(&BLUE).stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
