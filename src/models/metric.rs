// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Skill metric names and the time series returned by SMAPI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metrics SMAPI reports for a custom skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricName {
    UniqueCustomers,
    TotalEnablements,
    SuccessfulUtterances,
    FailedUtterances,
    TotalSessions,
    SuccessfulSessions,
    IncompleteSessions,
    UserEndedSessions,
    SkillEndedSessions,
}

impl MetricName {
    /// Every recognised metric, in reporting order.
    pub const ALL: [MetricName; 9] = [
        MetricName::UniqueCustomers,
        MetricName::TotalEnablements,
        MetricName::SuccessfulUtterances,
        MetricName::FailedUtterances,
        MetricName::TotalSessions,
        MetricName::SuccessfulSessions,
        MetricName::IncompleteSessions,
        MetricName::UserEndedSessions,
        MetricName::SkillEndedSessions,
    ];

    /// Wire name used in the `metric` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::UniqueCustomers => "uniqueCustomers",
            MetricName::TotalEnablements => "totalEnablements",
            MetricName::SuccessfulUtterances => "successfulUtterances",
            MetricName::FailedUtterances => "failedUtterances",
            MetricName::TotalSessions => "totalSessions",
            MetricName::SuccessfulSessions => "successfulSessions",
            MetricName::IncompleteSessions => "incompleteSessions",
            MetricName::UserEndedSessions => "userEndedSessions",
            MetricName::SkillEndedSessions => "skillEndedSessions",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricName {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricName::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Daily time series for one metric.
///
/// `timestamps[i]` and `values[i]` describe the same day; SMAPI returns
/// them in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: String,
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}

impl MetricSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that timestamps and values line up.
    pub fn validate(&self) -> Result<(), String> {
        if self.timestamps.len() != self.values.len() {
            return Err(format!(
                "{}: {} timestamps but {} values",
                self.metric,
                self.timestamps.len(),
                self.values.len()
            ));
        }
        Ok(())
    }

    /// Iterate `(timestamp, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.timestamps
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_name_round_trips_through_str() {
        for metric in MetricName::ALL {
            assert_eq!(metric.as_str().parse::<MetricName>(), Ok(metric));
        }
    }

    #[test]
    fn test_metric_names_are_unique() {
        let names: std::collections::HashSet<_> =
            MetricName::ALL.iter().map(MetricName::as_str).collect();
        assert_eq!(names.len(), MetricName::ALL.len());
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let err = "dailyActiveUsers".parse::<MetricName>().unwrap_err();
        assert_eq!(err, UnknownMetric("dailyActiveUsers".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&MetricName::SkillEndedSessions).unwrap();
        assert_eq!(json, "\"skillEndedSessions\"");
    }

    #[test]
    fn test_series_parses_smapi_response() {
        let json = r#"{
            "metric": "uniqueCustomers",
            "timestamps": ["2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"],
            "values": [3.0, 5.0]
        }"#;
        let series: MetricSeries = serde_json::from_str(json).unwrap();

        assert_eq!(series.timestamps.len(), 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series.values, vec![3.0, 5.0]);
        assert!(series.validate().is_ok());
    }

    #[test]
    fn test_series_json_is_lossless() {
        let series = MetricSeries {
            metric: "totalSessions".to_string(),
            timestamps: vec![
                "2024-03-10T00:00:00Z".to_string(),
                "2024-03-11T00:00:00Z".to_string(),
                "2024-03-12T00:00:00Z".to_string(),
            ],
            values: vec![0.0, 12.5, 1e9],
        };

        let json = serde_json::to_string(&series).unwrap();
        let decoded: MetricSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, series);
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let series = MetricSeries {
            metric: "failedUtterances".to_string(),
            timestamps: vec!["2024-01-01T00:00:00Z".to_string()],
            values: vec![],
        };
        let err = series.validate().unwrap_err();
        assert!(err.contains("1 timestamps but 0 values"));
    }

    #[test]
    fn test_points_pairs_in_order() {
        let series = MetricSeries {
            metric: "uniqueCustomers".to_string(),
            timestamps: vec!["a".to_string(), "b".to_string()],
            values: vec![1.0, 2.0],
        };
        let points: Vec<_> = series.points().collect();
        assert_eq!(points, vec![("a", 1.0), ("b", 2.0)]);
    }
}
