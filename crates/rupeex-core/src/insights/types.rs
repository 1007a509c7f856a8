//! Core types for the Local Intelligence Engine

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Days covered by a spending forecast
pub const FORECAST_HORIZON_DAYS: u32 = 30;

/// Minimum ledger size (any type) before a forecast is attempted
pub const MIN_FORECAST_HISTORY: usize = 3;

/// Multipliers for the fixed ±15% forecast envelope
pub const FORECAST_LOW_FACTOR: f64 = 0.85;
pub const FORECAST_HIGH_FACTOR: f64 = 1.15;

/// Confidence reported for every forecast built from expense data.
///
/// Fixed heuristic, not derived from sample size or variance.
pub const FORECAST_CONFIDENCE: f64 = 0.65;

/// Minimum same-category expenses before an anomaly score is computed
pub const MIN_CATEGORY_HISTORY: usize = 2;

/// Trailing days (inclusive of today) counted as recent spending
pub const MOMENTUM_WINDOW_DAYS: i64 = 3;

/// Types of analysis the engine performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Scores a new transaction against category history
    AnomalyScore,
    /// One-sentence portfolio summary
    Summary,
    /// 30-day expenditure forecast
    Forecast,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::AnomalyScore => "anomaly_score",
            InsightType::Summary => "summary",
            InsightType::Forecast => "forecast",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anomaly_score" => Ok(InsightType::AnomalyScore),
            "summary" => Ok(InsightType::Summary),
            "forecast" => Ok(InsightType::Forecast),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// Direction of spending reported with a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 30-day expenditure forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_total: f64,
    pub low_estimate: f64,
    pub high_estimate: f64,
    pub explanation: String,
    /// Always `Stable`: no trend detection is performed
    pub trend: Trend,
    pub confidence_score: f64,
    /// Predicted spend per category; values sum to `predicted_total`
    pub category_breakdown: BTreeMap<Category, f64>,
}
