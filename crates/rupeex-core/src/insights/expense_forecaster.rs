//! Expense Forecaster
//!
//! Projects the next 30 days of spending from the average of the days on
//! which the user actually spent. Days with no transactions contribute no
//! data point, so the average is per active day rather than per calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::currency::{format_value, CurrencyCode};
use crate::models::Transaction;

use super::engine::{nonzero, IntelligenceEngine};
use super::types::{
    InsightType, PredictionResult, Trend, FORECAST_CONFIDENCE, FORECAST_HIGH_FACTOR,
    FORECAST_HORIZON_DAYS, FORECAST_LOW_FACTOR, MIN_FORECAST_HISTORY,
};

pub const NO_BURN_EXPLANATION: &str =
    "Strategic Forecast: Cash burn rate is null. Maximum capital preservation protocol active.";

impl IntelligenceEngine {
    /// 30-day spending forecast, or `None` with fewer than three transactions
    pub fn prediction(
        &self,
        history: &[Transaction],
        base: CurrencyCode,
    ) -> Option<PredictionResult> {
        if history.len() < MIN_FORECAST_HISTORY {
            debug!(
                insight = InsightType::Forecast.as_str(),
                transactions = history.len(),
                "Not enough history to forecast"
            );
            return None;
        }

        let mut totals_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (tx, amount) in self.expense_amounts(history, base) {
            *totals_by_day.entry(tx.date).or_insert(0.0) += amount;
        }

        if totals_by_day.is_empty() {
            return Some(PredictionResult {
                predicted_total: 0.0,
                low_estimate: 0.0,
                high_estimate: 0.0,
                explanation: NO_BURN_EXPLANATION.to_string(),
                trend: Trend::Stable,
                confidence_score: 1.0,
                category_breakdown: BTreeMap::new(),
            });
        }

        let avg_daily = totals_by_day.values().sum::<f64>() / totals_by_day.len() as f64;
        let predicted_total = avg_daily * FORECAST_HORIZON_DAYS as f64;

        let by_category = self.expense_by_category(history, base);
        let total_expense: f64 = by_category.iter().map(|(_, amount)| amount).sum();
        let category_breakdown: BTreeMap<_, _> = by_category
            .into_iter()
            .map(|(category, amount)| {
                (category, amount / nonzero(total_expense) * predicted_total)
            })
            .collect();

        debug!(
            insight = InsightType::Forecast.as_str(),
            active_days = totals_by_day.len(),
            avg_daily,
            predicted_total,
            "Forecast computed"
        );

        Some(PredictionResult {
            predicted_total,
            low_estimate: predicted_total * FORECAST_LOW_FACTOR,
            high_estimate: predicted_total * FORECAST_HIGH_FACTOR,
            explanation: format!(
                "Forecasting {}-day burn rate at {} based on {} operations. Initial logic accuracy verified.",
                FORECAST_HORIZON_DAYS,
                format_value(predicted_total, base),
                history.len()
            ),
            trend: Trend::Stable,
            confidence_score: FORECAST_CONFIDENCE,
            category_breakdown,
        })
    }
}
