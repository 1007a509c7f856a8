//! Spending Summary
//!
//! Produces the one-line portfolio summary shown on the dashboard: which
//! category dominates outflow, and whether the last few days were unusually
//! heavy.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use crate::currency::CurrencyCode;
use crate::models::Transaction;

use super::engine::{nonzero, IntelligenceEngine};
use super::types::{InsightType, MOMENTUM_WINDOW_DAYS};

pub const EMPTY_LEDGER_SUMMARY: &str =
    "Global ledger empty. Initiate entry to start tracking portfolio vectors.";

pub const NO_OUTFLOW_SUMMARY: &str =
    "Excellent capital accumulation detected. Wealth node showing zero outflow.";

const HIGH_MOMENTUM_CLAUSE: &str =
    "Momentum high: Significant capital flux detected in the last 72 hours.";

const STABLE_CLAUSE: &str =
    "Portfolio velocity is currently within stable historical parameters.";

impl IntelligenceEngine {
    /// Summary sentence for `transactions`, with "today" from the local clock
    pub fn summary(&self, transactions: &[Transaction], base: CurrencyCode) -> String {
        self.summary_as_of(transactions, base, Local::now().date_naive())
    }

    /// Summary sentence for `transactions` as seen on `today`
    pub fn summary_as_of(
        &self,
        transactions: &[Transaction],
        base: CurrencyCode,
        today: NaiveDate,
    ) -> String {
        if transactions.is_empty() {
            return EMPTY_LEDGER_SUMMARY.to_string();
        }

        let by_category = self.expense_by_category(transactions, base);
        if by_category.is_empty() {
            return NO_OUTFLOW_SUMMARY.to_string();
        }

        let total: f64 = by_category.iter().map(|(_, amount)| amount).sum();

        // Ties go to the category seen first
        let (top_category, top_amount) = by_category
            .iter()
            .copied()
            .fold(None, |best: Option<(_, f64)>, (c, a)| match best {
                Some((_, best_amount)) if best_amount >= a => best,
                _ => Some((c, a)),
            })
            .unwrap_or(by_category[0]);

        let percent = (top_amount / nonzero(total) * 100.0).round();

        let window_start = today - Duration::days(MOMENTUM_WINDOW_DAYS);
        let recent: f64 = self
            .expense_amounts(transactions, base)
            .filter(|(tx, _)| tx.date >= window_start)
            .map(|(_, amount)| amount)
            .sum();

        let momentum_high = recent > total / 4.0;
        debug!(
            insight = InsightType::Summary.as_str(),
            top = %top_category,
            total,
            recent,
            momentum_high,
            "Summary computed"
        );

        format!(
            "Analysis shows {} is your primary capital attractor at {:.0}% of outflow. {}",
            top_category,
            percent,
            if momentum_high {
                HIGH_MOMENTUM_CLAUSE
            } else {
                STABLE_CLAUSE
            }
        )
    }
}
