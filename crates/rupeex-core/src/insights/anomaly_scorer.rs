//! Anomaly Scorer
//!
//! Scores a candidate transaction by how far its amount sits from the user's
//! history in the same expense category (z-score, scaled so that three
//! standard deviations or more maps to 1.0).

use tracing::debug;

use crate::currency::CurrencyCode;
use crate::models::{CandidateTransaction, Transaction};

use super::engine::{mean_std, IntelligenceEngine};
use super::types::{InsightType, MIN_CATEGORY_HISTORY};

/// Score returned when the category history has no spread and the candidate
/// is above it
const FLAT_HISTORY_EXCEEDED_SCORE: f64 = 0.5;

impl IntelligenceEngine {
    /// Anomaly score in [0, 1] for `candidate` against `history`
    ///
    /// Only EXPENSE entries in the candidate's category are considered. With
    /// fewer than two such entries the score is 0. A candidate that carries a
    /// currency is converted into `base` first; one without is assumed to be
    /// in `base` already.
    pub fn anomaly_score(
        &self,
        candidate: &CandidateTransaction,
        history: &[Transaction],
        base: CurrencyCode,
    ) -> f64 {
        let amounts: Vec<f64> = history
            .iter()
            .filter(|t| t.is_expense() && t.category == candidate.category)
            .map(|t| self.to_base(t, base))
            .collect();

        if amounts.len() < MIN_CATEGORY_HISTORY {
            debug!(
                insight = InsightType::AnomalyScore.as_str(),
                category = %candidate.category,
                points = amounts.len(),
                "Not enough category history to score"
            );
            return 0.0;
        }

        let (mean, std_dev) = mean_std(&amounts);

        let raw = candidate.amount.unwrap_or(0.0);
        let amount = match candidate.currency {
            Some(currency) => self.rates().convert(raw, currency, base),
            None => raw,
        };

        if std_dev == 0.0 {
            return if amount > mean {
                FLAT_HISTORY_EXCEEDED_SCORE
            } else {
                0.0
            };
        }

        let z = (amount - mean).abs() / std_dev;
        // min/max discard NaN
        (z / 3.0).min(1.0).max(0.0)
    }
}
