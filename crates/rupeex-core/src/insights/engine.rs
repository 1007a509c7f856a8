//! Intelligence Engine - holds the rate table and shared aggregation helpers

use crate::currency::{CurrencyCode, RateTable};
use crate::models::{Category, Transaction};

/// On-device statistical analysis over a ledger snapshot
///
/// The engine is immutable: every operation is a pure function of its
/// arguments and the rate table supplied at construction.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceEngine {
    rates: RateTable,
}

impl IntelligenceEngine {
    /// Create an engine over an explicit rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// The rate table used for normalization
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Amount of `tx` expressed in `base`
    pub(crate) fn to_base(&self, tx: &Transaction, base: CurrencyCode) -> f64 {
        self.rates.convert(tx.amount, tx.currency, base)
    }

    /// Converted amounts of every expense in `txs`
    pub(crate) fn expense_amounts<'a>(
        &'a self,
        txs: &'a [Transaction],
        base: CurrencyCode,
    ) -> impl Iterator<Item = (&'a Transaction, f64)> + 'a {
        txs.iter()
            .filter(|t| t.is_expense())
            .map(move |t| (t, self.to_base(t, base)))
    }

    /// Expense totals per category, in first-seen order
    pub(crate) fn expense_by_category(
        &self,
        txs: &[Transaction],
        base: CurrencyCode,
    ) -> Vec<(Category, f64)> {
        let mut totals: Vec<(Category, f64)> = Vec::new();
        for (tx, amount) in self.expense_amounts(txs, base) {
            match totals.iter_mut().find(|(c, _)| *c == tx.category) {
                Some((_, sum)) => *sum += amount,
                None => totals.push((tx.category, amount)),
            }
        }
        totals
    }
}

/// Arithmetic mean and population standard deviation
pub(crate) fn mean_std(vals: &[f64]) -> (f64, f64) {
    if vals.is_empty() {
        return (0.0, 0.0);
    }
    let n = vals.len() as f64;
    let mean = vals.iter().sum::<f64>() / n;
    let sq_diff: f64 = vals.iter().map(|v| (v - mean).powi(2)).sum();
    (mean, (sq_diff / n).sqrt())
}

/// Guard a denominator the way the dashboards do: zero becomes one
pub(crate) fn nonzero(denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        denominator
    }
}
