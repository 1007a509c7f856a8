//! RupeeX Core Library
//!
//! On-device analysis for the RupeeX personal finance tracker:
//! - Currency codes, the conversion rate table, and money formatting
//! - Domain models (transactions, categories, budgets, savings goals)
//! - Local Intelligence Engine (anomaly score, summary, 30-day forecast)
//! - Ledger reports (cash flow, category breakdown, budgets, goals)
//! - Ledger snapshot loading from JSON or CSV

pub mod currency;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod reports;

/// Transaction builders for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use currency::{format_value, CurrencyCode, RateTable};
pub use error::{Error, Result};
pub use insights::{IntelligenceEngine, PredictionResult, Trend};
pub use ledger::{Ledger, LedgerFormat};
pub use models::{
    Budget, CandidateTransaction, Category, SavingsGoal, Transaction, TransactionSource,
    TransactionType,
};
