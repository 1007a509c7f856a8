//! Local Intelligence Engine - on-device statistical insights
//!
//! Pure computations over a ledger snapshot that the caller has already
//! loaded. Nothing here performs I/O or keeps state between calls.
//!
//! ## Analyses
//!
//! - **Anomaly Scorer** - How unusual a new expense is for its category
//! - **Spending Summary** - One-sentence read of where money is going
//! - **Expense Forecaster** - 30-day spend projection with category split
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rupeex_core::insights::IntelligenceEngine;
//!
//! let engine = IntelligenceEngine::new(RateTable::load(None)?);
//! let summary = engine.summary(&ledger.transactions, CurrencyCode::Usd);
//! let forecast = engine.prediction(&ledger.transactions, CurrencyCode::Usd);
//! ```

pub mod anomaly_scorer;
pub mod engine;
pub mod expense_forecaster;
pub mod spending_summary;
pub mod types;

pub use engine::IntelligenceEngine;
pub use expense_forecaster::NO_BURN_EXPLANATION;
pub use spending_summary::{EMPTY_LEDGER_SUMMARY, NO_OUTFLOW_SUMMARY};
pub use types::{
    InsightType, PredictionResult, Trend, FORECAST_CONFIDENCE, FORECAST_HIGH_FACTOR,
    FORECAST_HORIZON_DAYS, FORECAST_LOW_FACTOR, MIN_CATEGORY_HISTORY, MIN_FORECAST_HISTORY,
    MOMENTUM_WINDOW_DAYS,
};
