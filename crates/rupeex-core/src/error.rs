//! Error types for RupeeX

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unsupported ledger format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
