//! Ledger snapshot loading
//!
//! A ledger is the read-only snapshot the engine analyzes. It can come from:
//! - a JSON file: either a bare array of transactions, or an object with
//!   `transactions` and optional `baseCurrency`, `budgets`, `goals`
//! - a CSV file with columns `date,amount,currency,category,type[,description]`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::currency::CurrencyCode;
use crate::error::{Error, Result};
use crate::models::{parse_date, Budget, SavingsGoal, Transaction, TransactionType};

/// Supported ledger file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Json,
    Csv,
}

impl LedgerFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A transaction snapshot plus the user's budgets and goals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<CurrencyCode>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLedger {
    Bare(Vec<Transaction>),
    Full(Ledger),
}

impl Ledger {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    /// Load a ledger file, picking the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = LedgerFormat::from_path(path)?;
        let file = File::open(path)?;

        let ledger = match format {
            LedgerFormat::Json => Self::from_json_reader(file)?,
            LedgerFormat::Csv => Self::from_csv_reader(file)?,
        };

        info!(
            path = %path.display(),
            transactions = ledger.transactions.len(),
            budgets = ledger.budgets.len(),
            goals = ledger.goals.len(),
            "Loaded ledger"
        );
        Ok(ledger)
    }

    /// Parse a JSON ledger
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawLedger = serde_json::from_reader(reader)?;
        Ok(match raw {
            RawLedger::Bare(transactions) => Self::from_transactions(transactions),
            RawLedger::Full(ledger) => ledger,
        })
    }

    /// Parse a CSV ledger
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let required = |name: &str| {
            column(name)
                .ok_or_else(|| Error::InvalidData(format!("CSV ledger is missing a '{}' column", name)))
        };

        let date_col = required("date")?;
        let amount_col = required("amount")?;
        let currency_col = required("currency")?;
        let category_col = required("category")?;
        let type_col = required("type")?;
        let description_col = column("description");

        let mut transactions = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            // Header is line 1
            let line = i + 2;

            if record.iter().all(|f| f.is_empty()) {
                warn!(line, "Skipping empty CSV row");
                continue;
            }

            let field = |col: usize| record.get(col).unwrap_or("");
            let row_err = |what: &str, value: &str| {
                Error::InvalidData(format!("line {}: invalid {} '{}'", line, what, value))
            };

            let date = parse_date(field(date_col)).map_err(|_| row_err("date", field(date_col)))?;
            let amount = parse_amount(field(amount_col)).ok_or_else(|| row_err("amount", field(amount_col)))?;
            let currency: CurrencyCode = field(currency_col).parse()?;
            let category = field(category_col).parse()?;
            let kind: TransactionType = field(type_col)
                .parse()
                .map_err(|_| row_err("type", field(type_col)))?;

            let mut tx = Transaction::new(date, amount, currency, category, kind);
            if let Some(col) = description_col {
                tx = tx.with_description(field(col));
            }
            transactions.push(tx);
        }

        debug!("Parsed {} CSV ledger transactions", transactions.len());
        Ok(Self::from_transactions(transactions))
    }
}

/// Parse a non-negative finite amount, treating an empty field as zero
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
