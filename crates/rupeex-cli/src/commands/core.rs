//! Core shared utilities
//!
//! This module contains:
//! - `load_rates` - Resolve the exchange rate table
//! - `open_session` - Load a ledger and build the engine around it
//! - `resolve_base` - Pick the base currency for a run

use std::path::Path;

use anyhow::{Context, Result};
use rupeex_core::{CurrencyCode, IntelligenceEngine, Ledger, RateTable};
use tracing::debug;

/// A loaded ledger plus everything needed to analyze it
pub struct Session {
    pub ledger: Ledger,
    pub engine: IntelligenceEngine,
    pub base: CurrencyCode,
}

impl Session {
    pub fn new(ledger: Ledger, rates: RateTable, base: CurrencyCode) -> Self {
        Self {
            ledger,
            engine: IntelligenceEngine::new(rates),
            base,
        }
    }

    pub fn rates(&self) -> &RateTable {
        self.engine.rates()
    }
}

/// Load rates from `--rates`, the data-dir override, or the built-in table
pub fn load_rates(path: Option<&Path>) -> Result<RateTable> {
    match path {
        Some(p) => RateTable::load(Some(p))
            .with_context(|| format!("Failed to load rates from {}", p.display())),
        None => RateTable::load(None).context("Failed to load exchange rates"),
    }
}

/// Parse a currency code argument
pub fn parse_currency(code: &str) -> Result<CurrencyCode> {
    code.parse::<CurrencyCode>().with_context(|| {
        let known: Vec<&str> = CurrencyCode::all().iter().map(|c| c.as_str()).collect();
        format!("Unknown currency '{}'. Available: {}", code, known.join(", "))
    })
}

/// Base currency priority: --base flag > ledger's baseCurrency > USD
pub fn resolve_base(flag: Option<&str>, ledger: &Ledger) -> Result<CurrencyCode> {
    if let Some(code) = flag {
        return parse_currency(code);
    }
    Ok(ledger.base_currency.unwrap_or(CurrencyCode::Usd))
}

/// Load the ledger file and set up the engine
pub fn open_session(ledger_path: &Path, base: Option<&str>, rates: RateTable) -> Result<Session> {
    if !ledger_path.exists() {
        anyhow::bail!(
            "Ledger not found: {}. Pass --ledger <file.json|file.csv>",
            ledger_path.display()
        );
    }

    let ledger = Ledger::load(ledger_path)
        .with_context(|| format!("Failed to load ledger {}", ledger_path.display()))?;
    let base = resolve_base(base, &ledger)?;
    debug!(base = %base, "Resolved base currency");

    Ok(Session::new(ledger, rates, base))
}
