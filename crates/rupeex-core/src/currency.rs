//! Currency codes, the conversion rate table, and money formatting
//!
//! Every rate is relative to a single reference currency (USD), so any
//! conversion goes `amount / rate[from] * rate[to]`.
//!
//! ## Configuration Resolution
//!
//! The embedded `config/rates.toml` is the only source of built-in rates.
//! The rate table is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/rupeex/config/rates.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! An override (data dir or explicit path) is layered over the embedded
//! table: codes missing from it keep their built-in rate.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/rates.toml");

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Inr,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Sgd,
    Aed,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Sgd => "SGD",
            Self::Aed => "AED",
        }
    }

    /// Display symbol prefixed to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "C$",
            Self::Chf => "Fr",
            Self::Cny => "¥",
            Self::Sgd => "S$",
            Self::Aed => "dh",
        }
    }

    /// Decimal places shown when formatting
    pub fn fraction_digits(&self) -> usize {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }

    /// Get all currency codes
    pub fn all() -> &'static [CurrencyCode] {
        &[
            Self::Inr,
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Jpy,
            Self::Aud,
            Self::Cad,
            Self::Chf,
            Self::Cny,
            Self::Sgd,
            Self::Aed,
        ]
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::all()
            .iter()
            .find(|c| c.as_str() == code)
            .copied()
            .ok_or_else(|| Error::UnknownCurrency(s.to_string()))
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable exchange rate table
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Table with the compiled-in rates from `config/rates.toml`
    pub fn builtin() -> Self {
        Self::layered(DEFAULT_CONFIG, HashMap::new())
            .expect("embedded rates.toml has a valid rate for every currency")
    }

    /// Load rates (explicit path, then data dir override, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = if let Some(path) = override_path {
            debug!(path = %path.display(), "Loading rate table");
            fs::read_to_string(path).map_err(|e| {
                Error::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
            })?
        } else {
            match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    debug!(path = %default_path.display(), "Loading rate table override");
                    fs::read_to_string(&default_path).map_err(|e| {
                        Error::InvalidConfig(format!("Failed to read rate config: {}", e))
                    })?
                }
                _ => return Ok(Self::builtin()),
            }
        };

        Self::from_toml(&content)
    }

    /// Parse a rate table from TOML content, layered over the built-in rates
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::layered(content, Self::builtin().rates)
    }

    /// Apply the `[rates]` in `content` on top of `base`
    ///
    /// The result must hold a rate for every currency.
    fn layered(content: &str, base: HashMap<CurrencyCode, f64>) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid rate TOML: {}", e)))?;

        let mut table = Self { rates: base };

        for (code, rate) in raw.rates.unwrap_or_default() {
            let Ok(currency) = code.parse::<CurrencyCode>() else {
                warn!(code = %code, "Skipping unknown currency in rate config");
                continue;
            };

            if !rate.is_finite() || rate <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "Rate for {} must be a positive number, got {}",
                    currency, rate
                )));
            }

            table.rates.insert(currency, rate);
        }

        if let Some(missing) = CurrencyCode::all()
            .iter()
            .find(|c| !table.rates.contains_key(c))
        {
            return Err(Error::InvalidConfig(format!("No rate for {}", missing)));
        }

        Ok(table)
    }

    /// Rate of `currency` relative to the reference currency
    pub fn rate(&self, currency: CurrencyCode) -> f64 {
        // Construction guarantees every currency is present
        self.rates[&currency]
    }

    /// Convert an amount between currencies via the reference currency
    pub fn convert(&self, amount: f64, from: CurrencyCode, to: CurrencyCode) -> f64 {
        if from == to {
            return amount;
        }
        amount / self.rate(from) * self.rate(to)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("rupeex").join("config").join("rates.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    rates: Option<HashMap<String, f64>>,
}

/// Format an amount with the currency symbol and thousands separators
///
/// `format_value(1234.5, CurrencyCode::Usd)` gives `"$1,234.50"`.
pub fn format_value(amount: f64, currency: CurrencyCode) -> String {
    let digits = currency.fraction_digits();
    let fixed = format!("{:.*}", digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounded-away values like -0.001 shouldn't render as "-0.00"
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}{}.{}", currency.symbol(), sign, grouped, frac),
        None => format!("{}{}{}", currency.symbol(), sign, grouped),
    }
}
