//! Domain models for RupeeX

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::currency::CurrencyCode;
use crate::error::Error;

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" => Ok(Self::Income),
            "expense" | "debit" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a transaction entered the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionSource {
    /// Typed in by the user
    #[default]
    Manual,
    /// Extracted from a natural-language sentence
    AiNlp,
    /// Extracted from a scanned receipt
    AiScan,
}

/// Spending and income categories
///
/// Serialized as the display label (e.g. `"Food & Dining"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    FoodAndDining,
    Shopping,
    Transport,
    Utilities,
    Rent,
    Entertainment,
    Salary,
    Freelance,
    Investments,
    Health,
    Education,
    Misc,
}

impl Category {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Entertainment => "Entertainment",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Misc => "Misc",
        }
    }

    /// Stable snake_case key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "food_and_dining",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Rent => "rent",
            Self::Entertainment => "entertainment",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Investments => "investments",
            Self::Health => "health",
            Self::Education => "education",
            Self::Misc => "misc",
        }
    }

    /// Hex color used for charts
    pub fn color(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "#6366f1",
            Self::Shopping => "#8b5cf6",
            Self::Transport => "#06b6d4",
            Self::Utilities => "#10b981",
            Self::Rent => "#f59e0b",
            Self::Entertainment => "#ec4899",
            Self::Salary => "#2dd4bf",
            Self::Freelance => "#84cc16",
            Self::Investments => "#6366f1",
            Self::Health => "#ef4444",
            Self::Education => "#a855f7",
            Self::Misc => "#94a3b8",
        }
    }

    /// Get all categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Shopping,
            Self::Transport,
            Self::Utilities,
            Self::Rent,
            Self::Entertainment,
            Self::Salary,
            Self::Freelance,
            Self::Investments,
            Self::Health,
            Self::Education,
            Self::Misc,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if matches!(needle.as_str(), "food" | "dining" | "food and dining") {
            return Ok(Self::FoodAndDining);
        }
        Self::all()
            .iter()
            .find(|c| c.label().to_lowercase() == needle || c.as_str() == needle)
            .copied()
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts `YYYY-MM-DD` or any ISO-8601 timestamp (date part only)
pub(crate) fn parse_date(s: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d")
}

fn deserialize_amount<'de, D>(d: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

fn deserialize_naive_date<'de, D>(d: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

fn deserialize_opt_naive_date<'de, D>(d: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(d)?;
    Ok(opt.and_then(|s| parse_date(&s).ok()))
}

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub date: NaiveDate,
    /// Missing or null amounts count as zero
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default)]
    pub source: TransactionSource,
    #[serde(default)]
    pub is_recurring: bool,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        currency: CurrencyCode,
        category: Category,
        kind: TransactionType,
    ) -> Self {
        Self {
            id: None,
            date,
            amount,
            currency,
            description: String::new(),
            category,
            kind,
            merchant: None,
            source: TransactionSource::Manual,
            is_recurring: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// A not-yet-recorded entry scored for anomalies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTransaction {
    #[serde(default)]
    pub amount: Option<f64>,
    pub category: Category,
    /// When absent the amount is taken to be in the analysis currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
}

impl CandidateTransaction {
    pub fn new(amount: f64, category: Category) -> Self {
        Self {
            amount: Some(amount),
            category,
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }
}

/// A monthly spending cap for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: Category,
    #[serde(default)]
    pub limit: f64,
    pub currency: CurrencyCode,
}

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub name: String,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub current: f64,
    pub currency: CurrencyCode,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_naive_date"
    )]
    pub deadline: Option<NaiveDate>,
}
