//! Test utilities for rupeex-core
//!
//! Terse transaction builders for unit and integration tests. Dates are
//! given as `YYYY-MM-DD` strings.

use chrono::NaiveDate;

use crate::currency::CurrencyCode;
use crate::models::{Category, Transaction, TransactionType};

/// Parse a `YYYY-MM-DD` date, panicking on bad input
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}

/// USD expense
pub fn expense(on: &str, amount: f64, category: Category) -> Transaction {
    expense_in(on, amount, CurrencyCode::Usd, category)
}

/// Expense in an explicit currency
pub fn expense_in(on: &str, amount: f64, currency: CurrencyCode, category: Category) -> Transaction {
    Transaction::new(date(on), amount, currency, category, TransactionType::Expense)
}

/// USD income
pub fn income(on: &str, amount: f64, category: Category) -> Transaction {
    Transaction::new(
        date(on),
        amount,
        CurrencyCode::Usd,
        category,
        TransactionType::Income,
    )
}

/// Demo ledger mixing USD and INR entries across a few weeks
pub fn demo_transactions() -> Vec<Transaction> {
    vec![
        expense("2026-01-04", 85.50, Category::FoodAndDining).with_description("Whole Foods Grocery Shopping"),
        expense_in("2026-01-04", 3500.0, CurrencyCode::Inr, Category::FoodAndDining)
            .with_description("Swiggy Food Delivery"),
        expense("2026-01-03", 45.0, Category::Entertainment).with_description("Netflix Subscription"),
        income("2026-01-03", 5000.0, Category::Salary).with_description("Monthly Salary"),
        expense("2026-01-02", 120.0, Category::Shopping).with_description("Running Shoes"),
        expense_in("2025-12-30", 2500.0, CurrencyCode::Inr, Category::Transport)
            .with_description("Ride to Airport"),
        expense("2025-12-29", 450.0, Category::Utilities).with_description("Electric Bill"),
        expense("2025-12-28", 65.0, Category::FoodAndDining).with_description("Coffee Beans"),
        expense("2025-12-27", 1200.0, Category::Rent).with_description("Rent Payment"),
        expense("2025-12-26", 89.99, Category::Shopping).with_description("Prime Membership"),
    ]
}
