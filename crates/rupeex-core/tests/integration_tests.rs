//! Integration tests for rupeex-core
//!
//! These tests exercise the full load → analyze workflow over ledger files.

use std::io::Write;

use chrono::NaiveDate;
use rupeex_core::{
    insights::{EMPTY_LEDGER_SUMMARY, NO_OUTFLOW_SUMMARY},
    reports, CandidateTransaction, Category, CurrencyCode, IntelligenceEngine, Ledger, RateTable,
    Trend,
};

/// Demo ledger: one month of mixed USD/INR activity with budgets and a goal
fn demo_ledger_json() -> &'static str {
    r#"{
        "baseCurrency": "USD",
        "transactions": [
            { "id": "tx_001", "date": "2026-01-04", "amount": 85.50, "currency": "USD", "description": "Whole Foods Grocery Shopping", "category": "Food & Dining", "type": "EXPENSE", "source": "MANUAL" },
            { "id": "tx_002", "date": "2026-01-04", "amount": 3500, "currency": "INR", "description": "Swiggy Food Delivery", "category": "Food & Dining", "type": "EXPENSE", "source": "AI_NLP", "confidence": 0.92 },
            { "id": "tx_003", "date": "2026-01-03", "amount": 45.00, "currency": "USD", "description": "Netflix Subscription", "category": "Entertainment", "type": "EXPENSE", "isRecurring": true },
            { "id": "tx_004", "date": "2026-01-03", "amount": 5000, "currency": "USD", "description": "Monthly Salary", "category": "Salary", "type": "INCOME", "isRecurring": true },
            { "id": "tx_005", "date": "2026-01-02", "amount": 120.00, "currency": "USD", "description": "Running Shoes", "category": "Shopping", "type": "EXPENSE", "source": "AI_SCAN" },
            { "id": "tx_006", "date": "2025-12-30", "amount": 2500, "currency": "INR", "description": "Ride to Airport", "category": "Transport", "type": "EXPENSE" },
            { "id": "tx_007", "date": "2025-12-29", "amount": 450.00, "currency": "USD", "description": "Electric Bill", "category": "Utilities", "type": "EXPENSE" },
            { "id": "tx_008", "date": "2025-12-28", "amount": 65.00, "currency": "USD", "description": "Coffee Beans", "category": "Food & Dining", "type": "EXPENSE" },
            { "id": "tx_009", "date": "2025-12-27", "amount": 1200, "currency": "USD", "description": "Rent Payment", "category": "Rent", "type": "EXPENSE" },
            { "id": "tx_010", "date": "2025-12-26", "amount": 89.99, "currency": "USD", "description": "Prime Membership", "category": "Shopping", "type": "EXPENSE" }
        ],
        "budgets": [
            { "category": "Food & Dining", "limit": 400, "currency": "USD" },
            { "category": "Rent", "limit": 100000, "currency": "INR" }
        ],
        "goals": [
            { "name": "Emergency Fund", "target": 10000, "current": 2500, "currency": "USD" }
        ]
    }"#
}

fn write_temp(ext: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(ext)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Load → Analyze
// =============================================================================

#[test]
fn test_json_ledger_full_workflow() {
    let file = write_temp(".json", demo_ledger_json());
    let ledger = Ledger::load(file.path()).expect("Failed to load ledger");

    assert_eq!(ledger.transactions.len(), 10);
    assert_eq!(ledger.base_currency, Some(CurrencyCode::Usd));

    let engine = IntelligenceEngine::new(RateTable::builtin());
    let base = CurrencyCode::Usd;

    // Rent dominates: 1200 of ~2127 total expense
    let summary = engine.summary_as_of(&ledger.transactions, base, ymd(2026, 1, 5));
    assert!(
        summary.starts_with("Analysis shows Rent is your primary capital attractor at 56% of outflow."),
        "{}",
        summary
    );
    // Jan 2-4 spend (~292) is below a quarter of total (~532)
    assert!(summary.ends_with("stable historical parameters."));

    let forecast = engine
        .prediction(&ledger.transactions, base)
        .expect("Ten transactions is enough to forecast");
    let breakdown_sum: f64 = forecast.category_breakdown.values().sum();
    assert!((breakdown_sum - forecast.predicted_total).abs() < 1e-6 * forecast.predicted_total);
    assert_eq!(forecast.trend, Trend::Stable);
    assert!(forecast.explanation.contains("based on 10 operations"));
    assert!(!forecast.category_breakdown.contains_key(&Category::Salary));

    // Food history: 85.5, ~41.9, 65 -> a 500 dinner is far outside it
    let candidate = CandidateTransaction::new(500.0, Category::FoodAndDining);
    let score = engine.anomaly_score(&candidate, &ledger.transactions, base);
    assert_eq!(score, 1.0);

    let typical = CandidateTransaction::new(64.0, Category::FoodAndDining);
    let score = engine.anomaly_score(&typical, &ledger.transactions, base);
    assert!(score < 0.1, "typical spend scored {}", score);
}

#[test]
fn test_json_ledger_reports() {
    let ledger = Ledger::from_json_reader(demo_ledger_json().as_bytes()).unwrap();
    let rates = RateTable::builtin();
    let base = CurrencyCode::Usd;

    let flow = reports::cash_flow(&rates, &ledger.transactions, base);
    assert_eq!(flow.income, 5000.0);
    assert!((flow.balance - (flow.income - flow.expense)).abs() < 1e-9);

    let categories = reports::category_breakdown(&rates, &ledger.transactions, base);
    assert_eq!(categories[0].category, Category::Rent);
    let pct: f64 = categories.iter().map(|c| c.percentage).sum();
    assert!((pct - 100.0).abs() < 1e-9);

    let budgets = reports::budget_status(&rates, &ledger.budgets, &ledger.transactions, base);
    assert_eq!(budgets.len(), 2);
    // Food: 85.5 + 41.92 + 65 of 400
    assert!((budgets[0].percentage - 48.1).abs() < 0.1);
    // Rent: 1200 USD of 100000 INR (~1197.6 USD)
    assert_eq!(budgets[1].percentage, 100.0);
    assert!(budgets[1].near_limit);

    let goals = reports::goal_progress(&rates, &ledger.goals, base);
    assert_eq!(goals[0].percentage, 25.0);
}

#[test]
fn test_csv_ledger_forecast() {
    let csv = "date,amount,currency,category,type,description\n\
               2026-01-05,10,USD,Food,EXPENSE,Lunch\n\
               2026-01-12,20,USD,Food,EXPENSE,Lunch\n\
               2026-01-19,30,USD,Food,EXPENSE,Lunch\n";
    let file = write_temp(".csv", csv);

    let ledger = Ledger::load(file.path()).unwrap();
    let engine = IntelligenceEngine::default();
    let forecast = engine.prediction(&ledger.transactions, CurrencyCode::Usd).unwrap();

    assert!((forecast.predicted_total - 600.0).abs() < 1e-9);
    assert!((forecast.low_estimate - 510.0).abs() < 1e-9);
    assert!((forecast.high_estimate - 690.0).abs() < 1e-9);
    assert!((forecast.category_breakdown[&Category::FoodAndDining] - 600.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_ledgers() {
    let engine = IntelligenceEngine::default();

    let empty = Ledger::from_json_reader("[]".as_bytes()).unwrap();
    assert_eq!(
        engine.summary(&empty.transactions, CurrencyCode::Usd),
        EMPTY_LEDGER_SUMMARY
    );
    assert!(engine.prediction(&empty.transactions, CurrencyCode::Usd).is_none());

    let income_only = Ledger::from_json_reader(
        r#"[{"date":"2026-01-01","amount":100,"currency":"EUR","category":"Salary","type":"INCOME"}]"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        engine.summary(&income_only.transactions, CurrencyCode::Eur),
        NO_OUTFLOW_SUMMARY
    );

    // Two expenses are below the three-transaction floor
    let two = Ledger::from_json_reader(
        r#"[
            {"date":"2026-01-01","amount":100,"currency":"USD","category":"Rent","type":"EXPENSE"},
            {"date":"2026-01-02","amount":100,"currency":"USD","category":"Rent","type":"EXPENSE"}
        ]"#
        .as_bytes(),
    )
    .unwrap();
    assert!(engine.prediction(&two.transactions, CurrencyCode::Usd).is_none());
}

#[test]
fn test_rate_override_changes_normalization() {
    let rates_file = write_temp(".toml", "[rates]\nINR = 100.0\n");
    let rates = RateTable::load(Some(rates_file.path())).unwrap();
    let engine = IntelligenceEngine::new(rates);

    let ledger = Ledger::from_json_reader(
        r#"[
            {"date":"2026-01-01","amount":1000,"currency":"INR","category":"Transport","type":"EXPENSE"},
            {"date":"2026-01-02","amount":3000,"currency":"INR","category":"Transport","type":"EXPENSE"},
            {"date":"2026-01-03","amount":2000,"currency":"INR","category":"Transport","type":"EXPENSE"}
        ]"#
        .as_bytes(),
    )
    .unwrap();

    // 10, 30, 20 USD per day at 100 INR/USD
    let forecast = engine.prediction(&ledger.transactions, CurrencyCode::Usd).unwrap();
    assert!((forecast.predicted_total - 600.0).abs() < 1e-9);
    assert!(forecast.explanation.contains("$600.00"));
}
