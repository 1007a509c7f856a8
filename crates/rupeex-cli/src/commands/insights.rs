//! Engine command implementations (summary, forecast, anomaly)

use anyhow::{Context, Result};
use rupeex_core::insights::MIN_FORECAST_HISTORY;
use rupeex_core::{format_value, CandidateTransaction, Category};
use serde_json::json;

use super::{parse_currency, print_json, Session};

/// Anomaly score at or above which an expense is called out
const ANOMALY_ALERT: f64 = 0.7;

pub fn cmd_summary(session: &Session, json: bool) -> Result<()> {
    let summary = session
        .engine
        .summary(&session.ledger.transactions, session.base);

    if json {
        return print_json(&json!({ "summary": summary }));
    }

    println!();
    println!("🧠 Local Summary ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {}", summary);
    Ok(())
}

pub fn cmd_forecast(session: &Session, json: bool) -> Result<()> {
    let history = &session.ledger.transactions;
    let forecast = session.engine.prediction(history, session.base);

    if json {
        return print_json(&json!({
            "forecast": forecast,
            "transactions": history.len(),
            "required": MIN_FORECAST_HISTORY,
        }));
    }

    println!();
    println!("🔮 30-Day Forecast ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");

    let Some(forecast) = forecast else {
        println!("   Insufficient ledger history.");
        println!(
            "   At least {} transactions are needed to build a model. Currently tracking: {}/{}",
            MIN_FORECAST_HISTORY,
            history.len(),
            MIN_FORECAST_HISTORY
        );
        return Ok(());
    };

    println!(
        "   Predicted: {}",
        format_value(forecast.predicted_total, session.base)
    );
    println!(
        "   Range:     {} - {}",
        format_value(forecast.low_estimate, session.base),
        format_value(forecast.high_estimate, session.base)
    );
    println!(
        "   Trend: {}   Confidence: {:.0}%",
        forecast.trend,
        forecast.confidence_score * 100.0
    );
    println!("   {}", forecast.explanation);

    if !forecast.category_breakdown.is_empty() {
        let mut breakdown: Vec<(&Category, &f64)> = forecast.category_breakdown.iter().collect();
        breakdown.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

        println!();
        println!("   {:20} │ {:>14}", "Category", "Projected");
        println!("   ─────────────────────┼───────────────");
        for (category, amount) in breakdown {
            println!(
                "   {:20} │ {:>14}",
                category.label(),
                format_value(*amount, session.base)
            );
        }
    }

    Ok(())
}

pub fn cmd_anomaly(
    session: &Session,
    amount: f64,
    category: &str,
    currency: Option<&str>,
    json: bool,
) -> Result<()> {
    let category: Category = category
        .parse()
        .with_context(|| format!("Unknown category '{}'", category))?;

    let mut candidate = CandidateTransaction::new(amount, category);
    if let Some(code) = currency {
        candidate = candidate.with_currency(parse_currency(code)?);
    }

    let score = session
        .engine
        .anomaly_score(&candidate, &session.ledger.transactions, session.base);

    if json {
        return print_json(&json!({
            "amount": amount,
            "currency": candidate.currency.unwrap_or(session.base),
            "category": category,
            "score": score,
        }));
    }

    let shown_in = candidate.currency.unwrap_or(session.base);
    println!();
    println!(
        "📈 Anomaly check: {} in {}",
        format_value(amount, shown_in),
        category
    );
    println!("   Score: {:.2}", score);
    if score >= ANOMALY_ALERT {
        println!("   ⚠️  Unusual for this category");
    } else {
        println!("   ✅ Within normal range");
    }

    Ok(())
}
