//! Report command implementations

use anyhow::Result;
use rupeex_core::format_value;
use rupeex_core::reports::{self, NEAR_LIMIT_PERCENT};
use serde_json::json;

use super::{print_json, truncate, Session};

pub fn cmd_report_overview(session: &Session, json: bool) -> Result<()> {
    let txs = &session.ledger.transactions;
    let flow = reports::cash_flow(session.rates(), txs, session.base);
    let utilization =
        reports::budget_utilization(session.rates(), &session.ledger.budgets, txs, session.base);

    if json {
        return print_json(&json!({
            "baseCurrency": session.base,
            "cashFlow": flow,
            "budgetUtilization": utilization,
            "transactions": txs.len(),
        }));
    }

    println!();
    println!("📊 Overview ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Transactions:       {}", txs.len());
    println!("   Income:             {}", format_value(flow.income, session.base));
    println!("   Expense:            {}", format_value(flow.expense, session.base));
    println!("   Balance:            {}", format_value(flow.balance, session.base));
    if !session.ledger.budgets.is_empty() {
        println!("   Budget utilization: {:.1}%", utilization);
    }
    Ok(())
}

pub fn cmd_report_categories(session: &Session, json: bool) -> Result<()> {
    let categories =
        reports::category_breakdown(session.rates(), &session.ledger.transactions, session.base);

    if json {
        return print_json(&categories);
    }

    println!();
    println!("📊 Spending by Category ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");

    if categories.is_empty() {
        println!("   No expenses recorded.");
        return Ok(());
    }

    println!(
        "   {:20} │ {:>14} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ─────────────────────┼────────────────┼────────┼───────");
    for cat in &categories {
        println!(
            "   {:20} │ {:>14} │ {:>5.1}% │ {:>5}",
            cat.category.label(),
            format_value(cat.amount, session.base),
            cat.percentage,
            cat.transaction_count
        );
    }
    Ok(())
}

pub fn cmd_report_budgets(session: &Session, json: bool) -> Result<()> {
    let statuses = reports::budget_status(
        session.rates(),
        &session.ledger.budgets,
        &session.ledger.transactions,
        session.base,
    );

    if json {
        return print_json(&statuses);
    }

    println!();
    println!("🎯 Budgets ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");

    if statuses.is_empty() {
        println!("   No budgets defined in the ledger.");
        return Ok(());
    }

    println!(
        "   {:20} │ {:>14} │ {:>14} │ {:>6}",
        "Category", "Spent", "Limit", "Used"
    );
    println!("   ─────────────────────┼────────────────┼────────────────┼───────");
    for status in &statuses {
        let flag = if status.near_limit { " ⚠️" } else { "" };
        println!(
            "   {:20} │ {:>14} │ {:>14} │ {:>5.0}%{}",
            status.category.label(),
            format_value(status.spent, session.base),
            format_value(status.limit, session.base),
            status.percentage,
            flag
        );
    }

    if statuses.iter().any(|s| s.near_limit) {
        println!();
        println!("   ⚠️  = above {:.0}% of limit", NEAR_LIMIT_PERCENT);
    }
    Ok(())
}

pub fn cmd_report_goals(session: &Session, json: bool) -> Result<()> {
    let progress = reports::goal_progress(session.rates(), &session.ledger.goals, session.base);

    if json {
        return print_json(&progress);
    }

    println!();
    println!("🏦 Savings Goals ({})", session.base);
    println!("   ─────────────────────────────────────────────────────────────");

    if progress.is_empty() {
        println!("   No savings goals defined in the ledger.");
        return Ok(());
    }

    for goal in &progress {
        let deadline = goal
            .deadline
            .map(|d| format!(" (by {})", d))
            .unwrap_or_default();
        println!("   {}{}", truncate(&goal.name, 40), deadline);
        println!(
            "      {} of {}  {:.0}%  ({} to go)",
            format_value(goal.current, session.base),
            format_value(goal.target, session.base),
            goal.percentage,
            format_value(goal.remaining, session.base)
        );
    }
    Ok(())
}

pub fn cmd_report_daily(session: &Session, days: usize, json: bool) -> Result<()> {
    let flow = reports::daily_flow(
        session.rates(),
        &session.ledger.transactions,
        session.base,
        days,
    );

    if json {
        return print_json(&flow);
    }

    println!();
    println!("📅 Daily Flow ({}, last {} active days)", session.base, days);
    println!("   ─────────────────────────────────────────────────────────────");

    if flow.is_empty() {
        println!("   No transactions recorded.");
        return Ok(());
    }

    println!("   {:10} │ {:>14} │ {:>14}", "Date", "Income", "Expense");
    println!("   ───────────┼────────────────┼───────────────");
    for day in &flow {
        println!(
            "   {:10} │ {:>14} │ {:>14}",
            day.date,
            format_value(day.income, session.base),
            format_value(day.expense, session.base)
        );
    }
    Ok(())
}
