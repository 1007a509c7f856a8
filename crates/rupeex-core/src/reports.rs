//! Ledger reports
//!
//! Aggregations behind the dashboard, reports, and budgets screens. All
//! amounts are normalized into the requested base currency.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, RateTable};
use crate::models::{Budget, Category, SavingsGoal, Transaction, TransactionType};

/// Budget usage (percent) above which a budget is flagged
pub const NEAR_LIMIT_PERCENT: f64 = 90.0;

/// Days shown in the dashboard flow chart
pub const DEFAULT_DAILY_FLOW_DAYS: usize = 15;

/// Income vs expense totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: Category,
    /// Chart color for the category
    pub color: String,
    pub amount: f64,
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Spend against a category budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: Category,
    pub spent: f64,
    pub limit: f64,
    /// Capped at 100
    pub percentage: f64,
    pub near_limit: bool,
}

/// Progress toward a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub name: String,
    pub current: f64,
    pub target: f64,
    /// Capped at 100
    pub percentage: f64,
    pub remaining: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Income and expense on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

fn percent_of(part: f64, whole: f64) -> f64 {
    let whole = if whole == 0.0 { 1.0 } else { whole };
    part / whole * 100.0
}

fn sum_where(
    rates: &RateTable,
    txs: &[Transaction],
    base: CurrencyCode,
    pred: impl Fn(&Transaction) -> bool,
) -> f64 {
    txs.iter()
        .filter(|t| pred(t))
        .map(|t| rates.convert(t.amount, t.currency, base))
        .sum()
}

/// Total income, total expense, and the balance between them
pub fn cash_flow(rates: &RateTable, txs: &[Transaction], base: CurrencyCode) -> CashFlow {
    let income = sum_where(rates, txs, base, |t| t.is_income());
    let expense = sum_where(rates, txs, base, |t| t.is_expense());
    CashFlow {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense per category, largest first
pub fn category_breakdown(
    rates: &RateTable,
    txs: &[Transaction],
    base: CurrencyCode,
) -> Vec<CategorySpending> {
    let mut totals: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for tx in txs.iter().filter(|t| t.is_expense()) {
        let entry = totals.entry(tx.category).or_insert((0.0, 0));
        entry.0 += rates.convert(tx.amount, tx.currency, base);
        entry.1 += 1;
    }

    let total: f64 = totals.values().map(|(amount, _)| amount).sum();

    let mut categories: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategorySpending {
            category,
            color: category.color().to_string(),
            amount,
            percentage: percent_of(amount, total),
            transaction_count: count,
        })
        .collect();

    categories.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    categories
}

/// Spend against each budget
pub fn budget_status(
    rates: &RateTable,
    budgets: &[Budget],
    txs: &[Transaction],
    base: CurrencyCode,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|b| {
            let spent = sum_where(rates, txs, base, |t| {
                t.kind == TransactionType::Expense && t.category == b.category
            });
            let limit = rates.convert(b.limit, b.currency, base);
            let percentage = percent_of(spent, limit).min(100.0);
            BudgetStatus {
                category: b.category,
                spent,
                limit,
                percentage,
                near_limit: percentage > NEAR_LIMIT_PERCENT,
            }
        })
        .collect()
}

/// Combined spend over combined limit across all budgets (percent, capped)
pub fn budget_utilization(
    rates: &RateTable,
    budgets: &[Budget],
    txs: &[Transaction],
    base: CurrencyCode,
) -> f64 {
    if budgets.is_empty() {
        return 0.0;
    }

    let statuses = budget_status(rates, budgets, txs, base);
    let total_limit: f64 = statuses.iter().map(|s| s.limit).sum();
    let total_spent: f64 = statuses.iter().map(|s| s.spent).sum();

    if total_limit > 0.0 {
        (total_spent / total_limit * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Progress toward each savings goal
pub fn goal_progress(
    rates: &RateTable,
    goals: &[SavingsGoal],
    base: CurrencyCode,
) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|g| {
            let current = rates.convert(g.current, g.currency, base);
            let target = rates.convert(g.target, g.currency, base);
            GoalProgress {
                name: g.name.clone(),
                current,
                target,
                percentage: percent_of(current, target).min(100.0),
                remaining: (target - current).max(0.0),
                deadline: g.deadline,
            }
        })
        .collect()
}

/// Per-day income and expense, oldest first, keeping the most recent `days`
pub fn daily_flow(
    rates: &RateTable,
    txs: &[Transaction],
    base: CurrencyCode,
    days: usize,
) -> Vec<DailyFlow> {
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for tx in txs {
        let amount = rates.convert(tx.amount, tx.currency, base);
        let entry = by_day.entry(tx.date).or_insert((0.0, 0.0));
        match tx.kind {
            TransactionType::Income => entry.0 += amount,
            TransactionType::Expense => entry.1 += amount,
        }
    }

    let skip = by_day.len().saturating_sub(days);
    by_day
        .into_iter()
        .skip(skip)
        .map(|(date, (income, expense))| DailyFlow {
            date,
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, expense, expense_in, income};

    fn ledger() -> Vec<Transaction> {
        vec![
            income("2026-01-01", 5000.0, Category::Salary),
            expense("2026-01-02", 1200.0, Category::Rent),
            expense("2026-01-03", 80.0, Category::FoodAndDining),
            expense_in("2026-01-03", 1670.0, CurrencyCode::Inr, Category::FoodAndDining),
            expense("2026-01-05", 150.0, Category::Shopping),
        ]
    }

    #[test]
    fn test_cash_flow() {
        let rates = RateTable::builtin();
        let flow = cash_flow(&rates, &ledger(), CurrencyCode::Usd);
        assert_eq!(flow.income, 5000.0);
        assert!((flow.expense - 1450.0).abs() < 1e-9);
        assert!((flow.balance - 3550.0).abs() < 1e-9);
    }

    #[test]
    fn test_cash_flow_empty() {
        let rates = RateTable::builtin();
        let flow = cash_flow(&rates, &[], CurrencyCode::Eur);
        assert_eq!(
            flow,
            CashFlow {
                income: 0.0,
                expense: 0.0,
                balance: 0.0
            }
        );
    }

    #[test]
    fn test_category_breakdown_sorted_with_percentages() {
        let rates = RateTable::builtin();
        let cats = category_breakdown(&rates, &ledger(), CurrencyCode::Usd);

        assert_eq!(cats.len(), 3);
        assert_eq!(cats[0].category, Category::Rent);
        assert_eq!(cats[1].category, Category::Shopping);
        assert_eq!(cats[2].category, Category::FoodAndDining);
        assert_eq!(cats[1].amount, 150.0);
        // 80 USD + 1670 INR (20 USD)
        assert!((cats[2].amount - 100.0).abs() < 1e-9);
        assert_eq!(cats[2].transaction_count, 2);
        assert_eq!(cats[0].color, "#f59e0b");
        assert_eq!(cats[2].color, Category::FoodAndDining.color());

        let pct: f64 = cats.iter().map(|c| c.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
        assert!((cats[0].percentage - 1200.0 / 1450.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_status() {
        let rates = RateTable::builtin();
        let budgets = vec![
            Budget {
                category: Category::Rent,
                limit: 1000.0,
                currency: CurrencyCode::Usd,
            },
            Budget {
                category: Category::FoodAndDining,
                limit: 200.0,
                currency: CurrencyCode::Usd,
            },
            Budget {
                category: Category::Health,
                limit: 0.0,
                currency: CurrencyCode::Usd,
            },
        ];

        let statuses = budget_status(&rates, &budgets, &ledger(), CurrencyCode::Usd);
        assert_eq!(statuses[0].percentage, 100.0);
        assert!(statuses[0].near_limit);
        assert!((statuses[1].percentage - 50.0).abs() < 1e-9);
        assert!(!statuses[1].near_limit);
        assert_eq!(statuses[2].spent, 0.0);
        assert_eq!(statuses[2].percentage, 0.0);
    }

    #[test]
    fn test_budget_limit_converted_to_base() {
        let rates = RateTable::builtin();
        let budgets = vec![Budget {
            category: Category::Shopping,
            limit: 16_700.0,
            currency: CurrencyCode::Inr,
        }];

        let statuses = budget_status(&rates, &budgets, &ledger(), CurrencyCode::Usd);
        assert!((statuses[0].limit - 200.0).abs() < 1e-9);
        assert!((statuses[0].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_utilization() {
        let rates = RateTable::builtin();
        assert_eq!(budget_utilization(&rates, &[], &ledger(), CurrencyCode::Usd), 0.0);

        let budgets = vec![
            Budget {
                category: Category::Shopping,
                limit: 300.0,
                currency: CurrencyCode::Usd,
            },
            Budget {
                category: Category::FoodAndDining,
                limit: 100.0,
                currency: CurrencyCode::Usd,
            },
        ];
        // (150 + 100) / 400
        let util = budget_utilization(&rates, &budgets, &ledger(), CurrencyCode::Usd);
        assert!((util - 62.5).abs() < 1e-9);

        let zero_limits = vec![Budget {
            category: Category::Rent,
            limit: 0.0,
            currency: CurrencyCode::Usd,
        }];
        assert_eq!(
            budget_utilization(&rates, &zero_limits, &ledger(), CurrencyCode::Usd),
            0.0
        );
    }

    #[test]
    fn test_goal_progress() {
        let rates = RateTable::builtin();
        let goals = vec![
            SavingsGoal {
                name: "Emergency fund".to_string(),
                target: 1000.0,
                current: 250.0,
                currency: CurrencyCode::Usd,
                deadline: Some(date("2026-12-31")),
            },
            SavingsGoal {
                name: "Overfunded".to_string(),
                target: 100.0,
                current: 150.0,
                currency: CurrencyCode::Usd,
                deadline: None,
            },
        ];

        let progress = goal_progress(&rates, &goals, CurrencyCode::Usd);
        assert_eq!(progress[0].percentage, 25.0);
        assert_eq!(progress[0].remaining, 750.0);
        assert_eq!(progress[1].percentage, 100.0);
        assert_eq!(progress[1].remaining, 0.0);
    }

    #[test]
    fn test_report_json_uses_camel_case() {
        let rates = RateTable::builtin();
        let cats = category_breakdown(&rates, &ledger(), CurrencyCode::Usd);
        let json = serde_json::to_value(&cats[0]).unwrap();
        assert_eq!(json["transactionCount"], 1);
        assert_eq!(json["category"], "Rent");
        assert_eq!(json["color"], "#f59e0b");
        assert!(json.get("transaction_count").is_none());

        let budgets = vec![Budget {
            category: Category::Rent,
            limit: 1000.0,
            currency: CurrencyCode::Usd,
        }];
        let statuses = budget_status(&rates, &budgets, &ledger(), CurrencyCode::Usd);
        let json = serde_json::to_value(&statuses[0]).unwrap();
        assert_eq!(json["nearLimit"], true);

        let flow = cash_flow(&rates, &ledger(), CurrencyCode::Usd);
        let json = serde_json::to_value(flow).unwrap();
        assert_eq!(json["income"], 5000.0);
    }

    #[test]
    fn test_daily_flow_keeps_most_recent_days() {
        let rates = RateTable::builtin();
        let flow = daily_flow(&rates, &ledger(), CurrencyCode::Usd, 2);

        assert_eq!(flow.len(), 2);
        assert_eq!(flow[0].date, date("2026-01-03"));
        assert!((flow[0].expense - 100.0).abs() < 1e-9);
        assert_eq!(flow[1].date, date("2026-01-05"));

        let all = daily_flow(&rates, &ledger(), CurrencyCode::Usd, DEFAULT_DAILY_FLOW_DAYS);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].income, 5000.0);
    }
}
