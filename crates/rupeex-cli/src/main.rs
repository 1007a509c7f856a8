//! RupeeX CLI - Local Intelligence Engine
//!
//! Usage:
//!   rupeex summary                          Where the money is going
//!   rupeex forecast                         30-day spend projection
//!   rupeex anomaly -a 500 -c food           Score a new expense
//!   rupeex report categories                Expense by category
//!   rupeex convert 100 USD INR              Currency conversion

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let rates = commands::load_rates(cli.rates.as_deref())?;

    match cli.command {
        Commands::Convert { amount, from, to } => commands::cmd_convert(&rates, amount, &from, &to),
        Commands::Rates => commands::cmd_rates(&rates),
        Commands::Summary { json } => {
            let session = commands::open_session(&cli.ledger, cli.base.as_deref(), rates)?;
            commands::cmd_summary(&session, json)
        }
        Commands::Forecast { json } => {
            let session = commands::open_session(&cli.ledger, cli.base.as_deref(), rates)?;
            commands::cmd_forecast(&session, json)
        }
        Commands::Anomaly {
            amount,
            category,
            currency,
            json,
        } => {
            let session = commands::open_session(&cli.ledger, cli.base.as_deref(), rates)?;
            commands::cmd_anomaly(&session, amount, &category, currency.as_deref(), json)
        }
        Commands::Report { report_type, json } => {
            let session = commands::open_session(&cli.ledger, cli.base.as_deref(), rates)?;
            match report_type {
                ReportType::Overview => commands::cmd_report_overview(&session, json),
                ReportType::Categories => commands::cmd_report_categories(&session, json),
                ReportType::Budgets => commands::cmd_report_budgets(&session, json),
                ReportType::Goals => commands::cmd_report_goals(&session, json),
                ReportType::Daily { days } => commands::cmd_report_daily(&session, days, json),
            }
        }
    }
}
