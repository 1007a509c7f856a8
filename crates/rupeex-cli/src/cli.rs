//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rupeex_core::reports::DEFAULT_DAILY_FLOW_DAYS;

/// RupeeX - Local intelligence for your personal ledger
#[derive(Parser)]
#[command(name = "rupeex")]
#[command(about = "On-device spending insights and forecasts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger file (.json or .csv)
    #[arg(long, default_value = "ledger.json", global = true)]
    pub ledger: PathBuf,

    /// Base currency for all figures (defaults to the ledger's, else USD)
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Exchange rate override file (TOML with a [rates] table)
    ///
    /// Without this flag, rates come from the user data directory
    /// (rupeex/config/rates.toml) if present, else the built-in table.
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One-sentence read of where money is going
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Project the next 30 days of spending
    Forecast {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score how unusual a new expense would be (0 = typical, 1 = extreme)
    Anomaly {
        /// Expense amount
        #[arg(short, long)]
        amount: f64,

        /// Category name (e.g. "Food & Dining", food, rent)
        #[arg(short, long)]
        category: String,

        /// Currency of the amount (defaults to the base currency)
        #[arg(long)]
        currency: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate ledger reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,

        /// Print JSON instead of text
        #[arg(long, global = true)]
        json: bool,
    },

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        /// Source currency code
        from: String,

        /// Target currency code
        to: String,
    },

    /// List the active exchange rate table
    Rates,
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Income, expense, balance, and budget utilization
    Overview,

    /// Expense by category, largest first
    Categories,

    /// Spend against each budget
    Budgets,

    /// Progress toward savings goals
    Goals,

    /// Per-day income and expense
    Daily {
        /// Number of most recent days to show
        #[arg(short, long, default_value_t = DEFAULT_DAILY_FLOW_DAYS)]
        days: usize,
    },
}
