//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_rates, open_session, resolve_base)
//! - `insights` - Engine commands (summary, forecast, anomaly)
//! - `rates` - Currency commands (convert, rates)
//! - `reports` - Report generation commands

pub mod core;
pub mod insights;
pub mod rates;
pub mod reports;

// Re-export command functions for main.rs
pub use self::core::*;
pub use insights::*;
pub use rates::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
