//! Currency command implementations

use anyhow::Result;
use rupeex_core::{format_value, CurrencyCode, RateTable};

use super::parse_currency;

pub fn cmd_convert(rates: &RateTable, amount: f64, from: &str, to: &str) -> Result<()> {
    let from = parse_currency(from)?;
    let to = parse_currency(to)?;
    let converted = rates.convert(amount, from, to);

    println!(
        "{} = {}",
        format_value(amount, from),
        format_value(converted, to)
    );
    Ok(())
}

pub fn cmd_rates(rates: &RateTable) -> Result<()> {
    println!();
    println!("💱 Exchange Rates (per 1 USD)");
    println!("   ─────────────────────────────");
    println!("   {:6} │ {:>6} │ {:>12}", "Code", "Symbol", "Rate");
    println!("   ───────┼────────┼─────────────");
    for code in CurrencyCode::all() {
        println!(
            "   {:6} │ {:>6} │ {:>12.4}",
            code.as_str(),
            code.symbol(),
            rates.rate(*code)
        );
    }
    Ok(())
}
