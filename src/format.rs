//! Display formatting for the presentation boundary
//!
//! Engine functions return raw magnitudes; these helpers turn them into the
//! strings shown on cards and tables.

use crate::catalog::{Currency, MoneyAmount};

fn currency_prefix(currency: Currency) -> &'static str {
    match currency {
        Currency::Usd => "$",
        Currency::Etb => "ETB ",
    }
}

/// Group the digits of a non-negative integer string in threes
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-dollar amount with thousands separators, e.g. `$6,436,343`
pub fn format_whole_usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Amount in millions with one decimal, e.g. `$145.2M`
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// Compact amount in its own currency: millions below one billion, else billions
pub fn format_money(money: &MoneyAmount) -> String {
    let prefix = currency_prefix(money.currency);
    if money.amount.abs() >= 1_000_000_000.0 {
        format!("{}{:.1}B", prefix, money.amount / 1_000_000_000.0)
    } else {
        format!("{}{:.1}M", prefix, money.amount / 1_000_000.0)
    }
}

/// Signed percentage with one decimal, e.g. `+18.4%`
pub fn format_percent(value: f64) -> String {
    format!("{:+.1}%", value)
}
