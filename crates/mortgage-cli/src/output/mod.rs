pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Result fields that carry monetary values.
const MONEY_FIELDS: &[&str] = &["amount", "monthly_payment", "total_payment", "total_interest"];

pub(crate) fn is_money_field(key: &str) -> bool {
    MONEY_FIELDS.contains(&key)
}

/// Render a monetary value as pounds with two decimal places and thousand
/// separators, e.g. "£1,198.50". Returns None if the value is not a decimal.
pub(crate) fn format_money(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.as_str(),
        _ => return None,
    };
    let parsed: Decimal = raw.parse().ok()?;
    let rounded = parsed.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, pence) = text.split_once('.')?;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Some(format!("{sign}£{grouped}.{pence}"))
}
