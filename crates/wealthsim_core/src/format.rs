//! Display helpers for the milestone sentence and tabular export.

use jiff::civil::Date;

/// Format a dollar amount with thousands separators and no cents.
#[must_use]
pub fn format_currency_whole(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value.round() as i64;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}", dollars_formatted)
    } else {
        format!("-${}", dollars_formatted)
    }
}

/// Format a date as `MM/DD/YYYY`.
#[must_use]
pub fn format_date_mdy(date: Date) -> String {
    date.strftime("%m/%d/%Y").to_string()
}
