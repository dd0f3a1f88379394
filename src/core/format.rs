//! # Display Formatting
//!
//! Turns optional country fields into the strings shown in tables and the
//! detail view. Missing values always render as [`NOT_AVAILABLE`], never as
//! `0` or an empty cell.

use crate::api::Country;

pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a number with `,` thousands separators and at most three
/// fraction digits (trailing zeros dropped): `1234567` → `"1,234,567"`,
/// `1234.5` → `"1,234.5"`.
pub fn group_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let mut out = String::new();
    if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Grouped number, or `N/A` when absent.
pub fn number_or_na(value: Option<f64>) -> String {
    value
        .map(group_number)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn text_or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// First capital only.
pub fn capital(country: &Country) -> String {
    text_or_na(
        country
            .capital
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str),
    )
}

/// Currency names joined with `", "`.
pub fn currencies(country: &Country) -> String {
    match &country.currencies {
        Some(list) => list
            .iter()
            .map(|(_, currency)| currency.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Currency names with their symbol where known: `"Euro (€), Dollar"`.
pub fn currencies_with_symbols(country: &Country) -> String {
    match &country.currencies {
        Some(list) => list
            .iter()
            .map(|(_, currency)| match &currency.symbol {
                Some(symbol) => format!("{} ({symbol})", currency.name),
                None => currency.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Language names joined with `", "`.
pub fn languages(country: &Country) -> String {
    match &country.languages {
        Some(list) => list
            .iter()
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}
