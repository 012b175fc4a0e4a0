//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::dates::{DateFormat, display_raw};
use crate::model::{Column, FieldKind, FieldValue, Record};

/// Whole-dollar amount with thousands separators, e.g. `$1,250,000`.
#[must_use]
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_digits(&format!("{:.0}", value.abs())))
}

/// Number with thousands separators and at most two decimals.
#[must_use]
pub fn number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        format!("{sign}{}", group_digits(int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_digits(int_part))
    }
}

#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// Render one cell of `record` for `column`.
#[must_use]
pub fn cell_text<R: Record>(record: &R, column: &Column, dates: DateFormat) -> String {
    let Some(value) = record.field(column.key) else {
        return String::new();
    };
    match (column.kind, value) {
        (FieldKind::Currency, FieldValue::Number(n)) => currency(n),
        (FieldKind::Percent, FieldValue::Number(n)) => percent(n),
        (FieldKind::Number, FieldValue::Number(n)) => number(n),
        (FieldKind::Date, FieldValue::Date(raw)) => display_raw(&raw, dates),
        (FieldKind::Status, FieldValue::Status(key)) => R::status_label(&key).map_or(key, str::to_owned),
        (_, other) => other.raw(),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
