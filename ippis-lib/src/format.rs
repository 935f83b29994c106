//! Display formatting for money, dates and statuses.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::model::Value;
use crate::table::{Cell, Tone};

/// Currency symbol used for amounts.
pub const NAIRA: &str = "₦";

/// Formats an amount as naira with thousands separators and two decimals.
///
/// ```
/// use rust_decimal::Decimal;
/// use ippis_lib::format::currency;
///
/// assert_eq!(currency(Decimal::new(125000050, 2)), "₦1,250,000.50");
/// assert_eq!(currency(Decimal::new(-75, 0)), "-₦75.00");
/// ```
pub fn currency(amount: Decimal) -> String {
    let fixed = format!(
        "{:.2}",
        amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    );
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}{}.{}", sign, NAIRA, group_thousands(whole), fraction)
}

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

/// Formats a date as `15 Jan 2024`.
pub fn date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Formats a timestamp's UTC date as `15 Jan 2024`.
pub fn datetime(timestamp: DateTime<Utc>) -> String {
    date(timestamp.date_naive())
}

/// Formats any value holding an amount. Other values are shown as-is.
pub fn currency_value(value: &Value) -> String {
    match value.as_decimal() {
        Some(amount) => currency(amount),
        None => value.to_string(),
    }
}

/// Formats any value holding a date. ISO date strings are parsed.
pub fn date_value(value: &Value) -> String {
    match value {
        Value::Date(d) => date(*d),
        Value::DateTime(ts) => datetime(*ts),
        Value::String(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => date(d),
            Err(_) => s.clone(),
        },
        other => other.to_string(),
    }
}

/// Badge tone for a status name.
pub fn status_tone(status: &str) -> Tone {
    match status.trim().to_lowercase().as_str() {
        "active" | "approved" | "completed" | "paid" | "verified" | "cleared" => Tone::Success,
        "pending" | "maintenance" | "in maintenance" | "processing" | "on hold" => Tone::Warning,
        "rejected" | "terminated" | "failed" | "inactive" | "retired" | "disposed" | "overdue"
        | "bounced" => Tone::Danger,
        "assigned" | "submitted" | "in review" | "new" => Tone::Info,
        _ => Tone::Neutral,
    }
}

/// Renders a status value as a badge. Empty values render nothing.
pub fn status_badge(value: &Value) -> Cell {
    let label = value.to_string();
    if label.is_empty() {
        return Cell::Empty;
    }
    let tone = status_tone(&label);
    Cell::badge(label, tone)
}

/// Column renderer showing amounts as currency.
pub fn currency_cell<T>(value: &Value, _row: &T) -> Cell {
    if value.is_null() {
        return Cell::Empty;
    }
    Cell::text(currency_value(value))
}

/// Column renderer showing dates as `15 Jan 2024`.
pub fn date_cell<T>(value: &Value, _row: &T) -> Cell {
    if value.is_null() {
        return Cell::Empty;
    }
    Cell::text(date_value(value))
}

/// Column renderer showing statuses as badges.
pub fn badge_cell<T>(value: &Value, _row: &T) -> Cell {
    status_badge(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_currency_rounds() {
        assert_eq!(currency(Decimal::new(12345, 3)), "₦12.35");
        assert_eq!(currency(Decimal::ZERO), "₦0.00");
        assert_eq!(currency_value(&Value::Int(450000)), "₦450,000.00");
        assert_eq!(currency_value(&Value::from("n/a")), "n/a");
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date(d), "5 Jan 2024");
        assert_eq!(date_value(&Value::from("2023-11-30")), "30 Nov 2023");
        assert_eq!(date_value(&Value::from("soon")), "soon");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(&Value::from("Active")), Cell::badge("Active", Tone::Success));
        assert_eq!(
            status_badge(&Value::from("In Maintenance")),
            Cell::badge("In Maintenance", Tone::Warning)
        );
        assert_eq!(status_badge(&Value::from("Archived")), Cell::badge("Archived", Tone::Neutral));
        assert_eq!(status_badge(&Value::Null), Cell::Empty);
    }
}
