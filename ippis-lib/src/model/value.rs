//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// A dynamic value read from a row field.
///
/// Columns, filters and search all see row data through this type. The
/// [`Display`](fmt::Display) form is the stringified value used for search
/// and filter matching; [`Value::compare`] is the ordering used for sorting.
///
/// # Ordering
///
/// Values of different kinds are ranked `Null < Bool < number < String <
/// Date < DateTime`. Numbers (`Int`, `Float`, `Decimal`) compare numerically
/// with each other, strings compare ignoring case (code point order breaks
/// ties) and dates chronologically.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Value;
///
/// let name = Value::from("Dell Latitude 5420");
/// let units = Value::from(4i64);
/// let empty = Value::Null;
///
/// assert_eq!(name.to_string(), "Dell Latitude 5420");
/// assert_eq!(empty.to_string(), "");
/// assert!(empty.compare(&units).is_lt());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Missing or empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Arbitrary precision decimal (money, quantities).
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Returns `true` if free-text search looks at this value.
    ///
    /// Strings, numbers and dates are searched through their display form.
    /// Nulls and booleans are not.
    pub fn is_searchable(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(_))
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value as a decimal, if this is a number.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Float(f) => Decimal::from_f64_retain(*f),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => 2,
            Value::String(_) => 3,
            Value::Date(_) => 4,
            Value::DateTime(_) => 5,
        }
    }

    /// Total ordering used when sorting rows by a column.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::Int(a), Value::Decimal(b)) => Decimal::from(*a).cmp(b),
            (Value::Decimal(a), Value::Int(b)) => a.cmp(&Decimal::from(*b)),
            (Value::String(a), Value::String(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            // Mixed numbers compare exactly when the float fits a decimal.
            (a, b) if a.rank() == 2 && b.rank() == 2 => match (a.as_decimal(), b.as_decimal()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => {
                    let a = a.as_f64().unwrap_or(f64::NAN);
                    let b = b.as_f64().unwrap_or(f64::NAN);
                    a.total_cmp(&b)
                }
            },
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Converts a JSON value into a [`Value`].
///
/// Arrays and objects have no column representation and are kept as their
/// JSON text.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::String(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Lagos").to_string(), "Lagos");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-01-15");
    }

    #[test]
    fn test_numbers_compare_across_kinds() {
        let int = Value::from(10i64);
        let float = Value::from(9.5);
        let decimal = Value::from(Decimal::new(1050, 2));

        assert!(float.compare(&int).is_lt());
        assert!(decimal.compare(&int).is_gt());
        assert!(int.compare(&Value::from(10i64)).is_eq());
    }

    #[test]
    fn test_large_numbers_order_transitively() {
        let big = 1i64 << 53;
        let int = Value::Int(big + 1);
        let float = Value::Float(big as f64);
        let decimal = Value::Decimal(Decimal::from(big));

        assert!(float.compare(&decimal).is_eq());
        assert!(int.compare(&float).is_gt());
        assert!(int.compare(&decimal).is_gt());
        assert!(Value::Float(f64::NAN).compare(&int).is_gt());
    }

    #[test]
    fn test_mixed_kinds_use_rank() {
        assert!(Value::Null.compare(&Value::from(false)).is_lt());
        assert!(Value::from(1i64).compare(&Value::from("1")).is_lt());
        assert!(Value::from("zzz").compare(&Value::from(NaiveDate::MIN)).is_lt());
    }

    #[test]
    fn test_strings_compare_ignoring_case() {
        assert!(Value::from("apple").compare(&Value::from("Zebra")).is_lt());
        assert!(Value::from("iMac").compare(&Value::from("Toyota")).is_lt());
        assert!(Value::from("Apple").compare(&Value::from("apple")).is_lt());
        assert!(Value::from("apple").compare(&Value::from("banana")).is_lt());
    }

    #[test]
    fn test_searchable_kinds() {
        assert!(!Value::Null.is_searchable());
        assert!(!Value::from(true).is_searchable());
        assert!(Value::from(3i64).is_searchable());
        assert!(Value::from("x").is_searchable());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(
            Value::from(serde_json::json!(["a", "b"])),
            Value::String("[\"a\",\"b\"]".to_string())
        );
    }
}
