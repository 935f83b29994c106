//! Dynamic record

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::Row;
use super::Value;
use crate::error::FieldError;

/// Identifier of a [`Record`]: either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id (`"id": 3`).
    Number(i64),
    /// Text id (`"id": "AST-003"`).
    Text(String),
}

impl RecordId {
    /// Parses user input into an id.
    ///
    /// Input that parses as an integer becomes [`RecordId::Number`],
    /// everything else [`RecordId::Text`].
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(input.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Number(v)
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        RecordId::Number(v as i64)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Number(n) => Value::Int(n),
            RecordId::Text(s) => Value::String(s),
        }
    }
}

/// A dynamic record with an id and named field values.
///
/// Records are the row type for data whose shape is only known at runtime,
/// such as JSON files loaded by the command line front-end.
///
/// # Example
///
/// ```
/// use ippis_lib::model::{Record, Row, Value};
///
/// let record = Record::new("AST-001")
///     .set("name", "Dell Latitude 5420")
///     .set("category", "Computers");
///
/// assert_eq!(record.field("category"), Value::from("Computers"));
/// assert_eq!(record.field("missing"), Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The unique identifier of the record.
    pub(crate) id: RecordId,

    /// The field values, excluding the id.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Returns the record id.
    pub fn record_id(&self) -> &RecordId {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the field names in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a decimal field value. Integers and floats are widened.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_decimal()
                .map(Some)
                .ok_or_else(|| FieldError::type_mismatch(field, "decimal", value.type_name())),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }
}

impl Row for Record {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Value {
        if key == "id" {
            return self.id.clone().into();
        }
        self.fields.get(key).cloned().unwrap_or_default()
    }

    fn values(&self) -> Vec<Value> {
        std::iter::once(self.id.clone().into())
            .chain(self.fields.values().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("12"), RecordId::Number(12));
        assert_eq!(RecordId::parse(" 12 "), RecordId::Number(12));
        assert_eq!(RecordId::parse("AST-012"), RecordId::Text("AST-012".into()));
    }

    #[test]
    fn test_id_is_a_field() {
        let record = Record::new(7).set("name", "Generator");
        assert_eq!(record.field("id"), Value::Int(7));
        assert!(record.values().contains(&Value::Int(7)));
    }

    #[test]
    fn test_typed_getters() {
        let record = Record::new("R-1")
            .set("name", "Printer")
            .set("units", 3i64)
            .set("retired", Value::Null);

        assert_eq!(record.get_string("name").unwrap(), Some("Printer"));
        assert_eq!(record.get_int("units").unwrap(), Some(3));
        assert_eq!(record.get_decimal("units").unwrap(), Some(Decimal::from(3)));
        assert_eq!(record.get_bool("retired").unwrap(), None);
        assert!(matches!(
            record.get_int("name"),
            Err(FieldError::TypeMismatch { .. })
        ));
        assert!(matches!(
            record.get_string("nope"),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn test_field_names_sorted() {
        let record = Record::new(1).set("b", 1i64).set("a", 2i64);
        assert_eq!(record.field_names(), vec!["a", "b"]);
    }
}
