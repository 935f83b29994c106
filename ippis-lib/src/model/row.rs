//! Row trait

use std::fmt;
use std::hash::Hash;

use super::Value;

/// Trait for records that can be shown by a [`TableEngine`](crate::table::TableEngine).
///
/// The engine never looks inside a row except through this trait: `field`
/// feeds columns, filters and sorting, `values` feeds free-text search.
///
/// # Example
///
/// ```
/// use ippis_lib::model::{Row, Value};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: u32,
///     name: String,
///     department: String,
/// }
///
/// impl Row for Employee {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, key: &str) -> Value {
///         match key {
///             "id" => self.id.into(),
///             "name" => Value::from(&self.name),
///             "department" => Value::from(&self.department),
///             _ => Value::Null,
///         }
///     }
///
///     fn values(&self) -> Vec<Value> {
///         vec![self.id.into(), Value::from(&self.name), Value::from(&self.department)]
///     }
/// }
/// ```
pub trait Row: Clone + Send + Sync + 'static {
    /// The identifier type of this row.
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Returns the unique identifier of this row.
    fn id(&self) -> Self::Id;

    /// Returns the value stored under `key`, or [`Value::Null`] if there is none.
    fn field(&self, key: &str) -> Value;

    /// Returns the shallow field values of this row.
    fn values(&self) -> Vec<Value>;
}
