//! Filter dimensions.

use std::collections::BTreeMap;

use crate::model::Row;

/// Input control a filter is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Drop-down of fixed options.
    Select,
    /// Date picker; the value is an ISO date (`2024-01-15`).
    Date,
    /// Free text, still matched exactly.
    Text,
}

/// One option of a select filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A named dimension rows can be restricted along.
///
/// `id` is the row field the filter compares against. A row passes when its
/// field, stringified and lowercased, equals the lowercased filter value.
///
/// # Example
///
/// ```
/// use ippis_lib::table::FilterSpec;
///
/// let status = FilterSpec::select("status", "Status")
///     .option("active", "Active")
///     .option("maintenance", "In Maintenance");
///
/// assert_eq!(status.options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub id: String,
    pub label: String,
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

impl FilterSpec {
    /// Creates a filter of the given kind with no options.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
        }
    }

    /// Creates a select filter.
    pub fn select(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Select)
    }

    /// Creates a date filter.
    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Date)
    }

    /// Creates a text filter.
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Text)
    }

    /// Adds a select option.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(value, label));
        self
    }

    /// Adds options whose value and label are the same text.
    pub fn options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            self.options.push(FilterOption::new(value.clone(), value));
        }
        self
    }

    /// Label of the option with the given value, if any.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(value))
            .map(|o| o.label.as_str())
    }
}

/// Active filter values by filter id. A missing id means no restriction.
pub type ActiveFilters = BTreeMap<String, String>;

/// Returns `true` if `row` passes every active filter.
///
/// Filter values are expected to be lowercased already.
pub fn matches_filters<T: Row>(row: &T, lowered_filters: &[(&str, String)]) -> bool {
    lowered_filters
        .iter()
        .all(|(id, value)| row.field(id).to_string().to_lowercase() == *value)
}
