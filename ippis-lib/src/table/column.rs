//! Column descriptors and rendered cells.

use std::fmt;
use std::sync::Arc;

use crate::model::Row;
use crate::model::Value;

/// Horizontal alignment of a column's cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Color family of a badge cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Presentational form of one cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Nothing to show.
    Empty,
    /// Plain text.
    Text(String),
    /// A status pill.
    Badge { label: String, tone: Tone },
}

impl Cell {
    /// Creates a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Creates a badge cell.
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }

    /// The text content of the cell, without decoration.
    pub fn plain(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Text(text) => text,
            Cell::Badge { label, .. } => label,
        }
    }
}

/// Cell renderer: turns a raw field value into its presentational form.
pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T) -> Cell + Send + Sync>;

/// A table column definition.
///
/// `key` names the row field the column shows; `render` optionally maps the
/// raw value to a badge, formatted date, currency and so on. Sorting always
/// uses the raw value.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Record;
/// use ippis_lib::table::{Alignment, Cell, ColumnSpec};
///
/// let columns: Vec<ColumnSpec<Record>> = vec![
///     ColumnSpec::new("name", "Asset Name").sortable(),
///     ColumnSpec::new("value", "Value")
///         .sortable()
///         .align(Alignment::Right)
///         .render(|value, _row| Cell::text(format!("NGN {}", value))),
/// ];
/// ```
pub struct ColumnSpec<T> {
    /// Row field shown in this column.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Cell alignment.
    pub align: Alignment,
    render: Option<CellRenderer<T>>,
}

impl<T: Row> ColumnSpec<T> {
    /// Creates a plain, unsortable column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            align: Alignment::default(),
            render: None,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the cell alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets a custom cell renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &T) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns `true` if a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Renders this column's cell for `row`.
    ///
    /// Without a renderer the raw value's display form is used, and a
    /// missing value becomes [`Cell::Empty`].
    pub fn cell(&self, row: &T) -> Cell {
        let value = row.field(&self.key);
        match &self.render {
            Some(render) => render(&value, row),
            None if value.is_null() => Cell::Empty,
            None => Cell::Text(value.to_string()),
        }
    }
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_default_cell_uses_display_form() {
        let row = Record::new(1).set("units", 12i64);
        let column = ColumnSpec::<Record>::new("units", "Units");
        assert_eq!(column.cell(&row), Cell::text("12"));
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let row = Record::new(1);
        let column = ColumnSpec::<Record>::new("assignedTo", "Assigned To");
        assert_eq!(column.cell(&row), Cell::Empty);
    }

    #[test]
    fn test_custom_renderer_sees_value_and_row() {
        let row = Record::new(9).set("status", "Active");
        let column = ColumnSpec::<Record>::new("status", "Status").render(|value, row| {
            Cell::badge(format!("{} #{}", value, row.record_id()), Tone::Success)
        });
        assert_eq!(column.cell(&row), Cell::badge("Active #9", Tone::Success));
        assert!(column.has_renderer());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(Cell::Empty.plain(), "");
        assert_eq!(Cell::badge("Pending", Tone::Warning).plain(), "Pending");
    }
}
