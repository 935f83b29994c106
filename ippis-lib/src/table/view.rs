//! Materialized table view.

use std::ops::Range;

use super::page::page_bounds;

/// The filtered, sorted and paginated rows a table currently shows.
///
/// A view is a snapshot: later engine mutations do not change it.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Record;
/// use ippis_lib::table::{ColumnSpec, TableEngine};
///
/// let rows = (1..=5).map(|i| Record::new(i).set("name", format!("Asset {}", i))).collect();
/// let engine = TableEngine::new(rows, vec![ColumnSpec::new("name", "Name")], Vec::new());
/// engine.set_items_per_page(10);
///
/// let view = engine.view();
/// assert_eq!(view.len(), 5);
/// assert_eq!(view.total_pages(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct View<T> {
    rows: Vec<T>,
    total_count: usize,
    filtered_count: usize,
    current_page: usize,
    total_pages: usize,
    items_per_page: usize,
}

impl<T> View<T> {
    pub(crate) fn new(
        rows: Vec<T>,
        total_count: usize,
        filtered_count: usize,
        current_page: usize,
        total_pages: usize,
        items_per_page: usize,
    ) -> Self {
        Self {
            rows,
            total_count,
            filtered_count,
            current_page,
            total_pages,
            items_per_page,
        }
    }

    /// Returns the rows on the current page.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Consumes the view and returns the rows on the current page.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Number of rows in the whole collection.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of rows that pass the search and filters.
    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    /// The 1-based page shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages of filtered rows. At least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of rows on the current page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the current page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if nothing matched the search and filters.
    ///
    /// This is the empty-state condition, not an error.
    pub fn is_empty_result(&self) -> bool {
        self.filtered_count == 0
    }

    /// Returns `true` if the search or filters removed any rows.
    pub fn is_filtered(&self) -> bool {
        self.filtered_count < self.total_count
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Positions of the shown rows within the filtered set (0-based).
    ///
    /// Used for "Showing 11-20 of 45" footers.
    pub fn row_range(&self) -> Range<usize> {
        page_bounds(self.current_page, self.items_per_page, self.filtered_count)
    }
}
