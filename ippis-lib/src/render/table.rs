use crate::model::Row;
use crate::table::{Alignment, Cell, ColumnSpec, SortState, TableEngine, View};

use super::text::{display_width, pad, truncate_to_width};

/// Message printed when nothing matches.
pub const EMPTY_MESSAGE: &str = "No records match the current search or filters.";

const DEFAULT_MAX_WIDTH: usize = 32;

/// Renders a [`View`] as an aligned text grid with a paging footer.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Record;
/// use ippis_lib::render::TextTable;
/// use ippis_lib::table::{ColumnSpec, TableEngine};
///
/// let rows = vec![Record::new(1).set("name", "Toyota Hilux")];
/// let engine = TableEngine::new(rows, vec![ColumnSpec::new("name", "Name").sortable()], Vec::new());
/// engine.toggle_sort("name");
///
/// let text = TextTable::from_engine(&engine).render();
/// assert!(text.starts_with("Name ▲"));
/// assert!(text.contains("Toyota Hilux"));
/// ```
pub struct TextTable<T: Row> {
    columns: Vec<ColumnSpec<T>>,
    view: View<T>,
    sort: Option<SortState>,
    max_width: usize,
}

impl<T: Row> TextTable<T> {
    pub fn new(columns: Vec<ColumnSpec<T>>, view: View<T>) -> Self {
        Self {
            columns,
            view,
            sort: None,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Snapshots an engine's columns, sort and current view.
    pub fn from_engine(engine: &TableEngine<T>) -> Self {
        Self::new(engine.columns(), engine.view()).sort(engine.sort())
    }

    /// Marks the sorted column in the header.
    pub fn sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    /// Longest cell, in terminal columns. Longer cells are cut.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    fn header(&self, column: &ColumnSpec<T>) -> String {
        match &self.sort {
            Some(sort) if sort.key == column.key => {
                let arrow = if sort.direction.is_ascending() { "▲" } else { "▼" };
                format!("{} {}", column.label, arrow)
            }
            _ => column.label.clone(),
        }
    }

    fn cell_text(cell: &Cell) -> String {
        match cell {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Badge { label, .. } => format!("[{}]", label),
        }
    }

    /// Renders the grid, or the empty message, followed by the footer.
    pub fn render(&self) -> String {
        let headers: Vec<String> = self.columns.iter().map(|c| self.header(c)).collect();
        let body: Vec<Vec<String>> = self
            .view
            .rows()
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| truncate_to_width(&Self::cell_text(&c.cell(row)), self.max_width))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                body.iter()
                    .map(|cells| display_width(&cells[i]))
                    .chain(std::iter::once(display_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::new();
        let header_cells: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w, Alignment::Left))
            .collect();
        lines.push(header_cells.join(" | ").trim_end().to_string());
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );

        if self.view.is_empty_result() {
            lines.push(EMPTY_MESSAGE.to_string());
        }
        for cells in &body {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .zip(&self.columns)
                .map(|((cell, w), column)| pad(cell, *w, column.align))
                .collect();
            lines.push(padded.join(" | ").trim_end().to_string());
        }

        lines.push(String::new());
        lines.push(self.footer());
        lines.join("\n")
    }

    /// `Showing a–b of n (filtered from N) · Page p of P`.
    pub fn footer(&self) -> String {
        let view = &self.view;
        let range = view.row_range();
        let mut footer = if range.is_empty() {
            format!("Showing 0 of {}", view.filtered_count())
        } else {
            format!(
                "Showing {}–{} of {}",
                range.start + 1,
                range.end,
                view.filtered_count()
            )
        };
        if view.is_filtered() {
            footer.push_str(&format!(" (filtered from {})", view.total_count()));
        }
        footer.push_str(&format!(
            " · Page {} of {}",
            view.current_page(),
            view.total_pages()
        ));
        footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::table::{FilterSpec, Tone};

    fn engine() -> TableEngine<Record> {
        let rows = (1..=25)
            .map(|i| {
                Record::new(i)
                    .set("name", format!("Asset {:02}", i))
                    .set("status", if i % 5 == 0 { "Retired" } else { "Active" })
                    .set("units", i as i64)
            })
            .collect();
        let columns = vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("status", "Status")
                .render(|value, _| Cell::badge(value.to_string(), Tone::Neutral)),
            ColumnSpec::new("units", "Units").align(Alignment::Right),
        ];
        let engine = TableEngine::new(rows, columns, vec![FilterSpec::select("status", "Status")]);
        engine.set_items_per_page(10);
        engine
    }

    #[test]
    fn test_header_marks_sorted_column() {
        let engine = engine();
        engine.toggle_sort("name");
        engine.toggle_sort("name");
        let text = TextTable::from_engine(&engine).render();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("Name ▼"));
        assert!(!header.contains('▲'));
    }

    #[test]
    fn test_badges_and_alignment() {
        let text = TextTable::from_engine(&engine()).render();
        let first_row = text.lines().nth(2).unwrap();
        assert_eq!(first_row, "Asset 01 | [Active]  |     1");
    }

    #[test]
    fn test_footer_filtered() {
        let engine = engine();
        engine.set_filter("status", "retired");
        let table = TextTable::from_engine(&engine);
        assert_eq!(table.footer(), "Showing 1–5 of 5 (filtered from 25) · Page 1 of 1");
    }

    #[test]
    fn test_footer_last_page() {
        let engine = engine();
        engine.set_page(3);
        let table = TextTable::from_engine(&engine);
        assert_eq!(table.footer(), "Showing 21–25 of 25 · Page 3 of 3");
    }

    #[test]
    fn test_empty_result() {
        let engine = engine();
        engine.set_search_term("generator");
        let text = TextTable::from_engine(&engine).render();
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.ends_with("Showing 0 of 0 (filtered from 25) · Page 1 of 1"));
    }

    #[test]
    fn test_long_cells_are_cut() {
        let rows = vec![Record::new(1).set("name", "Ministry of Humanitarian Affairs")];
        let engine = TableEngine::new(rows, vec![ColumnSpec::new("name", "Name")], Vec::new());
        let text = TextTable::from_engine(&engine).max_width(10).render();
        assert!(text.contains("Ministry …"));
    }
}
