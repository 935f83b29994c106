//! Row sources
//!
//! Screens get their rows from a [`RowSource`] instead of module-level
//! arrays, so a table can be tested with a handful of rows and backed by a
//! real query in production.

mod json;
mod memory;

pub use json::*;
pub use memory::*;

/// Something that can list the rows of a table.
pub trait RowSource<T>: Send + Sync {
    /// Returns the current rows, in display order.
    fn list(&self) -> Vec<T>;
}

/// A fixed set of rows.
#[derive(Debug, Clone, Default)]
pub struct StaticSource<T> {
    rows: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T: Clone + Send + Sync> RowSource<T> for StaticSource<T> {
    fn list(&self) -> Vec<T> {
        self.rows.clone()
    }
}
