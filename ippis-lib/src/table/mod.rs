//! Table engine
//!
//! [`TableEngine`] owns the search/filter/sort/pagination state of one table
//! and derives the [`View`] a rendering layer shows. Screens supply the rows,
//! [`ColumnSpec`]s, [`FilterSpec`]s and an optional [`TableActions`]
//! implementation for add/edit/view/delete.

mod actions;
mod column;
mod engine;
mod filter;
mod notify;
mod page;
mod search;
mod sort;
mod view;

pub use actions::*;
pub use column::*;
pub use engine::*;
pub use filter::*;
pub use notify::*;
pub use page::*;
pub use search::*;
pub use sort::*;
pub use view::*;
