//! Plain-text rendering of table views.
//!
//! Used by the command-line front end and by tests that want to see a page
//! the way an operator would.

mod table;
mod text;

pub use table::*;
pub use text::{display_width, pad, truncate_to_width};
