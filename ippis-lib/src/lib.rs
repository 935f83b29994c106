//! IPPIS admin table library
//!
//! The reusable core behind the IPPIS admin screens: a table engine that
//! searches, filters, sorts and paginates a row collection, plus the row
//! sources, submission layer and screen presets the screens compose it with.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod registration;
pub mod render;
pub mod screens;
pub mod source;
pub mod submit;
pub mod table;

pub use config::TableConfig;
pub use model::Record;
pub use model::RecordId;
pub use model::Row;
pub use model::Value;
pub use table::TableEngine;
pub use table::View;
