//! Error types

mod config;
mod field;
mod registration;
mod source;
mod submit;
mod validation;

pub use config::*;
pub use field::*;
pub use registration::*;
pub use source::*;
pub use submit::*;
pub use validation::*;
