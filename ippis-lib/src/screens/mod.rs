//! Admin screen presets
//!
//! Every admin screen is the same table engine with its own columns,
//! filters and rows. This module holds the typed rows and descriptors for
//! the screens, plus [`Screen`] to pick one by name.

pub mod assets;
pub mod deposits;
pub mod registrations;
pub mod terminations;

pub use assets::Asset;
pub use deposits::Deposit;
pub use terminations::Termination;

use std::fmt;

use crate::model::Row;
use crate::table::{ColumnSpec, FilterSpec};

/// The admin screens with a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Assets,
    Terminations,
    Deposits,
    Registrations,
}

impl Screen {
    /// All screens, in menu order.
    pub const ALL: [Screen; 4] = [
        Screen::Assets,
        Screen::Terminations,
        Screen::Deposits,
        Screen::Registrations,
    ];

    pub fn all() -> &'static [Screen] {
        &Self::ALL
    }

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Assets => "assets",
            Screen::Terminations => "terminations",
            Screen::Deposits => "deposits",
            Screen::Registrations => "registrations",
        }
    }

    /// Parse a screen name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Assets => "Asset Register",
            Screen::Terminations => "Employee Terminations",
            Screen::Deposits => "Deposits",
            Screen::Registrations => "Registrations",
        }
    }

    /// Label of the screen's add button.
    pub fn add_label(&self) -> &'static str {
        match self {
            Screen::Assets => "Add Asset",
            Screen::Terminations => "New Termination",
            Screen::Deposits => "Record Deposit",
            Screen::Registrations => "Register Employee",
        }
    }

    /// The screen's columns, for any row type exposing the same fields.
    pub fn columns<R: Row>(&self) -> Vec<ColumnSpec<R>> {
        match self {
            Screen::Assets => assets::columns(),
            Screen::Terminations => terminations::columns(),
            Screen::Deposits => deposits::columns(),
            Screen::Registrations => registrations::columns(),
        }
    }

    /// The screen's filters.
    pub fn filters(&self) -> Vec<FilterSpec> {
        match self {
            Screen::Assets => assets::filters(),
            Screen::Terminations => terminations::filters(),
            Screen::Deposits => deposits::filters(),
            Screen::Registrations => registrations::filters(),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_from_name() {
        assert_eq!(Screen::from_name("Assets"), Some(Screen::Assets));
        assert_eq!(Screen::from_name(" deposits "), Some(Screen::Deposits));
        assert_eq!(Screen::from_name("payroll"), None);
    }

    #[test]
    fn test_every_screen_filters_on_known_columns() {
        for screen in Screen::all() {
            let columns = screen.columns::<Record>();
            assert!(!columns.is_empty(), "{} has no columns", screen);
            for filter in screen.filters() {
                assert!(
                    columns.iter().any(|c| c.key == filter.id),
                    "{} filter {} has no column",
                    screen,
                    filter.id
                );
            }
        }
    }
}
