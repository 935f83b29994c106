//! Table configuration

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::table::SortCycle;

/// Page sizes offered by the admin screens.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Page size used when a screen does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Configuration for a [`TableEngine`](crate::table::TableEngine).
///
/// # Example
///
/// ```
/// use ippis_lib::config::TableConfig;
/// use ippis_lib::table::SortCycle;
///
/// let config = TableConfig::default()
///     .with_default_page_size(20)
///     .with_sort_cycle(SortCycle::TwoState);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Page sizes the user can choose from.
    ///
    /// Default: `[10, 20, 50, 100]`
    pub page_size_options: Vec<usize>,

    /// Page size a fresh table starts with. Must be one of the options.
    ///
    /// Default: 50
    pub default_page_size: usize,

    /// What a click on an already descending column does.
    ///
    /// Default: [`SortCycle::ThreeState`]
    pub sort_cycle: SortCycle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            sort_cycle: SortCycle::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Sets the starting page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the sort toggle policy.
    pub fn with_sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Returns `true` if `size` is one of the offered page sizes.
    pub fn offers_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }

    /// Checks that the page sizes are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        if self.page_size_options.contains(&0) || self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.offers_page_size(self.default_page_size) {
            return Err(ConfigError::DefaultNotOffered {
                default: self.default_page_size,
                options: self.page_size_options.clone(),
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded table config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.sort_cycle, SortCycle::ThreeState);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TableConfig::from_json_str(r#"{"defaultPageSize": 10}"#).unwrap();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
    }

    #[test]
    fn test_sort_cycle_from_json() {
        let config = TableConfig::from_json_str(r#"{"sortCycle": "two_state"}"#).unwrap();
        assert_eq!(config.sort_cycle, SortCycle::TwoState);
    }

    #[test]
    fn test_default_must_be_offered() {
        let err = TableConfig::default().with_default_page_size(25).validate().unwrap_err();
        assert!(matches!(err, ConfigError::DefaultNotOffered { default: 25, .. }));
    }

    #[test]
    fn test_rejects_empty_and_zero_sizes() {
        let empty = TableConfig::default().with_page_size_options(Vec::new());
        assert!(matches!(empty.validate(), Err(ConfigError::NoPageSizes)));

        let zero = TableConfig::default().with_page_size_options(vec![0, 50]);
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroPageSize)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            TableConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
