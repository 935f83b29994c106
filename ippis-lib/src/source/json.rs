//! Rows loaded from JSON files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::RowSource;
use crate::error::SourceError;
use crate::model::{Record, Row};

/// Records loaded from a JSON array of objects.
///
/// Each object needs an `id` (string or integer); ids must be unique.
///
/// # Example
///
/// ```
/// use ippis_lib::source::{JsonSource, RowSource};
///
/// let source = JsonSource::from_json_str(r#"[
///     {"id": "AST-001", "name": "Dell Latitude 5420", "category": "Computers"},
///     {"id": "AST-002", "name": "Office Desk", "category": "Furniture"}
/// ]"#).unwrap();
///
/// assert_eq!(source.list().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: Option<PathBuf>,
    records: Vec<Record>,
}

impl JsonSource {
    /// Parses records from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        check_unique_ids(&records)?;
        Ok(Self {
            path: None,
            records,
        })
    }

    /// Reads and parses a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut source = Self::from_json_str(&json)?;
        source.path = Some(path.to_path_buf());
        info!("Loaded {} records from {}", source.records.len(), path.display());
        Ok(source)
    }

    /// The file the records came from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The loaded records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the source and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

fn check_unique_ids(records: &[Record]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if !seen.insert(id.clone()) {
            return Err(SourceError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

impl RowSource<Record> for JsonSource {
    fn list(&self) -> Vec<Record> {
        self.records.clone()
    }
}
