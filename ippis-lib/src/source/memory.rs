//! In-memory row store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use super::RowSource;
use crate::error::SourceError;
use crate::model::Row;

/// A shared, ordered, mutable collection of rows.
///
/// This is what an add/edit/delete handler writes to when there is no real
/// backend. Every mutation bumps [`version`](Self::version), so a screen can
/// tell that its table needs a [`reload`](crate::table::TableEngine::reload).
///
/// Clones share the same rows.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Record;
/// use ippis_lib::source::{MemoryStore, RowSource};
///
/// let store = MemoryStore::new();
/// store.insert(Record::new(1).set("name", "Generator")).unwrap();
/// assert_eq!(store.list().len(), 1);
/// assert_eq!(store.version(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryStore<T: Row> {
    rows: Arc<RwLock<Vec<T>>>,
    version: Arc<AtomicU64>,
}

impl<T: Row> MemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Creates a store holding `rows`.
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    // A panicking writer leaves every row whole, so a poisoned lock is
    // still safe to use.
    fn read_rows(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_rows(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of mutations applied so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.read_rows().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by id.
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.read_rows().iter().find(|row| row.id() == *id).cloned()
    }

    /// Appends a row. Fails if a row with the same id exists.
    pub fn insert(&self, row: T) -> Result<(), SourceError> {
        let mut guard = self.write_rows();
        let id = row.id();
        if guard.iter().any(|r| r.id() == id) {
            return Err(SourceError::DuplicateId(id.to_string()));
        }
        guard.push(row);
        drop(guard);
        self.bump();
        debug!("Inserted row {}", id);
        Ok(())
    }

    /// Replaces the row with the same id, keeping its position.
    ///
    /// Returns `false` if there is no such row.
    pub fn update(&self, row: T) -> bool {
        let mut guard = self.write_rows();
        let id = row.id();
        let Some(slot) = guard.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        *slot = row;
        drop(guard);
        self.bump();
        debug!("Updated row {}", id);
        true
    }

    /// Updates the row if it exists, appends it otherwise.
    ///
    /// Returns `true` if the row was new.
    pub fn upsert(&self, row: T) -> bool {
        let mut guard = self.write_rows();
        let id = row.id();
        let inserted = match guard.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = row;
                false
            }
            None => {
                guard.push(row);
                true
            }
        };
        drop(guard);
        self.bump();
        debug!("Upserted row {} (new: {})", id, inserted);
        inserted
    }

    /// Removes the row with `id` and returns it.
    pub fn remove(&self, id: &T::Id) -> Option<T> {
        let mut guard = self.write_rows();
        let index = guard.iter().position(|r| r.id() == *id)?;
        let row = guard.remove(index);
        drop(guard);
        self.bump();
        debug!("Removed row {}", id);
        Some(row)
    }
}

impl<T: Row> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Row> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Row> RowSource<T> for MemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.read_rows().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, RecordId, Value};

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let store = MemoryStore::new();
        store.insert(Record::new(1)).unwrap();
        let err = store.insert(Record::new(1)).unwrap_err();
        assert!(matches!(err, SourceError::DuplicateId(id) if id == "1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = MemoryStore::with_rows(vec![
            Record::new(1).set("name", "A"),
            Record::new(2).set("name", "B"),
        ]);
        assert!(store.update(Record::new(1).set("name", "A2")));
        assert!(!store.update(Record::new(9)));

        let rows = store.list();
        assert_eq!(rows[0].get("name"), Some(&Value::from("A2")));
        assert_eq!(rows[1].record_id(), &RecordId::Number(2));
    }

    #[test]
    fn test_upsert_and_remove() {
        let store = MemoryStore::new();
        assert!(store.upsert(Record::new("x")));
        assert!(!store.upsert(Record::new("x").set("k", 1i64)));
        assert_eq!(store.len(), 1);

        let removed = store.remove(&RecordId::from("x")).unwrap();
        assert_eq!(removed.get("k"), Some(&Value::Int(1)));
        assert!(store.remove(&RecordId::from("x")).is_none());
        assert!(store.is_empty());
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_clones_share_rows() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.insert(Record::new(5)).unwrap();
        assert!(store.get(&RecordId::Number(5)).is_some());
    }

    fn poison(store: &MemoryStore<Record>) {
        let rows = Arc::clone(&store.rows);
        let result = std::thread::spawn(move || {
            let _guard = rows.write().unwrap();
            panic!("writer panicked");
        })
        .join();
        assert!(result.is_err());
        assert!(store.rows.is_poisoned());
    }

    #[test]
    fn test_writes_survive_a_poisoned_lock() {
        let store = MemoryStore::new();
        poison(&store);

        store.insert(Record::new(1)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.insert(Record::new(1)).is_err());

        assert!(store.upsert(Record::new(2)));
        assert!(store.update(Record::new(2).set("name", "Van")));
        assert_eq!(store.list().len(), 2);
        assert!(store.remove(&RecordId::Number(1)).is_some());
        assert_eq!(store.version(), 4);
    }

    #[tokio::test]
    async fn test_submit_after_poisoned_lock_stores_the_row() {
        use crate::submit::Submitter;

        let store = MemoryStore::new();
        poison(&store);

        let id = store.submit(Record::new(3)).await.unwrap();
        assert!(store.get(&id).is_some());
    }
}
