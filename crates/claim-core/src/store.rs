//! Store — the repository contract records are handed to, plus an in-memory
//! implementation used by the CLI and tests.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// Create/read/update/delete keyed by integer identifier.
pub trait Repository<T> {
    /// Insert a record and return its new identifier.
    fn create(&mut self, record: T) -> Result<i64, StoreError>;
    fn read(&self, id: i64) -> Result<&T, StoreError>;
    fn update(&mut self, id: i64, record: T) -> Result<(), StoreError>;
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
}

/// Records kept in id order; identifiers start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &T)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }
}

impl<T> Repository<T> for MemoryRepository<T> {
    fn create(&mut self, record: T) -> Result<i64, StoreError> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, record);
        Ok(id)
    }

    fn read(&self, id: i64) -> Result<&T, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, id: i64, record: T) -> Result<(), StoreError> {
        let slot = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = record;
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.records.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }
}
