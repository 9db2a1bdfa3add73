use std::sync::{Mutex, MutexGuard};

use crate::common::exception::{HashTableError, Result};
use crate::container::hash::chained_hash_table::{ChainedHashTable, TableStats};
use crate::container::hash::hash_table::HashTable;

/// [`ChainedHashTable`] behind a single mutex.
///
/// The lock covers buckets and collision counter together, so a resize is
/// never observed half done.
pub struct SyncHashTable {
    table: Mutex<ChainedHashTable>,
}

impl SyncHashTable {
    pub fn new(table: ChainedHashTable) -> SyncHashTable {
        SyncHashTable {
            table: Mutex::new(table),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ChainedHashTable>> {
        self.table.lock().map_err(|_| HashTableError::LockPoisoned)
    }

    pub fn insert(&self, key: &str) -> Result<()> {
        self.lock()?.insert(key)
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        self.lock()?.contains(key)
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        self.lock()?.remove(key)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn collision_count(&self) -> Result<usize> {
        Ok(self.lock()?.collision_count())
    }

    pub fn load_factor(&self) -> Result<f64> {
        Ok(self.lock()?.load_factor())
    }

    pub fn bucket_counts(&self) -> Result<Vec<usize>> {
        Ok(self.lock()?.bucket_counts())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn stats(&self) -> Result<TableStats> {
        Ok(self.lock()?.stats())
    }

    pub fn into_inner(self) -> Result<ChainedHashTable> {
        self.table.into_inner().map_err(|_| HashTableError::LockPoisoned)
    }
}
