use std::mem;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::common::config::{HashKind, TableConfig, DEFAULT_LOAD_FACTOR};
use crate::common::exception::{HashTableError, Result};
use crate::common::hash::{HashFunction, LengthInitialHash, PolynomialHash};
use crate::container::hash::chain::Chain;
use crate::container::hash::hash_table::HashTable;

/// Snapshot of a table's shape, used to compare hash functions.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TableStats {
    pub capacity: usize,
    pub len: usize,
    pub collisions: usize,
    pub load_factor: f64,
    pub bucket_counts: Vec<usize>,
    pub longest_chain: usize,
    pub empty_buckets: usize,
}

/// Separate-chaining hash table of text keys.
///
/// Every key lives in the chain at `hash_fn.index(key, capacity)` for the
/// current capacity. Before an insert, if the load factor exceeds the limit,
/// the table grows by a quarter (floor division, so capacities below 4 stay
/// put) and every key is re-hashed in bucket order, oldest first within each
/// bucket.
pub struct ChainedHashTable {
    capacity: usize,
    buckets: Vec<Chain>,
    collisions: usize,
    max_load_factor: f64,
    hash_fn: Box<dyn HashFunction>,
}

impl ChainedHashTable {
    /// Table using [`PolynomialHash`].
    pub fn new(capacity: usize) -> Result<ChainedHashTable> {
        ChainedHashTable::with_hash(capacity, Box::new(PolynomialHash))
    }

    /// Table using [`LengthInitialHash`].
    pub fn length_initial(capacity: usize) -> Result<ChainedHashTable> {
        ChainedHashTable::with_hash(capacity, Box::new(LengthInitialHash))
    }

    pub fn with_hash(capacity: usize, hash_fn: Box<dyn HashFunction>) -> Result<ChainedHashTable> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity(capacity));
        }

        Ok(ChainedHashTable {
            capacity,
            buckets: ChainedHashTable::build_empty_buckets(capacity),
            collisions: 0,
            max_load_factor: DEFAULT_LOAD_FACTOR,
            hash_fn,
        })
    }

    pub fn from_config(config: &TableConfig) -> Result<ChainedHashTable> {
        config.validate()?;

        let hash_fn: Box<dyn HashFunction> = match config.hash {
            HashKind::Polynomial => Box::new(PolynomialHash),
            HashKind::LengthInitial => Box::new(LengthInitialHash),
        };
        let mut table = ChainedHashTable::with_hash(config.initial_capacity, hash_fn)?;
        table.max_load_factor = config.max_load_factor;
        Ok(table)
    }

    fn build_empty_buckets(capacity: usize) -> Vec<Chain> {
        let mut buckets = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.push(Chain::new());
        }
        buckets
    }

    fn grown_capacity(capacity: usize) -> usize {
        capacity + capacity / 4
    }

    fn bucket_index(hash_fn: &dyn HashFunction, key: &str, capacity: usize) -> Result<usize> {
        let index = hash_fn.index(key, capacity).map_err(|err| {
            warn!("Hash function rejected key {:?}: {}", key, err);
            err
        })?;

        if index >= capacity {
            warn!("Hash function sent key {:?} to bucket {} of {}", key, index, capacity);
            return Err(HashTableError::IndexOutOfRange { index, capacity });
        }
        Ok(index)
    }

    fn index_of(&self, key: &str) -> Result<usize> {
        ChainedHashTable::bucket_index(self.hash_fn.as_ref(), key, self.capacity)
    }

    /// Rebuilds the bucket array with the grown capacity.
    ///
    /// All new indices are computed before anything moves, so a hash function
    /// error leaves the table as it was.
    fn resize(&mut self) -> Result<()> {
        let old_capacity = self.capacity;
        let new_capacity = ChainedHashTable::grown_capacity(old_capacity);

        let hash_fn = self.hash_fn.as_ref();
        let indices = self
            .buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .map(|key| ChainedHashTable::bucket_index(hash_fn, key, new_capacity))
            .collect::<Result<Vec<usize>>>()?;

        let old_buckets = mem::replace(
            &mut self.buckets,
            ChainedHashTable::build_empty_buckets(new_capacity),
        );
        self.capacity = new_capacity;
        self.collisions = 0;

        for (key, index) in old_buckets.into_iter().flatten().zip(indices.iter().copied()) {
            if !self.buckets[index].is_empty() {
                self.collisions += 1;
            }
            self.buckets[index].append(key);
        }

        debug!(
            "Resized table from {} to {} buckets, re-hashed {} keys with {} collisions",
            old_capacity,
            new_capacity,
            indices.len(),
            self.collisions
        );
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored keys, counted over all chains.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Chain::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Chain::is_empty)
    }

    /// Keys in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    pub fn stats(&self) -> TableStats {
        let bucket_counts = self.bucket_counts();
        TableStats {
            capacity: self.capacity,
            len: bucket_counts.iter().sum(),
            collisions: self.collisions,
            load_factor: self.load_factor(),
            longest_chain: bucket_counts.iter().copied().max().unwrap_or(0),
            empty_buckets: bucket_counts.iter().filter(|count| **count == 0).count(),
            bucket_counts,
        }
    }
}

impl HashTable for ChainedHashTable {
    fn insert(&mut self, key: &str) -> Result<()> {
        if self.load_factor() > self.max_load_factor {
            self.resize()?;
        }

        let index = self.index_of(key)?;
        let collided = !self.buckets[index].is_empty();
        if collided {
            self.collisions += 1;
        }
        trace!("Insert {:?} into bucket {}, collision: {}", key, index, collided);

        self.buckets[index].append(key.to_owned());
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        let index = self.index_of(key)?;
        Ok(self.buckets[index].contains(key))
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let index = self.index_of(key)?;
        Ok(self.buckets[index].remove(key))
    }

    fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.collisions = 0;
        debug!("Cleared table of {} buckets", self.capacity);
    }

    fn collision_count(&self) -> usize {
        self.collisions
    }

    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity as f64
    }

    fn bucket_counts(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }
}
