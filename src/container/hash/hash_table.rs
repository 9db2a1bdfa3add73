use crate::common::exception::Result;

/// Consumer-facing contract of a text-key hash table.
///
/// Operations that have to hash a key can fail when the hash function refuses
/// it; the observers never fail.
pub trait HashTable {
    fn insert(&mut self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool>;

    /// Removes one occurrence of `key`, returning whether anything was removed.
    fn remove(&mut self, key: &str) -> Result<bool>;

    fn clear(&mut self);

    fn collision_count(&self) -> usize;

    fn load_factor(&self) -> f64;

    fn bucket_counts(&self) -> Vec<usize>;
}
