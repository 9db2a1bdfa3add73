pub mod chain;
pub mod chained_hash_table;
pub mod hash_table;
pub mod sync_hash_table;
