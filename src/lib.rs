pub mod common;
pub mod container;

pub use crate::common::config::{HashKind, TableConfig};
pub use crate::common::exception::{HashTableError, Result};
pub use crate::common::hash::{FnHash, HashFunction, LengthInitialHash, PolynomialHash};
pub use crate::container::hash::chained_hash_table::{ChainedHashTable, TableStats};
pub use crate::container::hash::hash_table::HashTable;
pub use crate::container::hash::sync_hash_table::SyncHashTable;
