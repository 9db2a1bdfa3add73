use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashTableError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashTableError {
    #[error("Invalid table capacity {0}")]
    InvalidCapacity(usize),
    #[error("Key {0:?} cannot be hashed by this function")]
    InvalidKey(String),
    #[error("Hash function returned index {index} for a table of {capacity} buckets")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("Invalid table config: {0}")]
    InvalidConfig(String),
    #[error("Hash table lock poisoned")]
    LockPoisoned,
}
