use serde::{Deserialize, Serialize};

use crate::common::exception::{HashTableError, Result};

/// Resize is triggered when the load factor exceeds this value.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
pub const DEFAULT_CAPACITY: usize = 16;

/// Which built-in hash function a table is built with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HashKind {
    Polynomial,
    LengthInitial,
}

impl Default for HashKind {
    fn default() -> Self {
        HashKind::Polynomial
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub hash: HashKind,
    pub max_load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            initial_capacity: DEFAULT_CAPACITY,
            hash: HashKind::default(),
            max_load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new(initial_capacity: usize, hash: HashKind) -> TableConfig {
        TableConfig {
            initial_capacity,
            hash,
            ..TableConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(HashTableError::InvalidCapacity(self.initial_capacity));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(HashTableError::InvalidConfig(format!(
                "max_load_factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}
