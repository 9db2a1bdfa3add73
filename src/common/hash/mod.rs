use std::convert::TryFrom;

#[cfg(test)]
use mockall::automock;

use crate::common::exception::{HashTableError, Result};

/// Maps a key onto a bucket of a table with `capacity` buckets.
///
/// Implementations must return an index in `[0, capacity)`; the table checks
/// every index it receives and refuses the ones that fall outside.
#[cfg_attr(test, automock)]
pub trait HashFunction: Send + Sync {
    fn index(&self, key: &str, capacity: usize) -> Result<usize>;
}

/// Polynomial rolling hash with base 31.
///
/// The modulo is taken after every character, on 32-bit signed arithmetic over
/// UTF-16 code units, so the result for a given capacity is the same on every
/// platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct PolynomialHash;

const BASE: i32 = 31;

impl HashFunction for PolynomialHash {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        let modulus = i32::try_from(capacity)
            .ok()
            .filter(|m| *m > 0)
            .ok_or(HashTableError::InvalidCapacity(capacity))?;

        let mut code: i32 = 0;
        for unit in key.encode_utf16() {
            code = BASE.wrapping_mul(code).wrapping_add(i32::from(unit)) % modulus;
        }
        Ok(code.unsigned_abs() as usize)
    }
}

/// Key length plus the alphabet position of the first letter (`A`/`a` = 1).
///
/// Deliberately weak: every key with the same length and initial lands in the
/// same bucket. Keys that are empty or do not start with an ASCII letter are
/// rejected with [`HashTableError::InvalidKey`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthInitialHash;

impl HashFunction for LengthInitialHash {
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity(capacity));
        }

        let initial = key
            .chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| HashTableError::InvalidKey(key.to_owned()))?;
        let position = usize::from(initial.to_ascii_uppercase() as u8 - b'A') + 1;

        Ok((key.encode_utf16().count() + position) % capacity)
    }
}

/// Adapts a plain function or closure into a [`HashFunction`].
pub struct FnHash<F> {
    hash_fn: F,
}

impl<F> FnHash<F>
where
    F: Fn(&str, usize) -> usize + Send + Sync,
{
    pub fn new(hash_fn: F) -> FnHash<F> {
        FnHash { hash_fn }
    }
}

impl<F> HashFunction for FnHash<F>
where
    F: Fn(&str, usize) -> usize + Send + Sync,
{
    fn index(&self, key: &str, capacity: usize) -> Result<usize> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity(capacity));
        }
        Ok((self.hash_fn)(key, capacity))
    }
}
