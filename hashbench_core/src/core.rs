//! Core trait and type declarations for the whole project.
use crate::error::HashBenchError;

/// Key type stored by the benchmarked tables.
///
/// Only integer keys are supported - the hash functions under test (mid-square in particular) are
/// defined in terms of integer arithmetic.
pub type Key = i32;

/// A fixed-size hash table whose hash function is chosen per operation.
///
/// The strategy `S` is passed to every operation instead of being stored in the table, so the
/// same table can be probed with different hash functions. It's up to the caller to use one
/// strategy consistently for a given set of keys, otherwise removals will look into the wrong
/// bucket.
pub trait HashTable<S: Copy> {
    /// Insert `key` into the bucket selected by `strategy`.
    ///
    /// Duplicates are kept.
    fn insert(&mut self, key: Key, strategy: S) -> Result<(), HashBenchError>;

    /// Remove the first occurrence of `key` from the bucket selected by `strategy`.
    ///
    /// Returns `false` if the key wasn't found.
    fn remove(&mut self, key: Key, strategy: S) -> bool;

    /// Check whether `key` is present in the bucket selected by `strategy`.
    fn contains(&self, key: Key, strategy: S) -> bool;

    /// Remove all keys while keeping capacity and hash parameters.
    fn clear(&mut self);

    /// Get the number of buckets (capacity) of the table.
    fn num_buckets(&self) -> u32;

    /// Get the number of stored keys.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64;
}
