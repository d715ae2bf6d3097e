//! Declares core types for [`ChainedHashTable`].
use crate::hashing::universal::UniversalParams;
use crate::hashing::HashStrategy;
use hashbench_core::Key;
use std::fmt::{Debug, Formatter};

/// A collision chain: keys that hashed into the same slot, in insertion order.
///
/// Duplicates are allowed.
pub type Bucket = Vec<Key>;

/// Fixed-size hash table with separate chaining.
///
/// The number of buckets is fixed at construction - the table never grows or rehashes. The hash
/// function is passed to each operation as a [`HashStrategy`], and the parameters of the universal
/// hash function are drawn once when the table is created.
///
/// # Examples
///
/// ```rust
/// use hashbench::chained::ChainedHashTable;
/// use hashbench::hashing::HashStrategy;
/// use hashbench_core::HashTable;
///
/// let mut table = ChainedHashTable::from_seed(9, 42).unwrap();
/// for key in [0, 9, 18] {
///     table.insert(key, HashStrategy::Division).unwrap();
/// }
///
/// assert_eq!(table.bucket(0), Some(&[0, 9, 18][..]));
/// assert!(table.remove(9, HashStrategy::Division));
/// assert!(!table.remove(9, HashStrategy::Division));
/// ```
pub struct ChainedHashTable {
    pub(super) buckets: Box<[Bucket]>,
    pub(super) params: UniversalParams,
    pub(super) num_keys: usize,
}

impl Debug for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("num_buckets", &self.buckets.len())
            .field("num_keys", &self.num_keys)
            .field("params", &self.params)
            .finish()
    }
}

impl ChainedHashTable {
    /// Get the prime modulus of the universal hash function.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.params.prime()
    }

    /// Get the parameters of the universal hash function.
    #[inline]
    pub fn universal_params(&self) -> &UniversalParams {
        &self.params
    }

    /// Compute the bucket index `strategy` assigns to `key` in this table.
    #[inline]
    pub fn bucket_index(&self, key: Key, strategy: HashStrategy) -> u32 {
        strategy.hash(key, self.buckets.len() as u32, &self.params)
    }

    /// Get the keys stored in the bucket at `index`.
    pub fn bucket(&self, index: usize) -> Option<&[Key]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterate over all buckets in index order.
    pub fn buckets(&self) -> impl Iterator<Item = &[Key]> {
        self.buckets.iter().map(Vec::as_slice)
    }
}
