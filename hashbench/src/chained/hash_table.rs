//! Implements [`HashTable`] for [`ChainedHashTable`].
use crate::chained::ChainedHashTable;
use crate::hashing::HashStrategy;
use hashbench_core::{HashBenchError, HashTable, Key};

impl HashTable<HashStrategy> for ChainedHashTable {
    /// Appends `key` to the end of its bucket.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::IndexOutOfRange`] if `strategy` produces an index outside of the table.
    fn insert(&mut self, key: Key, strategy: HashStrategy) -> Result<(), HashBenchError> {
        let index = self.bucket_index(key, strategy);
        let num_buckets = self.num_buckets();
        let bucket = self
            .buckets
            .get_mut(index as usize)
            .ok_or(HashBenchError::IndexOutOfRange {
                index: index as u64,
                num_buckets,
            })?;
        bucket.push(key);
        self.num_keys += 1;
        Ok(())
    }

    /// Removes the first occurrence of `key`, keeping the order of the remaining keys in the
    /// bucket.
    fn remove(&mut self, key: Key, strategy: HashStrategy) -> bool {
        let index = self.bucket_index(key, strategy);
        let Some(bucket) = self.buckets.get_mut(index as usize) else {
            return false;
        };
        match bucket.iter().position(|&k| k == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.num_keys -= 1;
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: Key, strategy: HashStrategy) -> bool {
        self.bucket(self.bucket_index(key, strategy) as usize)
            .is_some_and(|bucket| bucket.contains(&key))
    }

    fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.num_keys = 0;
    }

    fn num_buckets(&self) -> u32 {
        self.buckets.len() as u32
    }

    fn len(&self) -> usize {
        self.num_keys
    }

    fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    fn load_factor(&self) -> f64 {
        self.num_keys as f64 / self.buckets.len() as f64
    }
}
