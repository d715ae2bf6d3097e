//! The division method: the bucket is the remainder of the key divided by the number of buckets.
use hashbench_core::Key;

/// Hashes `key` into `[0, num_buckets)` by taking the Euclidean remainder.
///
/// Unlike `%`, the result is non-negative for negative keys too.
#[inline]
pub fn division(key: Key, num_buckets: u32) -> u32 {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    (key as i64).rem_euclid(num_buckets as i64) as u32
}
