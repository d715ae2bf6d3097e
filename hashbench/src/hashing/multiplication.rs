//! Knuth's multiplication method.
//!
//! The key is multiplied by a constant `A` in `(0, 1)`, and the fractional part of the product,
//! scaled by the number of buckets, gives the index. With `A` close to the golden ratio
//! fraction keys spread evenly regardless of how the number of buckets factorizes.
use hashbench_core::Key;

/// The fractional part of the golden ratio, `(√5 - 1) / 2`, truncated to 10 digits.
pub const GOLDEN_RATIO_FRACTION: f64 = 0.6180339887;

/// Hashes `key` into `[0, num_buckets)` as `⌊m · frac(key · A)⌋ mod m`.
///
/// `frac` is the non-negative fractional part, so negative keys land in range as well.
#[inline]
pub fn multiplication(key: Key, num_buckets: u32) -> u32 {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let frac = (key as f64 * GOLDEN_RATIO_FRACTION).rem_euclid(1.0);
    ((num_buckets as f64 * frac) as u64 % num_buckets as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_known_values() {
        assert_eq!(multiplication(0, 10), 0);
        // 1 * A = 0.618..., 10 * 0.618... = 6.18...
        assert_eq!(multiplication(1, 10), 6);
        // 2 * A = 1.236..., frac = 0.236...
        assert_eq!(multiplication(2, 10), 2);
        // 3 * A = 1.854..., frac = 0.854...
        assert_eq!(multiplication(3, 1000), 854);
        // -1 * A = -0.618..., frac = 0.381...
        assert_eq!(multiplication(-1, 10), 3);
    }

    #[test]
    fn test_multiplication_single_bucket() {
        for key in [Key::MIN, -1, 0, 1, 12345, Key::MAX] {
            assert_eq!(multiplication(key, 1), 0);
        }
    }

    #[test]
    fn test_multiplication_spreads_consecutive_keys() {
        let m = 1000;
        let indices: Vec<u32> = (0..m as Key).map(|k| multiplication(k, m)).collect();
        let distinct: std::collections::HashSet<_> = indices.iter().collect();
        // Consecutive multiples of the golden ratio are close to equidistributed.
        assert!(distinct.len() > 600, "distinct: {}", distinct.len());
    }
}
