//! Implementation of the multiply-mod-prime universal hashing scheme from [Carter & Wegman, 1979].
//!
//! [Carter & Wegman, 1979]: https://doi.org/10.1016/0022-0000(79)90044-8
use hashbench_core::Key;
use rand::Rng;

/// Randomized parameters of a universal hash function `((b · key + c) mod p) mod m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalParams {
    prime: u32,
    b: u32,
    c: u32,
}

impl UniversalParams {
    /// Creates parameters from explicit values.
    ///
    /// `prime` must be a prime, `b` must be in `[1, prime - 1]` and `c` in `[0, prime - 1]`.
    pub const fn new(prime: u32, b: u32, c: u32) -> Self {
        debug_assert!(prime >= 2, r#""prime" must be >= 2"#);
        debug_assert!(b > 0 && b < prime, r#""b" must be in the range [1, prime-1]"#);
        debug_assert!(c < prime, r#""c" must be in the range [0, prime-1]"#);

        Self { prime, b, c }
    }

    /// Draws `b` and `c` uniformly for the given `prime`.
    pub fn from_rng<R: Rng>(prime: u32, rng: &mut R) -> Self {
        debug_assert!(prime >= 2, r#""prime" must be >= 2"#);

        let b = rng.random_range(1..prime);
        let c = rng.random_range(0..prime);
        Self { prime, b, c }
    }

    pub const fn prime(&self) -> u32 {
        self.prime
    }

    pub const fn b(&self) -> u32 {
        self.b
    }

    pub const fn c(&self) -> u32 {
        self.c
    }
}

/// Hashes `key` into `[0, num_buckets)` with the universal function described by `params`.
///
/// Negative keys are handled by normalizing `(b · key + c) mod p` into `[0, p)`.
#[inline]
pub fn universal(key: Key, num_buckets: u32, params: &UniversalParams) -> u32 {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    let hash = (params.b as i128 * key as i128 + params.c as i128).rem_euclid(params.prime as i128);
    (hash % num_buckets as i128) as u32
}
