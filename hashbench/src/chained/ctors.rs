//! Implements constructors for [`ChainedHashTable`].
use crate::chained::{Bucket, ChainedHashTable};
use crate::hashing::universal::UniversalParams;
use crate::primes::find_next_prime;
use hashbench_core::HashBenchError;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

impl ChainedHashTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// The universal hash function gets the prime `p >= capacity` and coefficients `b`, `c` drawn
    /// from `rng`.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::InvalidCapacity`] if `capacity` is not in `[1, u32::MAX]`.
    /// - [`HashBenchError::PrimeRangeExhausted`] if there is no `u32` prime `>= capacity`.
    pub fn new<R: Rng>(capacity: i64, rng: &mut R) -> Result<Self, HashBenchError> {
        let num_buckets = match u32::try_from(capacity) {
            Ok(num_buckets) if num_buckets > 0 => num_buckets,
            _ => return Err(HashBenchError::InvalidCapacity { capacity }),
        };
        let prime = find_next_prime(num_buckets)?;
        let params = UniversalParams::from_rng(prime, rng);

        debug!(
            "Created chained hash table: num_buckets={}, prime={}",
            num_buckets, prime
        );

        Ok(Self {
            buckets: vec![Bucket::new(); num_buckets as usize].into_boxed_slice(),
            params,
            num_keys: 0,
        })
    }

    /// Creates an empty table with `capacity` buckets, deriving the universal hash parameters
    /// from `seed`.
    ///
    /// Tables created with the same capacity and seed hash identically.
    pub fn from_seed(capacity: i64, seed: u64) -> Result<Self, HashBenchError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::new(capacity, &mut rng)
    }
}
