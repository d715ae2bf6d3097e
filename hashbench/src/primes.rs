//! Prime search used to pick the modulus of the universal hash family.
use hashbench_core::HashBenchError;

/// Checks whether `num` is prime using trial division by 2, 3 and then all `6k ± 1` up to
/// `√num`.
pub const fn is_prime(num: u32) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }

    // `u64` keeps `i * i` from overflowing near `u32::MAX`.
    let num = num as u64;
    let mut i: u64 = 5;
    while i * i <= num {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Finds the smallest prime that is greater than or equal to `n`.
///
/// Values `<= 1` resolve to 2. Even values start the search at `n + 1`.
///
/// # Errors
///
/// - [`HashBenchError::PrimeRangeExhausted`] if no prime `>= n` fits into `u32`.
pub fn find_next_prime(n: u32) -> Result<u32, HashBenchError> {
    if n <= 1 {
        return Ok(2);
    }
    // 2 is the only even prime and the odd-only walk below would skip it.
    if n == 2 {
        return Ok(2);
    }

    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    loop {
        if is_prime(candidate) {
            return Ok(candidate);
        }
        candidate = candidate
            .checked_add(2)
            .ok_or(HashBenchError::PrimeRangeExhausted { start: n })?;
    }
}
