//! The mid-square method: the bucket is derived from the middle decimal digits of the key's
//! square.
use hashbench_core::Key;

/// Minimum number of digits the square is zero-padded to before extracting the window.
pub const MIN_DIGITS: usize = 5;

/// Maximum number of middle digits taken from the square.
pub const WINDOW_DIGITS: usize = 3;

/// Hashes `key` into `[0, num_buckets)` using up to 3 middle digits of `key²`.
///
/// The square is computed in `u64`, which holds `|key|²` for every `i32` key without overflow.
#[inline]
pub fn mid_square(key: Key, num_buckets: u32) -> u32 {
    let abs = key.unsigned_abs() as u64;
    mid_square_digits(&(abs * abs).to_string(), num_buckets)
}

/// Hashes a decimal rendering of a square into `[0, num_buckets)`.
///
/// `digits` is left-padded with zeros to [`MIN_DIGITS`], then `min(3, len - start)` digits are
/// taken starting at `start = max(0, len / 2 - 1)`. If the window cannot be parsed as a number
/// the index falls back to 0.
pub fn mid_square_digits(digits: &str, num_buckets: u32) -> u32 {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);

    match middle_window(digits) {
        Some(value) => (value % num_buckets as u64) as u32,
        None => 0,
    }
}

fn middle_window(digits: &str) -> Option<u64> {
    let padded = format!("{:0>width$}", digits, width = MIN_DIGITS);
    let mid = padded.len() / 2;
    let start = mid.saturating_sub(1);
    let len = WINDOW_DIGITS.min(padded.len() - start);
    padded.get(start..start + len)?.parse().ok()
}
