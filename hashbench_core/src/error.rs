//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashBenchError {
    /// A hash table was requested with a capacity that is not positive or doesn't fit into the
    /// bucket index type.
    #[error("Hash table capacity must be positive and fit into u32, got {capacity}.")]
    InvalidCapacity { capacity: i64 },

    /// The prime search ran past the largest representable candidate.
    #[error("Unable to find a prime number >= {start} within the u32 range.")]
    PrimeRangeExhausted { start: u32 },

    /// A hash function produced a bucket index outside of `[0, num_buckets)`.
    #[error("Hash index {index} is out of range for {num_buckets} buckets.")]
    IndexOutOfRange { index: u64, num_buckets: u32 },

    /// A benchmark was asked to average over zero repetitions.
    #[error("Number of benchmark repetitions must be > 0.")]
    InvalidRepetitions,

    /// Writing benchmark results failed.
    #[error("Failed to write report: {0}")]
    Io(String),
}

impl From<std::io::Error> for HashBenchError {
    fn from(err: std::io::Error) -> Self {
        HashBenchError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err: HashBenchError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err, HashBenchError::Io("pipe closed".to_string()));
        assert_eq!(err.to_string(), "Failed to write report: pipe closed");
    }
}
