//! Benchmark suite configuration.
use crate::bench::DatasetKind;

/// Dataset sizes benchmarked by default.
pub const DEFAULT_SIZES: [usize; 4] = [10_000, 100_000, 1_000_000, 10_000_000];

/// Default number of fresh tables each (size, kind, strategy) combination is averaged over.
pub const DEFAULT_REPETITIONS: u32 = 100;

/// Parameters of a benchmark suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset sizes, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Key distributions, benchmarked in order for every size.
    pub kinds: Vec<DatasetKind>,
    /// Number of repetitions per (size, kind, strategy).
    pub repetitions: u32,
    /// Seed for dataset generation and table parameters. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            kinds: DatasetKind::ALL.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            seed: None,
        }
    }
}
