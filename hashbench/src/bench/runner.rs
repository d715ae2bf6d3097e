use crate::bench::BenchmarkReport;
use crate::chained::ChainedHashTable;
use crate::hashing::HashStrategy;
use hashbench_core::{HashBenchError, HashTable, Key};
use log::{debug, trace};
use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Tables are sized at this multiple of the dataset length, keeping the load factor around 1/3.
pub const CAPACITY_FACTOR: usize = 3;

/// Measures insert and remove throughput of [`ChainedHashTable`] under a [`HashStrategy`].
///
/// Every repetition works on a freshly constructed table whose universal hash parameters are drawn
/// from the runner's random source.
pub struct BenchmarkRunner<R: Rng> {
    rng: R,
}

impl<R: Rng> BenchmarkRunner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Creates an empty table sized for `dataset_len` keys.
    fn fresh_table(&mut self, dataset_len: usize) -> Result<ChainedHashTable, HashBenchError> {
        ChainedHashTable::new(table_capacity(dataset_len), &mut self.rng)
    }

    /// Builds a fresh table and inserts the whole `dataset` into it using `strategy`.
    pub fn populate(
        &mut self,
        dataset: &[Key],
        strategy: HashStrategy,
    ) -> Result<ChainedHashTable, HashBenchError> {
        let mut table = self.fresh_table(dataset.len())?;
        insert_pass(&mut table, dataset, strategy)?;
        Ok(table)
    }

    /// Benchmarks `strategy` on `dataset`, averaging over `repetitions` fresh tables.
    ///
    /// Each repetition times one insert pass over the whole dataset followed by one remove pass
    /// in the same order. Table contents are not verified.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::InvalidRepetitions`] if `repetitions` is 0.
    /// - [`HashBenchError::InvalidCapacity`] if `dataset` is empty.
    /// - Any error raised by table construction or insertion.
    pub fn run(
        &mut self,
        dataset: &[Key],
        strategy: HashStrategy,
        label: &str,
        repetitions: u32,
    ) -> Result<BenchmarkReport, HashBenchError> {
        if repetitions == 0 {
            return Err(HashBenchError::InvalidRepetitions);
        }

        let mut total_insert = Duration::ZERO;
        let mut total_remove = Duration::ZERO;

        for repetition in 0..repetitions {
            let mut table = self.fresh_table(dataset.len())?;

            let start = Instant::now();
            insert_pass(&mut table, dataset, strategy)?;
            let insert_elapsed = start.elapsed();

            let start = Instant::now();
            let removed = remove_pass(&mut table, dataset, strategy);
            let remove_elapsed = start.elapsed();

            trace!(
                "{} repetition {}: insert={:?}, remove={:?}, removed={}",
                label,
                repetition,
                insert_elapsed,
                remove_elapsed,
                removed
            );

            total_insert += insert_elapsed;
            total_remove += remove_elapsed;
        }

        let report = BenchmarkReport {
            label: label.to_string(),
            mean_insert_ms: mean_ms(total_insert, repetitions),
            mean_remove_ms: mean_ms(total_remove, repetitions),
        };
        debug!(
            "Finished {} over {} keys x {} repetitions: {:?}",
            strategy,
            dataset.len(),
            repetitions,
            report
        );
        Ok(report)
    }
}

/// Table capacity requested for a dataset of `dataset_len` keys.
///
/// Saturates at [`i64::MAX`], which table construction then rejects as
/// [`HashBenchError::InvalidCapacity`].
pub fn table_capacity(dataset_len: usize) -> i64 {
    i64::try_from(dataset_len.saturating_mul(CAPACITY_FACTOR)).unwrap_or(i64::MAX)
}

#[inline]
fn insert_pass(
    table: &mut ChainedHashTable,
    dataset: &[Key],
    strategy: HashStrategy,
) -> Result<(), HashBenchError> {
    for &key in dataset {
        table.insert(black_box(key), strategy)?;
    }
    Ok(())
}

/// Returns the number of keys actually removed.
#[inline]
fn remove_pass(table: &mut ChainedHashTable, dataset: &[Key], strategy: HashStrategy) -> usize {
    dataset
        .iter()
        .filter(|&&key| table.remove(black_box(key), strategy))
        .count()
}

fn mean_ms(total: Duration, repetitions: u32) -> f64 {
    total.as_secs_f64() / repetitions as f64 * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{generate_dataset, DatasetKind};
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    fn sorted_buckets(table: &ChainedHashTable) -> Vec<Vec<Key>> {
        table
            .buckets()
            .map(|bucket| {
                let mut keys = bucket.to_vec();
                keys.sort_unstable();
                keys
            })
            .collect()
    }

    #[test]
    fn test_run_reports_label_and_timings() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let data = generate_dataset(DatasetKind::Adversarial, 1000, &mut rng);
        let mut runner = BenchmarkRunner::new(rng);

        for strategy in HashStrategy::ALL {
            let report = runner.run(&data, strategy, strategy.label(), 3).unwrap();
            assert_eq!(report.label, strategy.label());
            assert!(report.mean_insert_ms.is_finite() && report.mean_insert_ms >= 0.0);
            assert!(report.mean_remove_ms.is_finite() && report.mean_remove_ms >= 0.0);
        }
    }

    #[test]
    fn test_run_rejects_zero_repetitions() {
        let mut runner = BenchmarkRunner::new(ChaCha20Rng::from_os_rng());
        assert_eq!(
            runner.run(&[1, 2, 3], HashStrategy::Division, "division", 0),
            Err(HashBenchError::InvalidRepetitions)
        );
    }

    #[test]
    fn test_run_rejects_empty_dataset() {
        let mut runner = BenchmarkRunner::new(ChaCha20Rng::from_os_rng());
        assert_eq!(
            runner.run(&[], HashStrategy::Division, "division", 1),
            Err(HashBenchError::InvalidCapacity { capacity: 0 })
        );
    }

    #[test]
    fn test_table_capacity() {
        assert_eq!(table_capacity(0), 0);
        assert_eq!(table_capacity(100), 300);
        assert_eq!(table_capacity(usize::MAX), i64::MAX);
        assert_eq!(table_capacity(usize::MAX / CAPACITY_FACTOR + 1), i64::MAX);

        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(
            ChainedHashTable::new(table_capacity(usize::MAX), &mut rng).unwrap_err(),
            HashBenchError::InvalidCapacity { capacity: i64::MAX }
        );
    }

    #[test]
    fn test_populate_sizes_table_at_three_times_dataset() {
        let mut runner = BenchmarkRunner::new(ChaCha20Rng::from_os_rng());
        let data: Vec<Key> = (1..=100).collect();
        let table = runner.populate(&data, HashStrategy::Universal).unwrap();

        assert_eq!(table.num_buckets(), 300);
        assert_eq!(table.prime(), 307);
        assert_eq!(table.len(), 100);
    }

    #[test]
    fn test_passes_drain_the_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for kind in DatasetKind::ALL {
            let data = generate_dataset(kind, 500, &mut rng);
            let mut runner = BenchmarkRunner::new(ChaCha20Rng::seed_from_u64(11));
            for strategy in HashStrategy::ALL {
                let mut table = runner.populate(&data, strategy).unwrap();
                assert_eq!(table.len(), data.len());
                assert_eq!(remove_pass(&mut table, &data, strategy), data.len());
                assert!(table.is_empty(), "{} / {}", kind, strategy);
            }
        }
    }

    #[test]
    fn test_division_structure_is_deterministic_across_runs() {
        let mut rng = ChaCha20Rng::from_os_rng();
        let data = generate_dataset(DatasetKind::Favorable, 100, &mut rng);

        let first = BenchmarkRunner::new(ChaCha20Rng::from_os_rng())
            .populate(&data, HashStrategy::Division)
            .unwrap();
        let second = BenchmarkRunner::new(ChaCha20Rng::from_os_rng())
            .populate(&data, HashStrategy::Division)
            .unwrap();

        assert_eq!(sorted_buckets(&first), sorted_buckets(&second));
        // Keys 1..=100 in 300 buckets: each key sits alone in the bucket equal to itself.
        for key in 1..=100 {
            assert_eq!(first.bucket(key as usize), Some(&[key][..]));
        }
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_run_on_large_datasets() {
        let mut rng = ChaCha20Rng::from_os_rng();
        for kind in DatasetKind::ALL {
            let data = generate_dataset(kind, 1_000_000, &mut rng);
            let mut runner = BenchmarkRunner::new(ChaCha20Rng::from_os_rng());
            for strategy in HashStrategy::ALL {
                let report = runner.run(&data, strategy, strategy.label(), 2).unwrap();
                assert!(report.mean_insert_ms > 0.0, "{} / {}", kind, strategy);
            }
        }
    }
}
