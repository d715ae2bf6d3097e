use crate::bench::{generate_dataset, BenchmarkRunner, ReportSink};
use crate::config::BenchConfig;
use crate::hashing::HashStrategy;
use hashbench_core::HashBenchError;
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Runs every strategy over every (size, kind) dataset of `config`, feeding results to `sink`.
///
/// One dataset is generated per (size, kind) and shared by all strategies.
pub fn run_suite(config: &BenchConfig, sink: &mut dyn ReportSink) -> Result<(), HashBenchError> {
    let mut data_rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };
    let mut runner = BenchmarkRunner::new(Xoshiro256PlusPlus::from_rng(&mut data_rng));

    info!(
        "Running suite: sizes={:?}, kinds={:?}, repetitions={}",
        config.sizes, config.kinds, config.repetitions
    );

    for &size in &config.sizes {
        sink.begin_size(size)?;
        for &kind in &config.kinds {
            sink.begin_kind(kind)?;
            let dataset = generate_dataset(kind, size, &mut data_rng);
            for strategy in HashStrategy::ALL {
                let report = runner.run(&dataset, strategy, strategy.label(), config.repetitions)?;
                sink.report(&report)?;
            }
        }
        info!("Finished size {}", size);
    }

    Ok(())
}
