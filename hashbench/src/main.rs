use clap::Parser;
use hashbench::bench::{run_suite, DatasetKind, TextSink};
use hashbench::config::{BenchConfig, DEFAULT_REPETITIONS, DEFAULT_SIZES};
use hashbench::logger::initialize_logger;
use hashbench_core::HashBenchError;
use std::io;

/// Measures insert/remove throughput of a chained hash table under division, multiplication,
/// mid-square and universal hashing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset sizes, comma separated.
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Key distributions: favorable (opt), moderate (mid), adversarial (worst).
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DatasetKind::ALL
    )]
    kinds: Vec<DatasetKind>,

    /// Number of fresh tables each measurement is averaged over.
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: u32,

    /// Seed for reproducible datasets and hash parameters.
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        Self {
            sizes: args.sizes,
            kinds: args.kinds,
            repetitions: args.repetitions,
            seed: args.seed,
        }
    }
}

fn main() -> Result<(), HashBenchError> {
    initialize_logger();

    let config = BenchConfig::from(Args::parse());
    let mut sink = TextSink::new(io::stdout().lock());
    run_suite(&config, &mut sink)
}
