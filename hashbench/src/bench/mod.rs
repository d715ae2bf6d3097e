//! Timing harness driving [`crate::chained::ChainedHashTable`] through the hash strategies.
mod dataset;
pub use dataset::*;
mod report;
pub use report::*;
mod runner;
pub use runner::*;
mod suite;
pub use suite::*;
