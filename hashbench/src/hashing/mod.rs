//! Hash functions under benchmark.
//!
//! Every function maps a [`hashbench_core::Key`] and a number of buckets `m` to a bucket index in
//! `[0, m)`. [`HashStrategy`] selects one of them per table operation.
pub mod division;
pub mod mid_square;
pub mod multiplication;
mod strategy;
pub use strategy::*;
pub mod universal;
