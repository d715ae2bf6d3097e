pub mod bench;
pub mod chained;
pub mod config;
pub mod hashing;
pub mod logger;
pub mod primes;
