pub mod stat;
pub use stat::*;

pub mod strategy;
