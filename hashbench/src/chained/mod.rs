//! A fixed-size hash table resolving collisions by separate chaining.
mod core;
pub use self::core::*;
mod ctors;
mod hash_table;
