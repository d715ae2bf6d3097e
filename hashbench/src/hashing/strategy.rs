use crate::hashing::division::division;
use crate::hashing::mid_square::mid_square;
use crate::hashing::multiplication::multiplication;
use crate::hashing::universal::{universal, UniversalParams};
use hashbench_core::Key;
use std::fmt::{Display, Formatter};

/// Hash function applied by a table operation.
///
/// Strategies are chosen per call rather than per table, so one table can be probed with any of
/// them. Only [`HashStrategy::Universal`] depends on table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashStrategy {
    /// See [`division`].
    Division,
    /// See [`multiplication`].
    Multiplication,
    /// See [`mid_square`].
    MidSquare,
    /// See [`universal`].
    Universal,
}

impl HashStrategy {
    /// All strategies in reporting order.
    pub const ALL: [HashStrategy; 4] = [
        HashStrategy::Division,
        HashStrategy::Multiplication,
        HashStrategy::MidSquare,
        HashStrategy::Universal,
    ];

    /// Maps `key` to a bucket index in `[0, num_buckets)`.
    #[inline]
    pub fn hash(self, key: Key, num_buckets: u32, params: &UniversalParams) -> u32 {
        match self {
            HashStrategy::Division => division(key, num_buckets),
            HashStrategy::Multiplication => multiplication(key, num_buckets),
            HashStrategy::MidSquare => mid_square(key, num_buckets),
            HashStrategy::Universal => universal(key, num_buckets, params),
        }
    }

    /// Display label used in benchmark reports.
    pub const fn label(self) -> &'static str {
        match self {
            HashStrategy::Division => "hashDivision",
            HashStrategy::Multiplication => "hashMultiplication",
            HashStrategy::MidSquare => "hashMidSquare",
            HashStrategy::Universal => "hashUniversal",
        }
    }
}

impl Display for HashStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
