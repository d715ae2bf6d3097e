//! Benchmark datasets.
use hashbench_core::Key;
use rand::Rng;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Key distribution of a benchmark dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Dense ascending keys `1..=n` - the best case for division hashing.
    Favorable,
    /// Uniform keys from the narrow range `[0, max(1, n / 10)]`, so most keys repeat.
    Moderate,
    /// Uniform keys from the whole non-negative key range.
    Adversarial,
}

impl DatasetKind {
    /// All kinds in the order the benchmark suite runs them.
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Favorable,
        DatasetKind::Moderate,
        DatasetKind::Adversarial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Favorable => "favorable",
            DatasetKind::Moderate => "moderate",
            DatasetKind::Adversarial => "adversarial",
        }
    }
}

impl Display for DatasetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    /// Parses a kind by its name or by the short aliases `opt`, `mid` and `worst`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "favorable" | "opt" => Ok(DatasetKind::Favorable),
            "moderate" | "mid" => Ok(DatasetKind::Moderate),
            "adversarial" | "worst" => Ok(DatasetKind::Adversarial),
            other => Err(format!(
                r#"unknown dataset kind "{}", expected one of: favorable, moderate, adversarial"#,
                other
            )),
        }
    }
}

/// Generates a dataset of `size` keys following the distribution of `kind`.
///
/// # Parameters
///
/// - `kind`: Key distribution.
/// - `size`: Number of keys. Must not exceed [`Key::MAX`].
/// - `rng`: Random number generator, unused for [`DatasetKind::Favorable`].
pub fn generate_dataset<R: Rng>(kind: DatasetKind, size: usize, rng: &mut R) -> Vec<Key> {
    debug_assert!(
        size <= Key::MAX as usize,
        r#""size" must be <= {}"#,
        Key::MAX
    );

    let max = match kind {
        DatasetKind::Favorable => return (1..=Key::MAX).take(size).collect(),
        DatasetKind::Moderate => Key::try_from(size / 10).unwrap_or(Key::MAX).max(1),
        DatasetKind::Adversarial => Key::MAX,
    };
    (0..size).map(|_| rng.random_range(0..=max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    #[test]
    fn test_favorable_is_dense_and_ascending() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let data = generate_dataset(DatasetKind::Favorable, 1000, &mut rng);

        assert_eq!(data.len(), 1000);
        assert!(data.iter().copied().eq(1..=1000));
    }

    #[test]
    fn test_moderate_stays_in_narrow_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let data = generate_dataset(DatasetKind::Moderate, 10_000, &mut rng);

        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&k| (0..=1000).contains(&k)));
        let unique: HashSet<_> = data.iter().collect();
        assert!(unique.len() <= 1001);
    }

    #[test]
    fn test_moderate_small_sizes_use_range_of_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let data = generate_dataset(DatasetKind::Moderate, 5, &mut rng);

        assert_eq!(data.len(), 5);
        assert!(data.iter().all(|&k| k == 0 || k == 1));
    }

    #[test]
    fn test_adversarial_is_non_negative() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let data = generate_dataset(DatasetKind::Adversarial, 10_000, &mut rng);

        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&k| k >= 0));
        // Drawing from 2^31 values, 10k draws are practically all distinct.
        let unique: HashSet<_> = data.iter().collect();
        assert!(unique.len() > 9_900);
    }

    #[test]
    fn test_empty_dataset() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for kind in DatasetKind::ALL {
            assert!(generate_dataset(kind, 0, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_dataset(
            DatasetKind::Adversarial,
            100,
            &mut ChaCha20Rng::seed_from_u64(1),
        );
        let b = generate_dataset(
            DatasetKind::Adversarial,
            100,
            &mut ChaCha20Rng::seed_from_u64(1),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_dataset_kind_parsing() {
        assert_eq!("favorable".parse::<DatasetKind>(), Ok(DatasetKind::Favorable));
        assert_eq!("opt".parse::<DatasetKind>(), Ok(DatasetKind::Favorable));
        assert_eq!("Mid".parse::<DatasetKind>(), Ok(DatasetKind::Moderate));
        assert_eq!("worst".parse::<DatasetKind>(), Ok(DatasetKind::Adversarial));
        assert!("uniform".parse::<DatasetKind>().is_err());
    }
}
