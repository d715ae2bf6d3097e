//! Generic test cases for hash strategies plugged into a [`hashbench_core::HashTable`].

/// Generates standard test cases for a hash strategy.
///
/// This macro generates test functions that verify:
/// - Insertion never fails with an out-of-range bucket index, for random and extreme keys and a
///   range of capacities.
/// - Inserting a key into an empty table and removing it with the same strategy leaves the table
///   empty.
///
/// # Parameters
///
/// - `name`: Suffix of the generated test functions.
/// - `strategy`: The strategy value passed to the table operations.
/// - `new_table`: A closure `(capacity: i64, seed: u64) -> T` where `T: HashTable<_>`.
///
/// # Example
///
/// ```ignore
/// generate_strategy_tests!(
///     division,
///     HashStrategy::Division,
///     |capacity, seed| ChainedHashTable::from_seed(capacity, seed).unwrap()
/// );
/// ```
#[macro_export]
macro_rules! generate_strategy_tests {
    ($name:ident, $strategy:expr, $new_table:expr$(,)?) => {
        compose_idents::compose_idents!(
            test_fn = [test_insert_stays_in_range_, $name],
            {
                #[test]
                fn test_fn() {
                    use hashbench_core::{HashTable, Key};
                    use rand::{Rng, RngCore, SeedableRng};
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::from_os_rng();

                    for capacity in [1_i64, 2, 7, 10, 64, 1000, 65_537] {
                        let mut table = ($new_table)(capacity, rng.next_u64());
                        let extremes = [Key::MIN, Key::MIN + 1, -1, 0, 1, Key::MAX - 1, Key::MAX];
                        for key in extremes {
                            assert!(
                                table.insert(key, $strategy).is_ok(),
                                "Key {} is out of range for capacity {}",
                                key,
                                capacity,
                            );
                        }
                        for _ in 0..1000 {
                            let key: Key = rng.random();
                            assert!(
                                table.insert(key, $strategy).is_ok(),
                                "Key {} is out of range for capacity {}",
                                key,
                                capacity,
                            );
                        }
                        assert_eq!(table.len(), 1000 + extremes.len());
                    }
                }
            }
        );

        compose_idents::compose_idents!(
            test_fn = [test_insert_remove_round_trip_, $name],
            {
                #[test]
                fn test_fn() {
                    use hashbench_core::{HashTable, Key};
                    use rand::{Rng, RngCore, SeedableRng};
                    use rand_chacha::ChaCha20Rng;

                    let mut rng = ChaCha20Rng::from_os_rng();

                    for _ in 0..200 {
                        let key: Key = rng.random();
                        let mut table = ($new_table)(97, rng.next_u64());

                        table.insert(key, $strategy).unwrap();
                        assert!(table.contains(key, $strategy), "Key: {}", key);
                        assert!(table.remove(key, $strategy), "Key: {}", key);
                        assert!(table.is_empty(), "Key: {}", key);
                        assert!(!table.remove(key, $strategy), "Key: {}", key);
                    }
                }
            }
        );
    };
}
pub use generate_strategy_tests;
