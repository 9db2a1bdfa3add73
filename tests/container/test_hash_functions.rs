use chainhash::common::logger::initialize_logger;
use chainhash::{ChainedHashTable, HashFunction, HashTable, LengthInitialHash, PolynomialHash};

const SAME_SHAPE: [&str; 6] = ["casa", "cama", "cara", "cana", "capa", "cava"];

#[test]
fn test_polynomial_hash_is_deterministic() {
    assert_eq!(PolynomialHash.index("CASA", 10).unwrap(), 0);
    assert_eq!(PolynomialHash.index("CASA", 10), PolynomialHash.index("CASA", 10));
    for capacity in 1..64 {
        assert!(PolynomialHash.index("CASA", capacity).unwrap() < capacity);
    }
}

#[test]
fn test_length_initial_worked_example() {
    for capacity in 1..64 {
        assert_eq!(LengthInitialHash.index("CASA", capacity).unwrap(), 7 % capacity);
    }
}

#[test]
fn test_length_initial_piles_up_same_shape_keys() {
    initialize_logger();

    // given
    let mut weak = ChainedHashTable::length_initial(16).unwrap();
    let mut strong = ChainedHashTable::new(16).unwrap();

    // when
    for key in SAME_SHAPE.iter() {
        weak.insert(key).unwrap();
        strong.insert(key).unwrap();
    }

    // then
    let weak_stats = weak.stats();
    assert_eq!(weak_stats.longest_chain, 6);
    assert_eq!(weak_stats.collisions, 5);
    assert_eq!(weak_stats.bucket_counts[7], 6);

    let strong_stats = strong.stats();
    assert_eq!(strong_stats.longest_chain, 1);
    assert_eq!(strong_stats.collisions, 0);
    assert_eq!(strong_stats.empty_buckets, 10);
}
