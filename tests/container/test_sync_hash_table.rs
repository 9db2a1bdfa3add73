use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use chainhash::{ChainedHashTable, SyncHashTable};

const THREADS: usize = 4;
const KEYS_PER_THREAD: usize = 200;

#[test]
fn test_sync_hash_table_concurrent_operation() {
    // given
    let table = SyncHashTable::new(ChainedHashTable::new(4).unwrap());
    let removed = AtomicUsize::new(0);

    // when
    crossbeam::scope(|s| {
        for t in 0..THREADS {
            let table = &table;
            let removed = &removed;
            s.spawn(move |_| {
                let mut random = rand::thread_rng();
                for i in 0..KEYS_PER_THREAD {
                    let key = format!("t{}-k{}", t, i);
                    table.insert(&key).unwrap();
                    assert!(table.contains(&key).unwrap());
                    if random.gen_bool(0.3) && table.remove(&key).unwrap() {
                        removed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
        s.spawn(|_| {
            for _ in 0..100 {
                let stats = table.stats().unwrap();
                assert_eq!(stats.bucket_counts.len(), stats.capacity);
                assert_eq!(stats.bucket_counts.iter().sum::<usize>(), stats.len);
                assert!(stats.len <= THREADS * KEYS_PER_THREAD);
            }
        });
    })
    .unwrap();

    // then
    let expected = THREADS * KEYS_PER_THREAD - removed.load(Ordering::Relaxed);
    assert_eq!(table.len().unwrap(), expected);
    assert_eq!(table.bucket_counts().unwrap().iter().sum::<usize>(), expected);

    let inner = table.into_inner().unwrap();
    assert_eq!(inner.len(), expected);
}

#[test]
fn test_sync_hash_table_clear() {
    let table = SyncHashTable::new(ChainedHashTable::new(4).unwrap());
    table.insert("a").unwrap();
    table.insert("a").unwrap();
    assert_eq!(table.collision_count().unwrap(), 1);

    table.clear().unwrap();

    assert_eq!(table.collision_count().unwrap(), 0);
    assert_eq!(table.load_factor().unwrap(), 0.0);
    assert!(!table.contains("a").unwrap());
}
