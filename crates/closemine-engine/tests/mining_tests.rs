//! End-to-end mining tests against a brute-force lattice oracle.
//!
//! The oracle enumerates the full itemset lattice over the database
//! universe, computes supports by scanning rows, and keeps the closed
//! frequent itemsets. The engine must agree with it exactly: every oracle
//! pattern appears in the output (completeness), and nothing else does
//! (soundness).

use std::collections::BTreeSet;

use closemine_engine::{
    ItemId, ItemOrdering, MinSupport, Miner, MinerConfig, TransactionDatabase,
};

/// Computes the support of `itemset` by a full row scan.
fn scan_support(db: &TransactionDatabase, itemset: &[ItemId]) -> u64 {
    db.iter()
        .filter(|transaction| {
            itemset
                .iter()
                .all(|item| transaction.binary_search(item).is_ok())
        })
        .count() as u64
}

/// Enumerates every closed frequent itemset of `db` by brute force,
/// including the empty itemset.
fn oracle(db: &TransactionDatabase, minsup: u64) -> BTreeSet<(Vec<ItemId>, u64)> {
    let universe = db.universe();
    assert!(universe.len() <= 16, "oracle only handles small universes");

    let mut closed = BTreeSet::new();
    for mask in 0u32..(1 << universe.len()) {
        let itemset: Vec<ItemId> = (0..universe.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| universe[i])
            .collect();
        let support = scan_support(db, &itemset);
        if support < minsup {
            continue;
        }
        // Closed iff no single-item extension preserves support.
        let is_closed = universe
            .iter()
            .filter(|item| itemset.binary_search(item).is_err())
            .all(|&item| {
                let mut extended = itemset.clone();
                extended.push(item);
                extended.sort_unstable();
                scan_support(db, &extended) < support
            });
        if is_closed {
            closed.insert((itemset, support));
        }
    }
    closed
}

fn mined(db: &TransactionDatabase, minsup: MinSupport) -> BTreeSet<(Vec<ItemId>, u64)> {
    Miner::new()
        .mine(db, minsup)
        .unwrap()
        .patterns
        .iter()
        .map(|p| (p.items().to_vec(), p.support()))
        .collect()
}

/// Deterministic pseudo-random database (LCG; no external rand dep).
fn random_database(seed: u64, num_transactions: usize, num_items: u32) -> TransactionDatabase {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    let transactions: Vec<Vec<ItemId>> = (0..num_transactions)
        .map(|_| {
            (0..num_items)
                .filter(|_| next() % 100 < 40)
                .collect()
        })
        .collect();
    TransactionDatabase::from_transactions(transactions)
}

#[test]
fn oracle_agreement_scenario_a() {
    // [{a,b}, {a,b,c}, {a,c}, {b,c}] with a=1, b=2, c=3.
    let db = TransactionDatabase::from_transactions(vec![
        vec![1, 2],
        vec![1, 2, 3],
        vec![1, 3],
        vec![2, 3],
    ]);
    assert_eq!(mined(&db, MinSupport::Count(2)), oracle(&db, 2));
}

#[test]
fn oracle_agreement_skewed_supports() {
    // One dominant item, several rare ones, duplicate rows.
    let db = TransactionDatabase::from_transactions(vec![
        vec![1],
        vec![1, 2],
        vec![1, 2],
        vec![1, 2, 3],
        vec![1, 4],
        vec![1, 2, 3, 4],
        vec![5],
    ]);
    for minsup in 1..=4 {
        assert_eq!(
            mined(&db, MinSupport::Count(minsup)),
            oracle(&db, minsup),
            "disagreement at minsup={minsup}"
        );
    }
}

#[test]
fn oracle_agreement_random_databases() {
    for seed in [3, 17, 2024] {
        let db = random_database(seed, 40, 8);
        for minsup in [1, 2, 5, 10] {
            assert_eq!(
                mined(&db, MinSupport::Count(minsup)),
                oracle(&db, minsup),
                "disagreement at seed={seed} minsup={minsup}"
            );
        }
    }
}

#[test]
fn oracle_agreement_with_id_ascending_override() {
    let db = random_database(99, 30, 7);
    let miner = Miner::with_config(
        MinerConfig::builder()
            .with_item_ordering(ItemOrdering::IdAscending)
            .build(),
    );
    let result: BTreeSet<(Vec<ItemId>, u64)> = miner
        .mine(&db, MinSupport::Count(3))
        .unwrap()
        .patterns
        .iter()
        .map(|p| (p.items().to_vec(), p.support()))
        .collect();
    assert_eq!(result, oracle(&db, 3));
}

#[test]
fn empty_database_with_zero_count() {
    // Scenario B: N = 0 with a resolved count of 0 yields exactly the
    // empty itemset with support 0.
    let db = TransactionDatabase::from_transactions(Vec::<Vec<ItemId>>::new());
    let outcome = Miner::new().mine(&db, MinSupport::Count(0)).unwrap();

    assert_eq!(outcome.patterns.len(), 1);
    let only = &outcome.patterns.patterns()[0];
    assert!(only.is_empty());
    assert_eq!(only.support(), 0);
}

#[test]
fn empty_database_with_positive_count() {
    let db = TransactionDatabase::from_transactions(Vec::<Vec<ItemId>>::new());
    let outcome = Miner::new().mine(&db, MinSupport::Count(1)).unwrap();
    assert!(outcome.patterns.is_empty());
}

#[test]
fn single_transaction_yields_only_full_itemset() {
    // Scenario C: all single items are subsumed by the full set.
    let db = TransactionDatabase::from_transactions(vec![vec![1, 2, 3]]);
    let outcome = Miner::new().mine(&db, MinSupport::Count(1)).unwrap();

    assert_eq!(outcome.patterns.len(), 1);
    let only = &outcome.patterns.patterns()[0];
    assert_eq!(only.items(), &[1, 2, 3]);
    assert_eq!(only.support(), 1);
}

#[test]
fn threshold_above_n_yields_empty_output() {
    // Scenario D, regardless of database content.
    let db = random_database(7, 20, 6);
    let outcome = Miner::new().mine(&db, MinSupport::Count(21)).unwrap();
    assert!(outcome.patterns.is_empty());
    assert!(!outcome.stats.truncated);
}

#[test]
fn fraction_threshold_matches_absolute_equivalent() {
    let db = random_database(11, 20, 6);
    // ceil(0.25 * 20) = 5
    let by_fraction = mined(&db, MinSupport::Fraction(0.25));
    let by_count = mined(&db, MinSupport::Count(5));
    assert_eq!(by_fraction, by_count);
}

#[test]
fn repeated_runs_are_deterministic() {
    let db = random_database(5, 35, 8);
    let first = Miner::new().mine(&db, MinSupport::Count(4)).unwrap();
    let second = Miner::new().mine(&db, MinSupport::Count(4)).unwrap();
    assert_eq!(first.patterns, second.patterns);
}

#[test]
fn anti_monotonicity_holds_along_output_patterns() {
    let db = random_database(42, 30, 7);
    let outcome = Miner::new().mine(&db, MinSupport::Count(2)).unwrap();

    // Every stored pattern's support can never exceed the support of any
    // of its sub-itemsets.
    for pattern in &outcome.patterns {
        for drop in 0..pattern.len() {
            let mut subset = pattern.items().to_vec();
            subset.remove(drop);
            assert!(scan_support(&db, &subset) >= pattern.support());
        }
        assert_eq!(scan_support(&db, pattern.items()), pattern.support());
    }
}

#[test]
fn max_patterns_cap_is_partial_but_valid() {
    let db = random_database(8, 40, 8);
    let full = mined(&db, MinSupport::Count(3));
    let capped = Miner::with_config(MinerConfig::builder().with_max_patterns(5).build())
        .mine(&db, MinSupport::Count(3))
        .unwrap();

    assert!(capped.patterns.len() <= 5);
    assert!(capped.stats.truncated);
    // Every returned pattern is a genuine closed frequent itemset.
    for pattern in &capped.patterns {
        assert!(full.contains(&(pattern.items().to_vec(), pattern.support())));
    }
}

#[test]
fn max_depth_cap_flags_truncation() {
    let db = random_database(13, 30, 8);
    let outcome = Miner::with_config(MinerConfig::builder().with_max_depth(1).build())
        .mine(&db, MinSupport::Count(2))
        .unwrap();

    assert!(outcome.stats.truncated);
    for pattern in &outcome.patterns {
        assert_eq!(scan_support(&db, pattern.items()), pattern.support());
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_run_matches_serial_run() {
    let db = random_database(21, 50, 9);
    let serial = Miner::new().mine(&db, MinSupport::Count(4)).unwrap();
    let parallel = Miner::with_config(MinerConfig::builder().with_parallel(true).build())
        .mine(&db, MinSupport::Count(4))
        .unwrap();

    assert_eq!(serial.patterns, parallel.patterns);
}
