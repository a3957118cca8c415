//! Accumulating store for discovered closed patterns.

use std::collections::HashMap;

use closemine::{ClosedPattern, ItemId, PatternSet};

/// Accumulates `(itemset, support)` pairs during mining.
///
/// Insertion is idempotent: the same itemset stored twice yields one
/// entry. Re-discovery is rare (it can only happen at the root-splitting
/// boundary of a parallel run) but the invariant holds regardless of how
/// patterns arrive.
#[derive(Debug, Default)]
pub struct PatternStore {
    patterns: HashMap<Vec<ItemId>, u64>,
}

impl PatternStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pattern with its support.
    ///
    /// `items` must be in canonical (ascending) order. Returns `true` if
    /// the pattern was newly inserted.
    pub fn insert(&mut self, items: Vec<ItemId>, support: u64) -> bool {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        match self.patterns.entry(items) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                // The same itemset always has the same support.
                debug_assert_eq!(*entry.get(), support);
                false
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(support);
                true
            }
        }
    }

    /// Number of distinct patterns stored so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if nothing has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Absorbs the contents of another store (used to combine the
    /// branch-local stores of a parallel run).
    pub fn merge(&mut self, other: PatternStore) {
        for (items, support) in other.patterns {
            self.insert(items, support);
        }
    }

    /// Finalizes the store into the ordered output sequence.
    pub fn finalize(self, num_transactions: usize) -> PatternSet {
        let patterns: Vec<ClosedPattern> = self
            .patterns
            .into_iter()
            .map(|(items, support)| ClosedPattern::new(items, support))
            .collect();
        PatternSet::new(patterns, num_transactions)
    }
}
