//! Depth-first enumeration of closed frequent itemsets.

use std::time::Instant;

use closemine::{ItemId, MinSupport, Tid, TransactionDatabase};

use crate::config::MinerConfig;
use crate::error::MineResult;
use crate::result::{MiningOutcome, MiningStats};
use crate::store::PatternStore;
use crate::tidset::TidSet;
use crate::transpose::VerticalIndex;

/// The mining engine.
///
/// Resolves the support threshold, transposes the database into a
/// [`VerticalIndex`] and enumerates the itemset lattice depth-first with
/// prefix extension. At every node, extensions that leave the tidset
/// unchanged are folded into the prefix (item merging), so the emitted
/// itemset is the closure of its prefix; extensions whose support drops
/// below the threshold are pruned; nodes whose tidset is covered by a
/// skipped earlier item are abandoned, since their closed pattern belongs
/// to that item's branch.
///
/// # Example
///
/// ```rust
/// use closemine_engine::{MinSupport, Miner, TransactionDatabase};
///
/// let db = TransactionDatabase::from_transactions(vec![
///     vec![1, 2],
///     vec![1, 2, 3],
///     vec![1, 3],
///     vec![2, 3],
/// ]);
///
/// let outcome = Miner::new().mine(&db, MinSupport::Count(2)).unwrap();
/// assert_eq!(outcome.patterns.support_of(&[1, 2]), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    /// Creates a miner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a miner with a custom configuration.
    pub fn with_config(config: MinerConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the miner configuration.
    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mines all closed frequent itemsets of `db` under `minsup`.
    ///
    /// The threshold is resolved once, before any traversal; an invalid
    /// threshold aborts the run with no partial result. An empty pattern
    /// set is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MineError::Threshold`](crate::MineError::Threshold) if the
    /// threshold is out of range for the database.
    pub fn mine(&self, db: &TransactionDatabase, minsup: MinSupport) -> MineResult<MiningOutcome> {
        let start = Instant::now();
        let minsup_count = minsup.resolve(db.len())?;
        let mut stats = MiningStats::default();
        let mut store = PatternStore::new();

        if db.is_empty() {
            // Degenerate database: the empty itemset (support 0) is the
            // only candidate, and it qualifies only under a zero threshold.
            if minsup_count == 0 {
                store.insert(Vec::new(), 0);
            }
        } else if minsup_count <= db.len() as u64 {
            let index = VerticalIndex::build(db, minsup_count, self.config.item_ordering);
            let root = TidSet::full(db.len() as Tid);
            self.run(&index, minsup_count, &root, &mut store, &mut stats);
        }
        // A threshold above N leaves nothing frequent, not even the empty
        // itemset; the store finalizes to an empty sequence.

        let mut patterns = store.finalize(db.len());
        if let Some(cap) = self.config.max_patterns {
            if patterns.len() > cap {
                patterns.truncate(cap);
                stats.truncated = true;
            }
        }
        stats.duration = start.elapsed();
        Ok(MiningOutcome::new(patterns, stats))
    }

    fn run(
        &self,
        index: &VerticalIndex,
        minsup: u64,
        root: &TidSet,
        store: &mut PatternStore,
        stats: &mut MiningStats,
    ) {
        let search = Search {
            index,
            minsup,
            max_patterns: self.config.max_patterns,
            max_depth: self.config.max_depth,
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            search.expand_parallel(root, store, stats);
            return;
        }

        let mut prefix = Vec::new();
        let mut in_prefix = vec![false; index.item_count()];
        search.expand(&mut prefix, &mut in_prefix, root, None, 0, store, stats);
    }
}

/// Immutable per-run search context shared by every branch.
struct Search<'a> {
    index: &'a VerticalIndex,
    minsup: u64,
    max_patterns: Option<usize>,
    max_depth: Option<usize>,
}

impl Search<'_> {
    /// Expands one search node: the itemset formed by `prefix` with tidset
    /// `tidset`, generated by extending with position `generator` (`None`
    /// at the root).
    ///
    /// Merged positions are appended to `prefix` for the duration of the
    /// node, so every descendant inherits the full closure; the prefix is
    /// restored to `base_len` items on the way out.
    ///
    /// Returns `false` once the pattern cap has been reached and the
    /// traversal should unwind.
    fn expand(
        &self,
        prefix: &mut Vec<usize>,
        in_prefix: &mut [bool],
        tidset: &TidSet,
        generator: Option<usize>,
        depth: usize,
        store: &mut PatternStore,
        stats: &mut MiningStats,
    ) -> bool {
        stats.nodes_explored += 1;
        let item_count = self.index.item_count();

        // Backward pruning: if an item skipped earlier on this path covers
        // the tidset, the closed pattern here contains that item and is
        // generated on its branch instead.
        if let Some(g) = generator {
            for y in 0..g {
                if !in_prefix[y] && tidset.is_subset_of(self.index.tidset(y)) {
                    stats.branches_subsumed += 1;
                    return true;
                }
            }
        }

        let first_candidate = generator.map_or(0, |g| g + 1);
        let base_len = prefix.len();

        // Item merging: candidates covering the tidset extend the prefix
        // without lowering support, so they belong to its closure and
        // never spawn sibling branches.
        for x in first_candidate..item_count {
            if !in_prefix[x] && tidset.is_subset_of(self.index.tidset(x)) {
                in_prefix[x] = true;
                prefix.push(x);
            }
        }
        stats.items_merged += prefix.len() - base_len;

        // After merging, no item outside the prefix covers the tidset:
        // the itemset is closed.
        let mut items: Vec<ItemId> = prefix.iter().map(|&pos| self.index.item(pos)).collect();
        items.sort_unstable();
        store.insert(items, tidset.len());

        let mut keep_going = true;
        if self.max_patterns.is_some_and(|cap| store.len() >= cap) {
            stats.truncated = true;
            keep_going = false;
        }

        let depth_capped = self.max_depth.is_some_and(|d| depth >= d);

        if keep_going {
            for x in first_candidate..item_count {
                if in_prefix[x] {
                    continue;
                }
                let support = tidset.intersection_len(self.index.tidset(x));
                if support < self.minsup {
                    stats.extensions_pruned += 1;
                    continue;
                }
                if depth_capped {
                    stats.truncated = true;
                    continue;
                }
                let child = tidset.intersection(self.index.tidset(x));
                prefix.push(x);
                in_prefix[x] = true;
                keep_going =
                    self.expand(prefix, in_prefix, &child, Some(x), depth + 1, store, stats);
                in_prefix[x] = false;
                prefix.pop();
                if !keep_going {
                    break;
                }
            }
        }

        for &x in &prefix[base_len..] {
            in_prefix[x] = false;
        }
        prefix.truncate(base_len);
        keep_going
    }

    /// Parallel variant: the root node is handled serially, then each
    /// frequent first-level branch is mined independently into a local
    /// store. The vertical index is the only shared state and is read-only;
    /// local stores merge into one behind a mutex, where the idempotence
    /// invariant absorbs any cross-branch rediscovery.
    #[cfg(feature = "parallel")]
    fn expand_parallel(&self, root: &TidSet, store: &mut PatternStore, stats: &mut MiningStats) {
        use parking_lot::Mutex;
        use rayon::prelude::*;

        stats.nodes_explored += 1;
        let item_count = self.index.item_count();

        // Root-level item merging: items present in every transaction.
        let mut in_prefix = vec![false; item_count];
        let mut merged = Vec::new();
        for x in 0..item_count {
            if root.is_subset_of(self.index.tidset(x)) {
                in_prefix[x] = true;
                merged.push(x);
            }
        }
        stats.items_merged += merged.len();

        let mut items: Vec<ItemId> = merged.iter().map(|&pos| self.index.item(pos)).collect();
        items.sort_unstable();
        store.insert(items, root.len());

        if self.max_patterns.is_some_and(|cap| store.len() >= cap) {
            stats.truncated = true;
            return;
        }
        if self.max_depth == Some(0) {
            if (0..item_count).any(|x| !in_prefix[x]) {
                stats.truncated = true;
            }
            return;
        }

        let mut branches = Vec::new();
        for x in 0..item_count {
            if in_prefix[x] {
                continue;
            }
            if root.intersection_len(self.index.tidset(x)) < self.minsup {
                stats.extensions_pruned += 1;
            } else {
                branches.push(x);
            }
        }

        let shared_store = Mutex::new(PatternStore::new());
        let shared_stats = Mutex::new(MiningStats::default());

        branches.into_par_iter().for_each(|x| {
            let mut local_store = PatternStore::new();
            let mut local_stats = MiningStats::default();
            // Branch prefixes start from the root closure.
            let mut prefix = merged.clone();
            prefix.push(x);
            let mut branch_in_prefix = in_prefix.clone();
            branch_in_prefix[x] = true;
            let child = root.intersection(self.index.tidset(x));
            self.expand(
                &mut prefix,
                &mut branch_in_prefix,
                &child,
                Some(x),
                1,
                &mut local_store,
                &mut local_stats,
            );
            shared_store.lock().merge(local_store);
            shared_stats.lock().absorb(&local_stats);
        });

        store.merge(shared_store.into_inner());
        stats.absorb(&shared_stats.into_inner());
    }
}
