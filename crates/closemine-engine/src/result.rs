//! Mining outcome and statistics types.

use std::time::Duration;

use closemine::PatternSet;

/// The result of a mining run: the ordered pattern set plus traversal
/// statistics.
#[derive(Debug, Clone)]
pub struct MiningOutcome {
    /// The discovered closed patterns, in canonical output order.
    pub patterns: PatternSet,
    /// Traversal statistics.
    pub stats: MiningStats,
}

impl MiningOutcome {
    /// Creates a new outcome.
    pub fn new(patterns: PatternSet, stats: MiningStats) -> Self {
        Self { patterns, stats }
    }

    /// Consumes the outcome, returning just the pattern set.
    pub fn into_patterns(self) -> PatternSet {
        self.patterns
    }
}

/// Statistics from a mining run.
#[derive(Debug, Clone, Default)]
pub struct MiningStats {
    /// Total mining duration, including transposition.
    pub duration: Duration,
    /// Search-tree nodes visited.
    pub nodes_explored: usize,
    /// Candidate extensions dropped for falling below the threshold.
    pub extensions_pruned: usize,
    /// Extension items folded into their prefix because they left the
    /// tidset unchanged.
    pub items_merged: usize,
    /// Subtrees abandoned because a skipped item covered the tidset.
    pub branches_subsumed: usize,
    /// True if a configured cap stopped the traversal early; the pattern
    /// set is then a valid partial result, not a complete one.
    pub truncated: bool,
}

impl MiningStats {
    /// Folds another stats value into this one (parallel branch merge).
    pub fn absorb(&mut self, other: &MiningStats) {
        self.nodes_explored += other.nodes_explored;
        self.extensions_pruned += other.extensions_pruned;
        self.items_merged += other.items_merged;
        self.branches_subsumed += other.branches_subsumed;
        self.truncated |= other.truncated;
    }
}
