//! Configuration types for the miner.

/// Configuration for a [`Miner`](crate::Miner).
///
/// # Example
///
/// ```rust
/// use closemine_engine::{ItemOrdering, MinerConfig};
///
/// let config = MinerConfig::builder()
///     .with_item_ordering(ItemOrdering::IdAscending)
///     .with_max_patterns(10_000)
///     .with_max_depth(8)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinerConfig {
    /// Mining order for frequent items.
    pub item_ordering: ItemOrdering,
    /// Maximum number of patterns to return (None = unlimited). Hitting
    /// the cap yields a valid partial result flagged as truncated.
    pub max_patterns: Option<usize>,
    /// Maximum extension depth, counted in items per prefix (None =
    /// unlimited). Hitting the cap yields a truncated result.
    pub max_depth: Option<usize>,
    /// Mine independent top-level branches in parallel (requires the
    /// `parallel` feature).
    pub parallel: bool,
}

impl MinerConfig {
    /// Creates a new builder for MinerConfig.
    pub fn builder() -> MinerConfigBuilder {
        MinerConfigBuilder::default()
    }
}

/// Builder for MinerConfig.
#[derive(Debug, Clone, Default)]
pub struct MinerConfigBuilder {
    item_ordering: ItemOrdering,
    max_patterns: Option<usize>,
    max_depth: Option<usize>,
    parallel: bool,
}

impl MinerConfigBuilder {
    /// Overrides the mining order for frequent items.
    pub fn with_item_ordering(mut self, ordering: ItemOrdering) -> Self {
        self.item_ordering = ordering;
        self
    }

    /// Caps the number of returned patterns.
    pub fn with_max_patterns(mut self, max_patterns: usize) -> Self {
        self.max_patterns = Some(max_patterns);
        self
    }

    /// Caps the extension depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enables or disables parallel branch mining.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the MinerConfig.
    pub fn build(self) -> MinerConfig {
        MinerConfig {
            item_ordering: self.item_ordering,
            max_patterns: self.max_patterns,
            max_depth: self.max_depth,
            parallel: self.parallel,
        }
    }
}

/// The single fixed global ordering over frequent items.
///
/// All enumeration and tie-breaking follow this order, which is what
/// guarantees each itemset is generated exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemOrdering {
    /// Descending support, ties broken by ascending item id. The default:
    /// extending from the most frequent items first keeps branching low.
    #[default]
    SupportDescending,
    /// Ascending item id, ignoring supports.
    IdAscending,
}
