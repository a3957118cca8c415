//! Closed pattern and finalized pattern-set types.

use std::cmp::Ordering;
use std::fmt;

use crate::ItemId;

/// A closed frequent itemset together with its support count.
///
/// Items are held in ascending identifier order, the canonical form used
/// throughout the miner.
///
/// # Example
///
/// ```rust
/// use closemine::ClosedPattern;
///
/// let pattern = ClosedPattern::new(vec![3, 1, 3], 5);
/// assert_eq!(pattern.items(), &[1, 3]);
/// assert_eq!(pattern.support(), 5);
/// assert_eq!(pattern.to_string(), "{1, 3}:5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedPattern {
    items: Vec<ItemId>,
    support: u64,
}

impl ClosedPattern {
    /// Creates a pattern, canonicalizing the item list (sorted ascending,
    /// deduplicated).
    pub fn new(mut items: Vec<ItemId>, support: u64) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items, support }
    }

    /// The items of the pattern, sorted ascending.
    #[inline]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Support count: the number of transactions containing every item.
    #[inline]
    pub fn support(&self) -> u64 {
        self.support
    }

    /// Support as a fraction of `num_transactions`.
    ///
    /// Returns 0.0 for an empty database.
    pub fn support_fraction(&self, num_transactions: usize) -> f64 {
        if num_transactions == 0 {
            0.0
        } else {
            self.support as f64 / num_transactions as f64
        }
    }

    /// Number of items in the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true for the empty itemset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the pattern contains `item`.
    #[inline]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Output ordering: descending support, then ascending size, then
    /// lexicographic items.
    fn output_order(&self, other: &Self) -> Ordering {
        other
            .support
            .cmp(&self.support)
            .then_with(|| self.items.len().cmp(&other.items.len()))
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl fmt::Display for ClosedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}:{}", self.support)
    }
}

/// The finalized, ordered result of a mining run.
///
/// Patterns are sorted by descending support, then by ascending itemset
/// size, then lexicographically by items, so repeated runs over the same
/// input produce byte-identical sequences.
///
/// # Example
///
/// ```rust
/// use closemine::{ClosedPattern, PatternSet};
///
/// let set = PatternSet::new(
///     vec![
///         ClosedPattern::new(vec![1, 2], 2),
///         ClosedPattern::new(vec![1], 3),
///     ],
///     4,
/// );
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.patterns()[0].items(), &[1]); // higher support first
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSet {
    patterns: Vec<ClosedPattern>,
    num_transactions: usize,
}

impl PatternSet {
    /// Creates a pattern set, applying the canonical output ordering.
    pub fn new(mut patterns: Vec<ClosedPattern>, num_transactions: usize) -> Self {
        patterns.sort_unstable_by(ClosedPattern::output_order);
        Self {
            patterns,
            num_transactions,
        }
    }

    /// Creates an empty pattern set over a database of `num_transactions`.
    pub fn empty(num_transactions: usize) -> Self {
        Self {
            patterns: Vec::new(),
            num_transactions,
        }
    }

    /// Number of patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no pattern met the threshold — a valid, reportable
    /// outcome, not an error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The ordered patterns.
    #[inline]
    pub fn patterns(&self) -> &[ClosedPattern] {
        &self.patterns
    }

    /// Size of the database the patterns were mined from.
    #[inline]
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Iterates over patterns in output order.
    pub fn iter(&self) -> impl Iterator<Item = &ClosedPattern> {
        self.patterns.iter()
    }

    /// Looks up the support of an exact itemset, if it is in the set.
    pub fn support_of(&self, items: &[ItemId]) -> Option<u64> {
        let mut canonical = items.to_vec();
        canonical.sort_unstable();
        canonical.dedup();
        self.patterns
            .iter()
            .find(|p| p.items() == canonical.as_slice())
            .map(ClosedPattern::support)
    }

    /// Drops all patterns past `limit`, keeping the output-order prefix.
    pub fn truncate(&mut self, limit: usize) {
        self.patterns.truncate(limit);
    }
}

impl IntoIterator for PatternSet {
    type Item = ClosedPattern;
    type IntoIter = std::vec::IntoIter<ClosedPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a ClosedPattern;
    type IntoIter = std::slice::Iter<'a, ClosedPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_canonicalization() {
        let pattern = ClosedPattern::new(vec![3, 1, 2, 1], 4);
        assert_eq!(pattern.items(), &[1, 2, 3]);
        assert_eq!(pattern.len(), 3);
    }

    #[test]
    fn test_pattern_contains() {
        let pattern = ClosedPattern::new(vec![1, 3], 2);
        assert!(pattern.contains(1));
        assert!(pattern.contains(3));
        assert!(!pattern.contains(2));
    }

    #[test]
    fn test_support_fraction() {
        let pattern = ClosedPattern::new(vec![1], 3);
        assert!((pattern.support_fraction(4) - 0.75).abs() < 1e-12);
        assert_eq!(pattern.support_fraction(0), 0.0);
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = ClosedPattern::new(vec![], 7);
        assert!(pattern.is_empty());
        assert_eq!(pattern.to_string(), "{}:7");
    }

    #[test]
    fn test_display() {
        let pattern = ClosedPattern::new(vec![2, 5, 9], 3);
        assert_eq!(pattern.to_string(), "{2, 5, 9}:3");
    }

    #[test]
    fn test_pattern_set_ordering() {
        let set = PatternSet::new(
            vec![
                ClosedPattern::new(vec![2, 3], 2),
                ClosedPattern::new(vec![1], 3),
                ClosedPattern::new(vec![1, 2], 2),
                ClosedPattern::new(vec![2], 3),
            ],
            4,
        );
        let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
        // Descending support, then size, then lexicographic.
        assert_eq!(rendered, vec!["{1}:3", "{2}:3", "{1, 2}:2", "{2, 3}:2"]);
    }

    #[test]
    fn test_pattern_set_size_before_lex() {
        let set = PatternSet::new(
            vec![
                ClosedPattern::new(vec![1, 2, 3], 2),
                ClosedPattern::new(vec![9], 2),
            ],
            4,
        );
        // The singleton sorts first despite the larger leading item.
        assert_eq!(set.patterns()[0].items(), &[9]);
    }

    #[test]
    fn test_support_of() {
        let set = PatternSet::new(vec![ClosedPattern::new(vec![1, 2], 2)], 4);
        assert_eq!(set.support_of(&[2, 1]), Some(2));
        assert_eq!(set.support_of(&[1]), None);
    }

    #[test]
    fn test_truncate() {
        let mut set = PatternSet::new(
            vec![
                ClosedPattern::new(vec![1], 3),
                ClosedPattern::new(vec![2], 2),
            ],
            4,
        );
        set.truncate(1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.patterns()[0].items(), &[1]);
    }

    #[test]
    fn test_empty_set() {
        let set = PatternSet::empty(10);
        assert!(set.is_empty());
        assert_eq!(set.num_transactions(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let set = PatternSet::new(vec![ClosedPattern::new(vec![1, 2], 2)], 4);
        let json = serde_json::to_string(&set).unwrap();
        let back: PatternSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
