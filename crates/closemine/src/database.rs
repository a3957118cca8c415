//! Transaction database over a declared item universe.

use crate::error::DatabaseError;
use crate::ItemId;

/// An ordered sequence of transactions, each a set of item identifiers
/// drawn from a fixed, finite universe.
///
/// Transactions are canonicalized at construction: items within a
/// transaction are sorted ascending and deduplicated. The database is
/// immutable once built, so the mining engine can share it freely across
/// branches.
///
/// # Example
///
/// ```rust
/// use closemine::TransactionDatabase;
///
/// // Declared universe: any transaction item must come from it.
/// let db = TransactionDatabase::new(
///     vec![1, 2, 3],
///     vec![vec![1, 2], vec![2, 3], vec![1, 2, 3]],
/// ).unwrap();
///
/// assert_eq!(db.len(), 3);
/// assert_eq!(db.universe(), &[1, 2, 3]);
/// assert_eq!(db.transaction(2), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionDatabase {
    /// Declared item universe, sorted ascending, deduplicated.
    universe: Vec<ItemId>,
    /// Transactions in database order, each sorted ascending, deduplicated.
    transactions: Vec<Vec<ItemId>>,
}

impl TransactionDatabase {
    /// Builds a database from a declared universe and raw transactions.
    ///
    /// Every item of every transaction is validated against the universe;
    /// this is the input-validation boundary of the mining core. The
    /// universe and the transactions are canonicalized (sorted,
    /// deduplicated).
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownItem`] if a transaction references
    /// an item outside the declared universe.
    pub fn new<U, T, I>(universe: U, transactions: T) -> Result<Self, DatabaseError>
    where
        U: IntoIterator<Item = ItemId>,
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = ItemId>,
    {
        let mut universe: Vec<ItemId> = universe.into_iter().collect();
        universe.sort_unstable();
        universe.dedup();

        let mut canonical = Vec::new();
        for (tid, transaction) in transactions.into_iter().enumerate() {
            let items = canonicalize(transaction);
            for &item in &items {
                if universe.binary_search(&item).is_err() {
                    return Err(DatabaseError::UnknownItem {
                        item,
                        transaction: tid,
                    });
                }
            }
            canonical.push(items);
        }

        Ok(Self {
            universe,
            transactions: canonical,
        })
    }

    /// Builds a database whose universe is inferred from the transactions.
    ///
    /// Cannot fail: every referenced item is part of the universe by
    /// construction.
    pub fn from_transactions<T, I>(transactions: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = ItemId>,
    {
        let canonical: Vec<Vec<ItemId>> = transactions.into_iter().map(canonicalize).collect();

        let mut universe: Vec<ItemId> = canonical.iter().flatten().copied().collect();
        universe.sort_unstable();
        universe.dedup();

        Self {
            universe,
            transactions: canonical,
        }
    }

    /// Number of transactions (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if the database holds no transactions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The declared item universe, sorted ascending.
    #[inline]
    pub fn universe(&self) -> &[ItemId] {
        &self.universe
    }

    /// The transaction at index `tid`, items sorted ascending.
    ///
    /// # Panics
    ///
    /// Panics if `tid >= self.len()`.
    #[inline]
    pub fn transaction(&self, tid: usize) -> &[ItemId] {
        &self.transactions[tid]
    }

    /// Iterates over transactions in database order.
    pub fn iter(&self) -> impl Iterator<Item = &[ItemId]> {
        self.transactions.iter().map(Vec::as_slice)
    }

    /// Returns true if transaction `tid` contains `item`.
    #[inline]
    pub fn contains(&self, tid: usize, item: ItemId) -> bool {
        self.transactions[tid].binary_search(&item).is_ok()
    }
}

fn canonicalize<I: IntoIterator<Item = ItemId>>(transaction: I) -> Vec<ItemId> {
    let mut items: Vec<ItemId> = transaction.into_iter().collect();
    items.sort_unstable();
    items.dedup();
    items
}
