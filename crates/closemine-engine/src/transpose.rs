//! Table transposition: transaction-major to item-major.

use std::collections::HashMap;

use closemine::{ItemId, Tid, TransactionDatabase};

use crate::config::ItemOrdering;
use crate::tidset::TidSet;

/// The item-major (vertical) view of a transaction database.
///
/// One pass over the database fills, for each universe item, the
/// [`TidSet`] of transactions containing it. Everything downstream operates
/// on these bitsets and never re-scans raw transactions. The index is
/// read-only after construction and is shared by every mining branch.
///
/// Items that meet the minimum support threshold are additionally laid out
/// in the single fixed mining order (descending support with ascending-id
/// tie break by default); the enumeration engine addresses them by
/// position in that order.
#[derive(Debug, Clone)]
pub struct VerticalIndex {
    /// Universe items, ascending, parallel to `tidsets` and `supports`.
    items: Vec<ItemId>,
    /// One bitset per universe item.
    tidsets: Vec<TidSet>,
    /// Cached per-item support counts.
    supports: Vec<u64>,
    /// Item id -> index into the parallel vectors above.
    slot_of: HashMap<ItemId, usize>,
    /// Frequent items in mining order, as indices into the vectors above.
    order: Vec<usize>,
    num_transactions: usize,
}

impl VerticalIndex {
    /// Transposes `db`, keeping items with support at least `minsup_count`
    /// in the mining order given by `ordering`.
    ///
    /// Total: database validity is established when the
    /// [`TransactionDatabase`] is constructed, so transposition itself
    /// cannot fail.
    pub fn build(db: &TransactionDatabase, minsup_count: u64, ordering: ItemOrdering) -> Self {
        let items: Vec<ItemId> = db.universe().to_vec();
        let slot_of: HashMap<ItemId, usize> =
            items.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut tidsets = vec![TidSet::new(); items.len()];
        for (tid, transaction) in db.iter().enumerate() {
            for &item in transaction {
                tidsets[slot_of[&item]].insert(tid as Tid);
            }
        }

        let supports: Vec<u64> = tidsets.iter().map(TidSet::len).collect();

        let mut order: Vec<usize> = (0..items.len())
            .filter(|&slot| supports[slot] >= minsup_count)
            .collect();
        match ordering {
            ItemOrdering::SupportDescending => {
                order.sort_unstable_by(|&a, &b| {
                    supports[b]
                        .cmp(&supports[a])
                        .then_with(|| items[a].cmp(&items[b]))
                });
            }
            ItemOrdering::IdAscending => {
                // Slots are already in ascending item order.
            }
        }

        Self {
            items,
            tidsets,
            supports,
            slot_of,
            order,
            num_transactions: db.len(),
        }
    }

    /// Number of transactions in the underlying database (N).
    #[inline]
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Number of frequent items in the mining order.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.order.len()
    }

    /// The item at mining-order position `pos`.
    #[inline]
    pub fn item(&self, pos: usize) -> ItemId {
        self.items[self.order[pos]]
    }

    /// The bitset of the item at mining-order position `pos`.
    #[inline]
    pub fn tidset(&self, pos: usize) -> &TidSet {
        &self.tidsets[self.order[pos]]
    }

    /// The support of the item at mining-order position `pos`.
    #[inline]
    pub fn support(&self, pos: usize) -> u64 {
        self.supports[self.order[pos]]
    }

    /// Frequent items with their supports, in mining order.
    pub fn frequent_items(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.order
            .iter()
            .map(|&slot| (self.items[slot], self.supports[slot]))
    }

    /// Support of an arbitrary itemset, by intersecting member bitsets.
    ///
    /// The empty itemset is contained in every transaction, so its support
    /// is N. Returns `None` if any item lies outside the database universe.
    pub fn itemset_support(&self, itemset: &[ItemId]) -> Option<u64> {
        let mut slots = itemset.iter().map(|item| self.slot_of.get(item).copied());

        let first = match slots.next() {
            None => return Some(self.num_transactions as u64),
            Some(slot) => slot?,
        };
        let mut acc = self.tidsets[first].clone();
        for slot in slots {
            acc.and_inplace(&self.tidsets[slot?]);
            if acc.is_empty() {
                break;
            }
        }
        Some(acc.len())
    }
}
