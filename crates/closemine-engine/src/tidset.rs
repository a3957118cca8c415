//! Transaction-id sets backed by Roaring Bitmaps.

use roaring::RoaringBitmap;

use closemine::Tid;

/// A set of transaction indices stored as a Roaring Bitmap.
///
/// This is the vertical representation the whole engine runs on: one
/// [`TidSet`] per item after transposition, and one per search node during
/// enumeration. Child tidsets are always produced by intersection into a
/// new set, never by mutating a parent, so sibling branches stay
/// independent.
#[derive(Clone, Default, PartialEq)]
pub struct TidSet {
    bitmap: RoaringBitmap,
}

impl TidSet {
    /// Creates an empty tidset.
    pub fn new() -> Self {
        Self {
            bitmap: RoaringBitmap::new(),
        }
    }

    /// Creates a tidset containing every transaction index in `0..n`.
    pub fn full(n: Tid) -> Self {
        let mut bitmap = RoaringBitmap::new();
        bitmap.insert_range(0..n);
        Self { bitmap }
    }

    /// Inserts a transaction index.
    ///
    /// Returns `true` if the index was newly inserted.
    pub fn insert(&mut self, tid: Tid) -> bool {
        self.bitmap.insert(tid)
    }

    /// Returns true if the set contains `tid`.
    #[inline]
    pub fn contains(&self, tid: Tid) -> bool {
        self.bitmap.contains(tid)
    }

    /// Number of transactions in the set — the support of whatever itemset
    /// this tidset belongs to.
    #[inline]
    pub fn len(&self) -> u64 {
        self.bitmap.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    /// Computes the intersection as a new tidset (copy-on-extend).
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bitmap: &self.bitmap & &other.bitmap,
        }
    }

    /// Intersects in place.
    pub fn and_inplace(&mut self, other: &Self) {
        self.bitmap &= &other.bitmap;
    }

    /// Size of the intersection without materializing it.
    ///
    /// This is the incremental support computation: the support of
    /// `P ∪ {x}` is the intersection length of `P`'s tidset and `x`'s
    /// bitset.
    #[inline]
    pub fn intersection_len(&self, other: &Self) -> u64 {
        self.bitmap.intersection_len(&other.bitmap)
    }

    /// Returns true if `self ⊆ other`.
    ///
    /// Containment of a node's tidset in an item's bitset means adding
    /// that item would not change support — the closure-check primitive.
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.bitmap.is_subset(&other.bitmap)
    }

    /// Iterates over transaction indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Tid> + '_ {
        self.bitmap.iter()
    }
}

impl FromIterator<Tid> for TidSet {
    fn from_iter<I: IntoIterator<Item = Tid>>(iter: I) -> Self {
        Self {
            bitmap: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for TidSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TidSet").field("len", &self.len()).finish()
    }
}
