//! Minimum-support threshold resolution.

use crate::error::ThresholdError;

/// A minimum-support threshold, given either as an absolute transaction
/// count or as a fraction of the database size.
///
/// The threshold is resolved to a single integer count exactly once, at
/// mining start; an invalid threshold is a configuration error reported
/// before any traversal begins.
///
/// # Example
///
/// ```rust
/// use closemine::MinSupport;
///
/// assert_eq!(MinSupport::Count(3).resolve(10).unwrap(), 3);
/// assert_eq!(MinSupport::Fraction(0.25).resolve(10).unwrap(), 3); // ceil(2.5)
/// assert!(MinSupport::Fraction(1.5).resolve(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MinSupport {
    /// Absolute number of transactions an itemset must appear in.
    Count(u64),
    /// Fraction of the database size, in (0, 1].
    Fraction(f64),
}

impl MinSupport {
    /// Resolves the threshold against a database of `num_transactions`
    /// transactions, yielding the absolute support count.
    ///
    /// A count above the database size is valid and simply yields no
    /// patterns. `Count(0)` is accepted only for an empty database, where
    /// it requests the degenerate empty-itemset result; in every other run
    /// the invariant `0 < count` holds.
    ///
    /// # Errors
    ///
    /// * [`ThresholdError::ZeroCount`] for `Count(0)` over a non-empty
    ///   database.
    /// * [`ThresholdError::FractionOutOfRange`] for fractions outside
    ///   (0, 1], including NaN.
    pub fn resolve(self, num_transactions: usize) -> Result<u64, ThresholdError> {
        match self {
            MinSupport::Count(0) if num_transactions > 0 => Err(ThresholdError::ZeroCount),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                if fraction > 0.0 && fraction <= 1.0 {
                    Ok((fraction * num_transactions as f64).ceil() as u64)
                } else {
                    Err(ThresholdError::FractionOutOfRange(fraction))
                }
            }
        }
    }
}
