//! Error types for the mining data model.

use thiserror::Error;

use crate::ItemId;

/// Errors raised while constructing a transaction database.
///
/// These are fatal: the caller gets no database and mining never starts.
/// Repairing malformed input is a preprocessing responsibility, not ours.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    /// A transaction references an item outside the declared universe.
    #[error("transaction {transaction} references item {item} outside the declared universe")]
    UnknownItem {
        /// The offending item identifier.
        item: ItemId,
        /// Index of the transaction containing it.
        transaction: usize,
    },
}

/// Errors raised while resolving a minimum-support threshold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    /// An absolute count of zero was given for a non-empty database.
    #[error("minimum support count must be at least 1 for a non-empty database")]
    ZeroCount,

    /// A fractional threshold outside the valid (0, 1] range.
    #[error("minimum support fraction {0} is outside (0, 1]")]
    FractionOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_item_display() {
        let err = DatabaseError::UnknownItem {
            item: 42,
            transaction: 7,
        };
        assert_eq!(
            err.to_string(),
            "transaction 7 references item 42 outside the declared universe"
        );
    }

    #[test]
    fn test_zero_count_display() {
        assert_eq!(
            ThresholdError::ZeroCount.to_string(),
            "minimum support count must be at least 1 for a non-empty database"
        );
    }

    #[test]
    fn test_fraction_out_of_range_display() {
        let err = ThresholdError::FractionOutOfRange(1.5);
        assert_eq!(
            err.to_string(),
            "minimum support fraction 1.5 is outside (0, 1]"
        );
    }
}
