//! # closemine
//!
//! Shared data model for closed frequent itemset mining over transactional
//! databases.
//!
//! This crate defines the two-sided contract around the mining engine
//! (`closemine-engine`): the input side (a [`TransactionDatabase`] over a
//! declared item universe plus a [`MinSupport`] threshold) and the output
//! side (an ordered [`PatternSet`] of [`ClosedPattern`]s).
//!
//! Dataset loading, format normalization and reporting are deliberately not
//! part of this crate; preprocessing collaborators construct a
//! [`TransactionDatabase`] and reporting collaborators consume a
//! [`PatternSet`].
//!
//! ## Quick Start
//!
//! ```rust
//! use closemine::{MinSupport, TransactionDatabase};
//!
//! // Universe is inferred from the data.
//! let db = TransactionDatabase::from_transactions(vec![
//!     vec![1, 2],
//!     vec![1, 2, 3],
//!     vec![1, 3],
//! ]);
//! assert_eq!(db.len(), 3);
//!
//! // Thresholds resolve to an absolute count exactly once, at mining start.
//! let minsup = MinSupport::Fraction(0.5);
//! assert_eq!(minsup.resolve(db.len()).unwrap(), 2);
//! ```
//!
//! ## Terminology
//!
//! | Term | Meaning |
//! |------|---------|
//! | Support | Number of transactions containing all items of an itemset |
//! | Closed itemset | Frequent itemset with no proper superset of equal support |
//! | Tidset | Set of transaction indices containing a given itemset |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod database;
mod error;
mod pattern;
mod threshold;

pub use database::TransactionDatabase;
pub use error::{DatabaseError, ThresholdError};
pub use pattern::{ClosedPattern, PatternSet};
pub use threshold::MinSupport;

/// Item identifier type (32-bit unsigned integer).
///
/// Items are drawn from a fixed, finite universe declared before mining
/// begins.
pub type ItemId = u32;

/// Transaction index type.
///
/// Transactions are numbered `0..N` in database order.
pub type Tid = u32;
