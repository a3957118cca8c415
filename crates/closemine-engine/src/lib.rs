//! # closemine-engine
//!
//! Closed frequent itemset mining by table transposition.
//!
//! The engine targets databases with many transactions relative to their
//! number of distinct items. It transposes the transaction-major database
//! into an item-major table of transaction-id bitsets once, then both
//! support counting and closure checking become bitset operations bounded
//! by the current branch's already-shrunk tidset — the load-bearing
//! performance decision of the whole design.
//!
//! ## Quick Start
//!
//! ```rust
//! use closemine_engine::{MinSupport, Miner, TransactionDatabase};
//!
//! let db = TransactionDatabase::from_transactions(vec![
//!     vec![1, 2],
//!     vec![1, 2, 3],
//!     vec![1, 3],
//!     vec![2, 3],
//! ]);
//!
//! let outcome = Miner::new().mine(&db, MinSupport::Fraction(0.5))?;
//! for pattern in &outcome.patterns {
//!     println!("{pattern}");
//! }
//! # Ok::<(), closemine_engine::MineError>(())
//! ```
//!
//! ## With Configuration
//!
//! ```rust
//! use closemine_engine::{ItemOrdering, Miner, MinerConfig};
//!
//! let miner = Miner::with_config(
//!     MinerConfig::builder()
//!         .with_item_ordering(ItemOrdering::IdAscending)
//!         .with_max_patterns(100_000)
//!         .build(),
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Mines independent top-level branches with rayon; the
//!   pattern store serializes insertions behind a mutex.
//! - `serde` - Serde derives on the contract types of `closemine`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      closemine-engine                        │
//! │                                                              │
//! │  Miner                                                       │
//! │  ├── resolve MinSupport → absolute count (closemine)        │
//! │  ├── transpose database → VerticalIndex (one TidSet/item)   │
//! │  ├── depth-first prefix extension over frequent items       │
//! │  │     ├── infrequent extensions pruned                     │
//! │  │     ├── support-preserving extensions merged (closure)   │
//! │  │     └── subsumed branches abandoned                      │
//! │  └── PatternStore → finalized, ordered PatternSet           │
//! │                                                              │
//! │  Dependencies:                                               │
//! │  ├── closemine - database / threshold / pattern contract    │
//! │  └── roaring   - transaction-id bitmaps                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod engine;
mod error;
mod result;
mod store;
mod tidset;
mod transpose;

// Public re-exports
pub use config::{ItemOrdering, MinerConfig, MinerConfigBuilder};
pub use engine::Miner;
pub use error::{MineError, MineResult};
pub use result::{MiningOutcome, MiningStats};
pub use store::PatternStore;
pub use tidset::TidSet;
pub use transpose::VerticalIndex;

// Re-export the contract types from closemine for convenience
pub use closemine::{ClosedPattern, ItemId, MinSupport, PatternSet, Tid, TransactionDatabase};
