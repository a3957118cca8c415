//! Error types for the mining engine.

use thiserror::Error;

/// Errors that can abort a mining run.
///
/// All fatal conditions are detected before or during transposition; once
/// the vertical index exists, the traversal itself is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MineError {
    /// Invalid minimum-support threshold (configuration error).
    #[error("invalid minimum support: {0}")]
    Threshold(#[from] closemine::ThresholdError),

    /// Malformed transaction database.
    #[error("malformed database: {0}")]
    Database(#[from] closemine::DatabaseError),
}

/// Result type for mining operations.
pub type MineResult<T> = std::result::Result<T, MineError>;
