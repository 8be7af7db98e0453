//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by the text, store, index, finder, and source layers.
///
/// Nothing here is recovered internally; every variant surfaces to the
/// caller. The one exception is [`Error::OutOfRange`], which the duplicate
/// finder swallows at the adjacent-pair step where it means a suffix starts
/// inside a separator cell.
#[derive(Debug, Error)]
pub enum Error {
    /// The input byte buffer is not well-formed UTF-8.
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// An index fell outside the addressed range (character access,
    /// substring bounds, or a text position not owned by any document).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Suffix array construction failed or was queried before running.
    #[error("suffix array build failed: {0}")]
    Build(String),

    /// A table or column identifier failed the structural guard.
    #[error("invalid identifier: {0:?}")]
    InvalidName(String),

    /// Underlying database failure from the ingestion source.
    #[error("database error: {0}")]
    Source(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted match file did not parse.
    #[error("malformed match file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
