// src/error.rs
use thiserror::Error;

/// Errors raised by dictionary mutation. Conversion itself never errors —
/// unknown words degrade through the configured unknown-token policy.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Word or translation was empty after trimming.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// An entry already exists for this normalized word and direction.
    #[error("an entry for '{word}' already exists in this direction")]
    Duplicate { word: String },

    /// No entry exists for this normalized word and direction.
    #[error("no entry for '{word}' in this direction")]
    NotFound { word: String },

    /// Snapshot load/save failure.
    #[error("dictionary I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
