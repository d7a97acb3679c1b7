//! Error types for `cadenas-core`.

use thiserror::Error;

use crate::wordbank::WORD_POOL_FLOOR;

/// Errors produced by password generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Request parameters cannot produce a well-defined password: empty
    /// alphabet, empty separator set, padding set missing while padding
    /// symbols were requested, inverted word-length bounds, or an out of
    /// range length/count.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Too few candidate words after length filtering. The floor exists so
    /// the generator never silently emits low-entropy passphrases.
    #[error(
        "insufficient word pool: {available} candidate words within the requested \
         length bounds, need more than {floor}"
    )]
    InsufficientWordPool {
        /// Number of words the requested length bounds actually yielded.
        available: usize,
        /// The safety floor the pool must exceed ([`WORD_POOL_FLOOR`]).
        floor: usize,
    },

    /// Wordlist ingestion failure: unreadable file or an empty source.
    #[error("wordlist error: {0}")]
    Wordlist(String),
}

impl GeneratorError {
    /// Construct an [`GeneratorError::InsufficientWordPool`] for a pool of
    /// the given size, carrying the crate-wide floor value.
    #[must_use]
    pub fn insufficient_pool(available: usize) -> Self {
        Self::InsufficientWordPool {
            available,
            floor: WORD_POOL_FLOOR,
        }
    }
}
