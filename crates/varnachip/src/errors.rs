//! # Error Types

/// Errors from varnachip operations.
#[derive(Debug, thiserror::Error)]
pub enum VarnachipError {
    /// A token id is outside the vocabulary.
    #[error("token {token} out of range for vocab size {vocab_size}")]
    OutOfRangeToken {
        /// The offending token id.
        token: u64,

        /// The size of the vocabulary it was looked up in.
        vocab_size: usize,
    },

    /// Persisted vocabulary data is malformed.
    #[error("corrupt vocabulary: {0}")]
    CorruptVocabulary(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A configuration value is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for varnachip operations.
pub type VCResult<T> = core::result::Result<T, VarnachipError>;
