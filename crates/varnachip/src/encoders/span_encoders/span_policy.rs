//! # Policy Trait for chunk encoding.

use crate::{types::TokenType, vocab::MergeVocab};

/// The chunk encoding policy for [`crate::encoders::MergeVocabEncoder`].
pub trait SpanPolicy<T: TokenType>: Default + Clone + Send + Sync {
    /// Encodes a single chunk span to tokens.
    ///
    /// ## Arguments
    /// * `vocab` - The merge vocabulary.
    /// * `span` - The byte span to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span(
        &self,
        vocab: &MergeVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    );
}
