//! # Merge Vocabulary Encoder

use std::sync::Arc;

use crate::{
    encoders::{
        TokenEncoder,
        span_encoders::{MergeScanSpanPolicy, RankSweepSpanPolicy, SpanPolicy},
    },
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::{MergeVocab, UnifiedTokenVocab},
};

/// A [`TokenEncoder`] over a [`UnifiedTokenVocab`], parameterized by a [`SpanPolicy`].
///
/// ## Style Hints
///
/// Instance names should prefer `encoder`.
#[derive(Debug, Clone)]
pub struct MergeVocabEncoder<T: TokenType, P: SpanPolicy<T> = MergeScanSpanPolicy> {
    /// The shared vocabulary.
    vocab: Arc<UnifiedTokenVocab<T>>,

    /// The chunk encoding policy.
    policy: P,
}

/// A [`MergeVocabEncoder`] using the [`RankSweepSpanPolicy`].
pub type RankSweepVocabEncoder<T> = MergeVocabEncoder<T, RankSweepSpanPolicy>;

impl<T: TokenType, P: SpanPolicy<T>> MergeVocabEncoder<T, P> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The unified token vocabulary.
    ///
    /// ## Returns
    /// A new `MergeVocabEncoder` instance.
    pub fn new<V>(vocab: V) -> Self
    where
        V: Into<Arc<UnifiedTokenVocab<T>>>,
    {
        Self::with_policy(vocab, P::default())
    }

    /// Create a new encoder with an explicit policy.
    pub fn with_policy<V>(
        vocab: V,
        policy: P,
    ) -> Self
    where
        V: Into<Arc<UnifiedTokenVocab<T>>>,
    {
        Self {
            vocab: vocab.into(),
            policy,
        }
    }

    /// Get the shared vocabulary.
    pub fn vocab(&self) -> &Arc<UnifiedTokenVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType, P: SpanPolicy<T>> TokenEncoder<T> for MergeVocabEncoder<T, P> {
    fn segmentor(&self) -> &TextSegmentor {
        self.vocab.segmentor()
    }

    fn merge_vocab(&self) -> &MergeVocab<T> {
        self.vocab.merge_vocab()
    }

    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    ) {
        self.policy
            .encode_append_span(self.vocab.merge_vocab(), chunk, tokens)
    }
}
