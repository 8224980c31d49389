//! # Unified Token Vocabulary

use std::sync::Arc;

use crate::{
    errors::VCResult,
    segmentation::{SegmentationConfig, TextSegmentor},
    types::{Pair, TokenType},
    vocab::{MergeRule, MergeVocab},
};

/// Unified token vocabulary.
///
/// Pairs the [`MergeVocab`] with the segmentation it was trained under;
/// so that inference always segments exactly as training did.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedTokenVocab<T: TokenType> {
    /// The text segmentor.
    segmentor: TextSegmentor,

    /// The shared merge vocabulary.
    merge_vocab: Arc<MergeVocab<T>>,
}

impl<T: TokenType> UnifiedTokenVocab<T> {
    /// Initialize a [`UnifiedTokenVocab`].
    ///
    /// ## Arguments
    /// * `segmentation` - The segmentation configuration.
    /// * `merge_vocab` - The merge vocabulary.
    ///
    /// ## Returns
    /// A `VCResult<UnifiedTokenVocab>`, with errors on invalid segmentation.
    pub fn new<V>(
        segmentation: SegmentationConfig,
        merge_vocab: V,
    ) -> VCResult<Self>
    where
        V: Into<Arc<MergeVocab<T>>>,
    {
        Ok(Self {
            segmentor: TextSegmentor::from_config(segmentation)?,
            merge_vocab: merge_vocab.into(),
        })
    }

    /// Get the [`SegmentationConfig`].
    pub fn segmentation(&self) -> &SegmentationConfig {
        self.segmentor.config()
    }

    /// Get the [`TextSegmentor`].
    pub fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    /// Get the shared [`MergeVocab`].
    pub fn merge_vocab(&self) -> &Arc<MergeVocab<T>> {
        &self.merge_vocab
    }

    /// The number of tokens in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.merge_vocab.len()
    }

    /// The merge rules, in rank order.
    pub fn merge_rules(&self) -> &[MergeRule<T>] {
        self.merge_vocab.merge_rules()
    }

    /// Look up the token produced by merging a pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.merge_vocab.lookup_pair(pair)
    }

    /// Get the byte expansion of a token.
    pub fn get_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.merge_vocab.get_bytes(token)
    }
}

impl<T: TokenType> AsRef<UnifiedTokenVocab<T>> for UnifiedTokenVocab<T> {
    fn as_ref(&self) -> &UnifiedTokenVocab<T> {
        self
    }
}
