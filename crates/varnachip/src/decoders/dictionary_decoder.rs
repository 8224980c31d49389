//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::token_decoder::TokenDecoder,
    errors::VCResult,
    types::TokenType,
    vocab::{MergeVocab, UnifiedTokenVocab},
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Decodes through the [`MergeVocab`]'s precomputed expansion table.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    /// The shared vocabulary.
    merge_vocab: Arc<MergeVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] from a [`UnifiedTokenVocab`].
    ///
    /// ## Arguments
    /// * `unified_vocab` - The unified token vocabulary to build the decoder from.
    ///
    /// ## Returns
    /// A new `DictionaryDecoder` instance.
    pub fn from_unified_vocab<V>(unified_vocab: V) -> Self
    where
        V: AsRef<UnifiedTokenVocab<T>>,
    {
        Self::new(unified_vocab.as_ref().merge_vocab().clone())
    }

    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `merge_vocab` - The shared merge vocabulary.
    pub fn new(merge_vocab: Arc<MergeVocab<T>>) -> Self {
        Self { merge_vocab }
    }

    /// Get the shared [`MergeVocab`].
    pub fn merge_vocab(&self) -> &Arc<MergeVocab<T>> {
        &self.merge_vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> VCResult<()> {
        let start = buf.len();
        for &t in tokens {
            match self.merge_vocab.try_get_bytes(t) {
                Ok(bytes) => buf.extend_from_slice(bytes),
                Err(e) => {
                    buf.truncate(start);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
