//! # Token Encoder Trait

use crate::{
    encoders::TokenSpan,
    errors::VCResult,
    segmentation::TextSegmentor,
    support::strings::string_from_utf8_lossy,
    types::TokenType,
    vocab::{MergeVocab, size_hints::EXPECTED_BYTES_PER_TOKEN},
};

/// A trait for token encoders.
///
/// Encoding is total: every string encodes, at worst to its raw byte tokens.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached text segmentor.
    fn segmentor(&self) -> &TextSegmentor;

    /// Return the attached merge vocabulary.
    fn merge_vocab(&self) -> &MergeVocab<T>;

    /// Encode a single chunk, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `chunk` - The chunk bytes to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        for chunk in self.segmentor().chunks(text) {
            self.encode_append_chunk(chunk.as_str(text).as_bytes(), tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let text = text.as_ref();
        let capacity = text.len() as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.5);
        let mut tokens = Vec::with_capacity(capacity as usize);

        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `VCResult` containing the vector of tokens.
    fn try_encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> VCResult<Vec<T>> {
        Ok(self.encode(text))
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }

    /// Encode a batch of text into tokens.
    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> VCResult<Vec<Vec<T>>> {
        Ok(self.encode_batch(batch))
    }

    /// Encode text, reporting each token with the text it covers.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// One [`TokenSpan`] per token; the ranges tile the text.
    fn encode_with_spans<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<TokenSpan<T>> {
        let text = text.as_ref();
        let merge_vocab = self.merge_vocab();

        let mut spans = Vec::new();
        let mut buf = Vec::new();
        for chunk in self.segmentor().chunks(text) {
            buf.clear();
            self.encode_append_chunk(chunk.as_str(text).as_bytes(), &mut buf);

            let mut offset = chunk.range.start;
            for &token in &buf {
                let bytes = merge_vocab.get_bytes(token).unwrap_or_default();
                let end = offset + bytes.len();
                spans.push(TokenSpan {
                    token,
                    text: string_from_utf8_lossy(bytes.to_vec()),
                    range: offset..end,
                });
                offset = end;
            }
        }
        spans
    }
}
