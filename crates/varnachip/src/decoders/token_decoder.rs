//! # Token Decoder Trait

use crate::{errors::VCResult, support::strings::string_from_utf8_lossy, types::TokenType};

/// Trait for token decoders.
///
/// Decoding is exact at the byte level; and fails on any token outside
/// the vocabulary, with no partial output.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending their bytes to a buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> VCResult<()>;

    /// Decodes tokens into bytes.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to decode.
    ///
    /// ## Returns
    /// A `VCResult<Vec<u8>>`.
    fn try_decode_to_bytes<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> VCResult<Vec<u8>> {
        let tokens = tokens.as_ref();
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to decode.
    ///
    /// ## Returns
    /// A `VCResult<String>`.
    fn try_decode_to_string<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> VCResult<String> {
        self.try_decode_to_bytes(tokens).map(string_from_utf8_lossy)
    }

    /// Decodes a batch of token sequences into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[Vec<T>],
    ) -> VCResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes a batch of token sequences into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> VCResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
