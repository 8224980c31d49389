//! # Byte Tokens
//!
//! The fixed ``u8 <-> T`` identity mapping for the first 256 tokens.

use crate::{
    errors::{VCResult, VarnachipError},
    types::TokenType,
};

/// The size of the u8 space; and the number of byte tokens.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Get the token for a byte.
#[inline(always)]
pub fn byte_token<T: TokenType>(byte: u8) -> T {
    match T::from_u8(byte) {
        Some(token) => token,
        None => unreachable!("unsigned token types hold every byte"),
    }
}

/// Get the byte for a byte token; `None` for merge tokens.
#[inline(always)]
pub fn token_byte<T: TokenType>(token: T) -> Option<u8> {
    token.to_u8()
}

/// Append the byte tokens of `bytes` to a target buffer.
///
/// ## Arguments
/// * `bytes` - The slice of bytes to translate and append.
/// * `tokens` - The target token buffer.
#[inline(always)]
pub fn append_byte_tokens<T: TokenType>(
    bytes: &[u8],
    tokens: &mut Vec<T>,
) {
    tokens.extend(bytes.iter().map(|&b| byte_token::<T>(b)));
}

/// Expand text into its initial symbol sequence; one token per UTF-8 byte.
pub fn text_byte_tokens<T: TokenType>(text: &str) -> Vec<T> {
    let mut tokens = Vec::with_capacity(text.len());
    append_byte_tokens(text.as_bytes(), &mut tokens);
    tokens
}

/// Validates and returns the vocabulary size, ensuring every token fits in `T`.
///
/// Sizes below [`U8_SIZE`] are accepted; they describe a vocabulary with no merges.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> VCResult<usize> {
    if T::from_usize(vocab_size.max(U8_SIZE) - 1).is_none() {
        Err(VarnachipError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_token_identity() {
        for b in 0..=255_u8 {
            let t: u32 = byte_token(b);
            assert_eq!(t, b as u32);
            assert_eq!(token_byte(t), Some(b));
        }
        assert_eq!(token_byte(256_u32), None);
        assert_eq!(byte_token::<u8>(255), 255);
    }

    #[test]
    fn test_text_byte_tokens() {
        let tokens: Vec<u16> = text_byte_tokens("aಕ");
        // "ಕ" := E0 B2 95
        assert_eq!(tokens, vec![0x61, 0xE0, 0xB2, 0x95]);

        let mut buf: Vec<u16> = vec![7];
        append_byte_tokens(b"hi", &mut buf);
        assert_eq!(buf, vec![7, 104, 105]);
    }

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(256).unwrap(), 256);
        assert_eq!(try_vocab_size::<u16>(100).unwrap(), 100);
        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(try_vocab_size::<u16>(u16::MAX as usize + 2).is_err());

        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257).is_err());
    }
}
