//! # Token Spans

use core::ops::Range;

/// A token, with the source text it covers.
///
/// Used by presentation layers to show how text was tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSpan<T> {
    /// The token.
    pub token: T,

    /// The lossy UTF-8 rendering of the token's bytes.
    ///
    /// Tokens which split a multi-byte character render with `U+FFFD`.
    pub text: String,

    /// The byte range of the token in the source text.
    pub range: Range<usize>,
}
