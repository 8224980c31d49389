//! # Merge Scan Span Encoder
//!
//! Incrementally re-scans for the best available merge,
//! iterates until no more merges remain.

use crate::{
    encoders::span_encoders::SpanPolicy,
    types::TokenType,
    vocab::{MergeVocab, byte_tokens::append_byte_tokens},
};

/// A [`SpanPolicy`] which incrementally scans for merges.
///
/// Each step merges the lowest-rank pair present; the leftmost on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeScanSpanPolicy;

impl<T: TokenType> SpanPolicy<T> for MergeScanSpanPolicy {
    fn encode_append_span(
        &self,
        vocab: &MergeVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        // Reuse the output buffer as our working memory.
        let start = tokens.len();
        append_byte_tokens(span, tokens);

        let stop = start + 2;
        while tokens.len() >= stop {
            // Merge tokens are `256 + rank`; so the lowest token is the lowest rank.
            let Some((token, idx)) = tokens[start..]
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| vocab.lookup_pair(&(w[0], w[1])).map(|token| (token, idx)))
                .min()
            else {
                break;
            };

            let idx = start + idx;

            // buf[idx..=idx+1] (a, b) -> buf[idx] t
            tokens[idx] = token;
            tokens.remove(idx + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::testing::{common_encoder_test_vocab, common_span_policy_tests};

    #[test]
    fn test_policy_u16() {
        common_span_policy_tests(&common_encoder_test_vocab::<u16>(), MergeScanSpanPolicy);
    }

    #[test]
    fn test_policy_u32() {
        common_span_policy_tests(&common_encoder_test_vocab::<u32>(), MergeScanSpanPolicy);
    }
}
