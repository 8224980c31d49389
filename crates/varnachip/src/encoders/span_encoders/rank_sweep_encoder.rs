//! # Rank Sweep Span Encoder
//!
//! Applies every merge rule, in rank order, as one left-to-right pass.

use crate::{
    encoders::span_encoders::SpanPolicy,
    types::TokenType,
    vocab::{MergeVocab, byte_tokens::append_byte_tokens},
};

/// A [`SpanPolicy`] which sweeps the rules in rank order.
///
/// Cost is linear in the number of rules; this is the reference policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSweepSpanPolicy;

impl<T: TokenType> SpanPolicy<T> for RankSweepSpanPolicy {
    fn encode_append_span(
        &self,
        vocab: &MergeVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let start = tokens.len();
        append_byte_tokens(span, tokens);

        for rule in vocab.merge_rules() {
            if tokens.len() < start + 2 {
                break;
            }

            // In-place compaction; `write <= read`.
            let n = tokens.len();
            let mut read = start;
            let mut write = start;
            while read < n {
                if read + 1 < n && (tokens[read], tokens[read + 1]) == rule.pair {
                    tokens[write] = rule.token;
                    read += 2;
                } else {
                    tokens[write] = tokens[read];
                    read += 1;
                }
                write += 1;
            }
            tokens.truncate(write);
        }
    }
}
