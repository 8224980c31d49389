//! # Token Encoders
//!
//! Encoding segments text exactly as training did, expands each chunk to
//! byte tokens, and applies the merge rules in rank order.
//!
//! Encoder clients should use:
//!
//! * `MergeVocabEncoder` - the default `TokenEncoder`.
//! * `ParallelRayonEncoder` - a batch parallelism wrapper around any `TokenEncoder`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use varnachip::{
//!     encoders::{MergeVocabEncoder, TokenEncoder},
//!     types::TokenType,
//!     vocab::UnifiedTokenVocab,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<UnifiedTokenVocab<T>>,
//!     batch: &[String],
//! ) -> Vec<Vec<T>> {
//!     let encoder: MergeVocabEncoder<T> = MergeVocabEncoder::new(vocab);
//!
//!     #[cfg(feature = "rayon")]
//!     let encoder = varnachip::rayon::ParallelRayonEncoder::new(encoder);
//!
//!     encoder.encode_batch(batch)
//! }
//! ```

pub mod span_encoders;

mod merge_vocab_encoder;
mod token_encoder;
mod token_span;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use merge_vocab_encoder::{MergeVocabEncoder, RankSweepVocabEncoder};
#[doc(inline)]
pub use span_encoders::{MergeScanSpanPolicy, RankSweepSpanPolicy, SpanPolicy};
#[doc(inline)]
pub use token_encoder::TokenEncoder;
#[doc(inline)]
pub use token_span::TokenSpan;
