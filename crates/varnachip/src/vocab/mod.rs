//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! ## Byte Tokens
//!
//! Tokens ``0..=255`` are fixed, and denote the raw byte of the same value:
//! * [`byte_tokens`].
//!
//! ## Merge Vocabulary
//!
//! [`MergeVocab`] is the trained symbol store:
//! * a dense ``{ T -> Vec<u8> }`` byte expansion table,
//! * a ``{ Vec<u8> -> T }`` reverse index,
//! * the rank ordered [`MergeRule`] list, and its ``{ (T, T) -> T }`` index.
//!
//! ## Unified Vocabulary
//!
//! The primary user-oriented vocabulary is [`UnifiedTokenVocab`], which contains:
//! * `segmentor` - the [`crate::segmentation::TextSegmentor`] used in training,
//! * `merge_vocab` - the shared [`MergeVocab`].
pub mod io;

pub mod byte_tokens;
pub mod merge_vocab;
pub mod size_hints;
pub mod unified_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use merge_vocab::{MergeRule, MergeVocab};
#[doc(inline)]
pub use unified_vocab::UnifiedTokenVocab;
#[doc(inline)]
pub use vocab_types::{PairTokenMap, SpanTokenMap};
