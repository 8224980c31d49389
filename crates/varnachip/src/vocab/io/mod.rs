//! # Vocabulary IO
//!
//! Two persisted forms are supported:
//! * [`json_vocab`] - the complete [`UnifiedTokenVocab`](crate::vocab::UnifiedTokenVocab);
//!   segmentation, merge rules, and (verified) token expansions.
//! * [`merges_text`] - the bare rank ordered ``left right`` merge list.
//!
//! Loading always rebuilds the store from the merge rules, and either
//! succeeds completely or fails with a
//! [`VarnachipError::CorruptVocabulary`](crate::errors::VarnachipError::CorruptVocabulary).
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use varnachip::{
//!     decoders::DictionaryDecoder,
//!     encoders::MergeVocabEncoder,
//!     vocab::{UnifiedTokenVocab, io::load_json_vocab_path},
//! };
//!
//! fn example() -> varnachip::VCResult<(MergeVocabEncoder<u32>, DictionaryDecoder<u32>)> {
//!     type T = u32;
//!     let vocab: Arc<UnifiedTokenVocab<T>> = load_json_vocab_path("vocab.json")?.into();
//!
//!     let encoder = MergeVocabEncoder::<T>::new(vocab.clone());
//!     let decoder = DictionaryDecoder::from_unified_vocab(&vocab);
//!
//!     Ok((encoder, decoder))
//! }
//! ```

pub mod json_vocab;
pub mod merges_text;

#[doc(inline)]
pub use json_vocab::*;
#[doc(inline)]
pub use merges_text::*;
