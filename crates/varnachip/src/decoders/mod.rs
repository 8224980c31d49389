//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * `DictionaryDecoder` - the dense expansion table `TokenDecoder`.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any `TokenDecoder`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use varnachip::{
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     types::TokenType,
//!     vocab::UnifiedTokenVocab,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<UnifiedTokenVocab<T>>,
//!     batch: &[Vec<T>],
//! ) -> Vec<String> {
//!     let decoder: DictionaryDecoder<T> = DictionaryDecoder::from_unified_vocab(vocab);
//!
//!     #[cfg(feature = "rayon")]
//!     let decoder = varnachip::rayon::ParallelRayonDecoder::new(decoder);
//!
//!     decoder.try_decode_batch_to_strings(batch).unwrap()
//! }
//! ```

pub mod dictionary_decoder;
pub mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
