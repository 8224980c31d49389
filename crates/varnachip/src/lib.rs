//! # `varnachip` Script-Aware BPE Tokenizer
//!
//! `varnachip` learns a byte pair encoding vocabulary from a script-mixed
//! corpus (Kannada by default), and encodes/decodes text losslessly against it.
//!
//! See:
//! * [`segmentation`] to split text into same-class chunks.
//! * [`training`] to train a [`vocab::UnifiedTokenVocab`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab`] to manage token vocabularies and vocab io.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::VCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables the [`rayon`](crate::rayon) batch wrappers,
//! and parallel pair counting in the trainer.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training, Encoding, Decoding
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use varnachip::{
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     encoders::{MergeVocabEncoder, TokenEncoder},
//!     segmentation::SegmentationConfig,
//!     training::train,
//!     vocab::UnifiedTokenVocab,
//! };
//!
//! type T = u32;
//!
//! let corpus = ["ನಮಸ್ಕಾರ, ಇದು ಕನ್ನಡ ಟೋಕನೈಜರ್ ಆಗಿದೆ"];
//! let (vocab, metrics) = train::<T, _>(corpus, 300, SegmentationConfig::kannada()).unwrap();
//! assert!(metrics.merge_count > 0);
//!
//! let vocab: Arc<UnifiedTokenVocab<T>> = vocab.into();
//! let encoder = MergeVocabEncoder::<T>::new(vocab.clone());
//! let decoder = DictionaryDecoder::from_unified_vocab(&vocab);
//!
//! let tokens = encoder.try_encode("ಕನ್ನಡ").unwrap();
//! assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), "ಕನ್ನಡ");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod support;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{VCResult, VarnachipError};
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::{MergeRule, MergeVocab, UnifiedTokenVocab};
