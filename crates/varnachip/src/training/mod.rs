//! # Vocabulary Training
//!
//! Support for training token vocabularies.
//!
//! Training requires:
//! * [`crate::segmentation::SegmentationConfig`] - the script-class segmentation.
//!   * Merges never cross a chunk boundary.
//!   * The config is stored in the trained vocab, and reused by the encoders.
//! * a target vocab size; the first 256 tokens are always the raw bytes.
//!
//! Training is deterministic: the most frequent adjacent pair is merged
//! at each step, with ties going to the lowest ``(left, right)`` pair.
//!
//! ## Training Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use varnachip::{
//!     segmentation::SegmentationConfig,
//!     training::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions},
//!     vocab::{UnifiedTokenVocab, io::save_json_vocab_path},
//! };
//!
//! fn example<I, S>(
//!     vocab_size: usize,
//!     samples: I,
//!     vocab_save_path: Option<String>,
//! ) -> varnachip::VCResult<Arc<UnifiedTokenVocab<u32>>>
//! where
//!     I: IntoIterator<Item = S>,
//!     S: AsRef<str>,
//! {
//!     // We can pick any unsigned integer type > vocab_size;
//!     // See [`varnachip::TokenType`].
//!     type T = u32;
//!
//!     let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), vocab_size)
//!         .with_min_frequency(2);
//!
//!     let mut trainer: BinaryPairVocabTrainer = options.init()?;
//!     trainer.update_from_samples(samples);
//!
//!     let vocab: Arc<UnifiedTokenVocab<T>> = trainer.train()?.into();
//!
//!     if let Some(path) = vocab_save_path {
//!         save_json_vocab_path(&vocab, &path)?;
//!     }
//!
//!     Ok(vocab)
//! }
//! ```

pub mod utility;

mod bpe_trainer;
mod train_metrics;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{
    BinaryPairVocabTrainer,
    BinaryPairVocabTrainerOptions,
    DEFAULT_MIN_FREQUENCY,
    MergeJob,
    TrainResults,
};
#[doc(inline)]
pub use train_metrics::{StopReason, TrainingMetrics};
#[doc(inline)]
pub use training_types::{CountType, StringChunkType};

use crate::{errors::VCResult, segmentation::SegmentationConfig, types::TokenType, vocab::UnifiedTokenVocab};

/// Train a vocabulary over a corpus with the default options.
///
/// Each sample is segmented independently.
///
/// ## Arguments
/// * `corpus` - the training samples.
/// * `vocab_size` - the target vocab size.
/// * `segmentation` - the segmentation config.
///
/// ## Returns
/// The trained vocabulary, and the run's [`TrainingMetrics`].
pub fn train<T, I>(
    corpus: I,
    vocab_size: usize,
    segmentation: SegmentationConfig,
) -> VCResult<(UnifiedTokenVocab<T>, TrainingMetrics)>
where
    T: TokenType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trainer: BinaryPairVocabTrainer =
        BinaryPairVocabTrainerOptions::new(segmentation, vocab_size).init()?;
    trainer.update_from_samples(corpus);

    let TrainResults { vocab, metrics } = trainer.train_with_metrics::<T>()?;
    Ok((vocab, metrics))
}
