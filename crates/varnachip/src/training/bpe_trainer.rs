//! # Vocab Trainer

use core::cmp::{Ordering, Reverse};
use std::time::{Duration, Instant};

use compact_str::CompactString;
use dary_heap::OctonaryHeap;

use crate::{
    errors::{VCResult, VarnachipError},
    segmentation::{SegmentationConfig, TextSegmentor},
    training::{
        CountType,
        StringChunkType,
        train_metrics::{StopReason, TrainingMetrics},
        utility::{PairIndexMap, PairSpanIndex, TextSpanCounter, TextSpanCounterOptions, TokenSpanBuf},
    },
    types::{Pair, TokenType, VCHashMap, VCHashSet},
    vocab::{
        MergeVocab,
        UnifiedTokenVocab,
        byte_tokens::{U8_SIZE, try_vocab_size},
    },
};

/// The default minimum pair frequency.
pub const DEFAULT_MIN_FREQUENCY: usize = 2;

/// Options for [`BinaryPairVocabTrainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPairVocabTrainerOptions {
    /// The segmentation used for chunking.
    pub segmentation: SegmentationConfig,

    /// The target vocab size.
    pub vocab_size: usize,

    /// Pairs seen fewer times than this are never merged.
    pub min_frequency: usize,

    /// Optional ceiling on the number of merges.
    pub max_merges: Option<usize>,

    /// Optional ceiling on the merge loop wall time.
    pub max_duration: Option<Duration>,
}

impl BinaryPairVocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `segmentation` - The segmentation config.
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainerOptions` instance.
    pub fn new(
        segmentation: SegmentationConfig,
        vocab_size: usize,
    ) -> Self {
        Self {
            segmentation,
            vocab_size,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_merges: None,
            max_duration: None,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; sizes <= 256 learn no merges.
    ///
    /// ## Returns
    /// The updated `BinaryPairVocabTrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the segmentation config.
    pub fn with_segmentation(
        self,
        segmentation: SegmentationConfig,
    ) -> Self {
        Self {
            segmentation,
            ..self
        }
    }

    /// Sets the minimum pair frequency; must be >= 1.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Sets the merge count ceiling.
    pub fn with_max_merges(
        self,
        max_merges: Option<usize>,
    ) -> Self {
        Self { max_merges, ..self }
    }

    /// Sets the merge loop wall time ceiling.
    pub fn with_max_duration(
        self,
        max_duration: Option<Duration>,
    ) -> Self {
        Self {
            max_duration,
            ..self
        }
    }

    /// Check the options.
    pub fn validate(&self) -> VCResult<()> {
        if self.min_frequency == 0 {
            return Err(VarnachipError::InvalidConfig(
                "min_frequency must be >= 1".to_string(),
            ));
        }
        self.segmentation.validate()
    }

    /// Initializes a [`BinaryPairVocabTrainer`] from these options.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainer` instance, or an error on invalid options.
    pub fn init<K, C>(self) -> VCResult<BinaryPairVocabTrainer<K, C>>
    where
        K: StringChunkType,
        C: CountType,
    {
        BinaryPairVocabTrainer::new(self)
    }
}

/// Info about a [`Pair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob<T: TokenType, C: CountType> {
    /// The number of instances of this pair in the corpus.
    pub count: C,

    /// The pair to merge.
    pub pair: Pair<T>,

    /// Word indices that may contain this pair.
    pub word_indices: VCHashSet<usize>,
}

impl<T: TokenType, C: CountType> MergeJob<T, C> {
    /// The job key.
    ///
    /// Max-heap by count; ties go to the lowest `left`, then the lowest `right`.
    pub fn heap_key(&self) -> (C, Reverse<Pair<T>>) {
        (self.count, Reverse(self.pair))
    }
}

impl<T: TokenType, C: CountType> PartialEq for MergeJob<T, C> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.heap_key() == other.heap_key()
    }
}

impl<T: TokenType, C: CountType> PartialOrd for MergeJob<T, C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TokenType, C: CountType> Ord for MergeJob<T, C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.heap_key().cmp(&other.heap_key())
    }
}

/// Trained vocabulary and run statistics.
#[derive(Debug, Clone)]
pub struct TrainResults<T: TokenType> {
    /// The trained vocabulary.
    pub vocab: UnifiedTokenVocab<T>,

    /// The run statistics.
    pub metrics: TrainingMetrics,
}

/// Trainer for learning binary pair encodings.
///
/// # Parameters
/// * `K` - the type used to store strings in the chunk counts.
/// * `C` - the type used to store counts in the chunk counts.
pub struct BinaryPairVocabTrainer<K = CompactString, C = u32>
where
    K: StringChunkType,
    C: CountType,
{
    /// Trainer options.
    pub options: BinaryPairVocabTrainerOptions,

    /// The text span counter.
    pub span_counter: TextSpanCounter<K, C>,
}

impl<K, C> BinaryPairVocabTrainer<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Initializes a [`BinaryPairVocabTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainer` instance, or an error on invalid options.
    pub fn new(options: BinaryPairVocabTrainerOptions) -> VCResult<Self> {
        options.validate()?;
        let span_counter = TextSpanCounter::<K, C>::new(
            TextSegmentor::from_config(options.segmentation.clone())?,
            TextSpanCounterOptions::default(),
        );

        Ok(BinaryPairVocabTrainer {
            options,
            span_counter,
        })
    }

    /// Update chunk counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.span_counter.update_from_samples(samples);
    }

    /// Trains a [`UnifiedTokenVocab<T>`].
    ///
    /// ## Returns
    /// A `VCResult` containing the `UnifiedTokenVocab<T>` or an error.
    pub fn train<T: TokenType>(self) -> VCResult<UnifiedTokenVocab<T>> {
        Ok(self.train_with_metrics::<T>()?.vocab)
    }

    /// Trains a [`UnifiedTokenVocab<T>`], and reports [`TrainingMetrics`].
    ///
    /// The merge loop ends when the target size is reached, when no pair
    /// occurs at least `min_frequency` times, or on a `max_merges` or
    /// `max_duration` ceiling; every ending yields a valid vocabulary.
    ///
    /// ## Returns
    /// A `VCResult` containing the `TrainResults<T>` or an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train_with_metrics<T: TokenType>(self) -> VCResult<TrainResults<T>> {
        let vocab_size = try_vocab_size::<T>(self.options.vocab_size)?;
        let min_count = C::from_usize(self.options.min_frequency).unwrap_or_else(C::max_value);
        let target_merges = vocab_size.saturating_sub(U8_SIZE);
        let num_merges = match self.options.max_merges {
            Some(max) => target_merges.min(max),
            None => target_merges,
        };

        let unique_byte_count = self.span_counter.unique_byte_count();
        let total_byte_count = self.span_counter.total_bytes;

        if num_merges == 0 {
            let stop_reason = if target_merges == 0 {
                StopReason::TargetReached
            } else {
                StopReason::MaxMerges
            };
            log::info!("No merges to compute: {stop_reason}");

            let merge_vocab: MergeVocab<T> = MergeVocab::new();
            let metrics = TrainingMetrics {
                unique_byte_count,
                total_byte_count,
                merge_count: 0,
                vocab_size: merge_vocab.len(),
                token_count: total_byte_count,
                compression_ratio: TrainingMetrics::ratio(total_byte_count, total_byte_count),
                stop_reason,
            };
            return Ok(TrainResults {
                vocab: UnifiedTokenVocab::new(self.options.segmentation, merge_vocab)?,
                metrics,
            });
        }

        log::info!(
            "Starting BPE training: {} merges to compute ({} unique chunks, {} bytes)",
            num_merges,
            self.span_counter.span_counts.len(),
            total_byte_count
        );

        let mut merge_vocab: MergeVocab<T> = MergeVocab::new();

        let (mut words, word_counts): (Vec<TokenSpanBuf<T>>, Vec<C>) =
            self.span_counter.to_text_span_counts_iter().unzip();

        log::info!("Building pair index...");

        let PairSpanIndex {
            mut pair_counts,
            pair_index: table_pair_index,
        } = PairSpanIndex::from_span_count_table(&words, &word_counts);

        let zero = C::zero();

        // ---- Build heap ----
        log::info!("Building heap with {} unique pairs", pair_counts.len());
        let mut heap = OctonaryHeap::with_capacity(pair_counts.len());
        for (pair, word_indices) in table_pair_index.into_iter() {
            let count = *pair_counts.get(&pair).unwrap_or(&zero);
            if count > zero {
                heap.push(MergeJob {
                    pair,
                    count,
                    word_indices,
                });
            }
        }

        // ---- Merge loop ----
        log::info!("Starting merge loop");
        let start = Instant::now();
        let mut merges_done = 0;
        let mut last_log_percent = 0;

        let stop_reason = loop {
            if merges_done >= num_merges {
                break if merges_done >= target_merges {
                    StopReason::TargetReached
                } else {
                    StopReason::MaxMerges
                };
            }
            if let Some(max_duration) = self.options.max_duration {
                if start.elapsed() >= max_duration {
                    break StopReason::Timeout;
                }
            }

            let Some(mut job) = heap.pop() else {
                break StopReason::Exhausted;
            };

            {
                // Lazy refresh the job count.
                let current = *pair_counts.get(&job.pair).unwrap_or(&zero);
                if job.count != current {
                    job.count = current;
                    if job.count > zero {
                        heap.push(job);
                    }
                    continue;
                }
            }

            if job.count < min_count {
                break StopReason::Exhausted;
            }

            let new_token = merge_vocab.try_push_merge(job.pair)?;

            let mut new_token_pair_map: PairIndexMap<T> = VCHashMap::with_capacity(16);

            // Merge this pair in all words where it occurs
            for &word_idx in &job.word_indices {
                let word_count = word_counts[word_idx];
                words[word_idx].merge_pair_cb(job.pair, new_token, &mut |pair, delta| {
                    if delta < 0 {
                        *pair_counts.entry(pair).or_default() -= word_count;
                    }
                    if delta > 0 {
                        // Either side of an added pair is `new_token`.
                        *pair_counts.entry(pair).or_default() += word_count;
                        new_token_pair_map.entry(pair).or_default().insert(word_idx);
                    }
                });
            }

            // Every ``(_, new_token)`` or ``(new_token, _)`` pair is new to the heap.
            for (pair, word_indices) in new_token_pair_map {
                let count = *pair_counts.get(&pair).unwrap_or(&zero);
                if count > zero {
                    heap.push(MergeJob {
                        pair,
                        count,
                        word_indices,
                    });
                }
            }

            merges_done += 1;

            // Log progress every 1%
            let current_percent = (merges_done * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {:?} (frequency: {})",
                    current_percent,
                    merges_done,
                    num_merges,
                    job.pair,
                    new_token,
                    job.count
                );
                last_log_percent = current_percent;
            }
        };

        match stop_reason {
            StopReason::TargetReached => {}
            reason => log::info!("Stopped early after {} merges: {}", merges_done, reason),
        }

        // The final words are each chunk encoded under the learned rules.
        let token_count = words
            .iter()
            .zip(&word_counts)
            .map(|(w, c)| w.len() * c.to_usize().unwrap_or(0))
            .sum::<usize>();

        let metrics = TrainingMetrics {
            unique_byte_count,
            total_byte_count,
            merge_count: merges_done,
            vocab_size: merge_vocab.len(),
            token_count,
            compression_ratio: TrainingMetrics::ratio(total_byte_count, token_count),
            stop_reason,
        };

        log::info!(
            "Finished training: {} merges completed; vocab size {}; compression ratio {:.3}",
            metrics.merge_count,
            metrics.vocab_size,
            metrics.compression_ratio
        );

        Ok(TrainResults {
            vocab: UnifiedTokenVocab::new(self.options.segmentation, merge_vocab)?,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::{
        segmentation::SegmentationConfig,
        types::{VCHashMap, static_is_send_sync_check},
    };

    /// Direct (non-incremental) reference trainer.
    ///
    /// Keeps every chunk occurrence, and recounts every pair each round.
    fn naive_merges(
        samples: &[&str],
        vocab_size: usize,
        min_frequency: usize,
        segmentation: SegmentationConfig,
    ) -> Vec<Pair<u32>> {
        let segmentor = TextSegmentor::from_config(segmentation).unwrap();
        let mut chunks: Vec<TokenSpanBuf<u32>> = samples
            .iter()
            .flat_map(|s| segmentor.split_chunks(s))
            .map(TokenSpanBuf::from_string)
            .collect();

        let mut merges = Vec::new();
        let mut next_token = 256_u32;
        while (next_token as usize) < vocab_size {
            let mut counts: VCHashMap<Pair<u32>, usize> = VCHashMap::default();
            for chunk in &chunks {
                for p in chunk.pairs() {
                    *counts.entry(p).or_default() += 1;
                }
            }

            let best = counts
                .into_iter()
                .max_by(|(pa, ca), (pb, cb)| ca.cmp(cb).then_with(|| pb.cmp(pa)));
            let Some((pair, count)) = best else {
                break;
            };
            if count < min_frequency {
                break;
            }

            for chunk in &mut chunks {
                chunk.merge_pair(pair, next_token);
            }
            merges.push(pair);
            next_token += 1;
        }
        merges
    }

    fn trained_merges(
        samples: &[&str],
        options: BinaryPairVocabTrainerOptions,
    ) -> TrainResults<u32> {
        let mut trainer = options.init::<CompactString, u32>().unwrap();
        trainer.update_from_samples(samples);
        trainer.train_with_metrics::<u32>().unwrap()
    }

    const SAMPLES: &[&str] = &[
        "ನಮಸ್ಕಾರ, ಇದು ಕನ್ನಡ ಟೋಕನೈಜರ್ ಆಗಿದೆ. ಕನ್ನಡ ಭಾಷೆ ಸುಂದರ ಭಾಷೆ.",
        "hello world hello san francisco 2024 2025",
        "ಬೆಂಗಳೂರು ನಗರ ಕರ್ನಾಟಕದ ರಾಜಧಾನಿ; ಕರ್ನಾಟಕ ಕನ್ನಡ ನಾಡು!!",
        "aaaaaa bbbb abab abab ababab",
    ];

    #[test]
    fn test_trainer_options() {
        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000);

        assert_eq!(options.vocab_size, 1000);
        assert_eq!(options.min_frequency, DEFAULT_MIN_FREQUENCY);
        assert_eq!(options.max_merges, None);
        assert_eq!(options.max_duration, None);

        let options = options
            .with_vocab_size(2000)
            .with_segmentation(SegmentationConfig::latin_only())
            .with_min_frequency(3)
            .with_max_merges(Some(10))
            .with_max_duration(Some(Duration::from_secs(5)));

        assert_eq!(options.vocab_size, 2000);
        assert_eq!(options.segmentation, SegmentationConfig::latin_only());
        assert_eq!(options.min_frequency, 3);
        assert_eq!(options.max_merges, Some(10));
        assert_eq!(options.max_duration, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_options() {
        let options =
            BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 300).with_min_frequency(0);
        assert!(matches!(
            options.init::<String, u32>(),
            Err(VarnachipError::InvalidConfig(_))
        ));

        let options = BinaryPairVocabTrainerOptions::new(
            SegmentationConfig::latin_only().with_target_range(9, 3),
            300,
        );
        assert!(options.init::<String, u32>().is_err());
    }

    #[test]
    fn test_vocab_size_overflow() {
        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 70_000);
        let trainer = options.init::<String, u32>().unwrap();
        assert!(matches!(
            trainer.train::<u16>(),
            Err(VarnachipError::VocabSizeOverflow { size: 70_000 })
        ));
    }

    #[test]
    fn test_matches_naive_trainer() {
        for min_frequency in [1, 2, 3] {
            let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 400)
                .with_min_frequency(min_frequency);
            let results = trained_merges(SAMPLES, options);

            let expected = naive_merges(SAMPLES, 400, min_frequency, SegmentationConfig::kannada());
            let actual: Vec<Pair<u32>> = results
                .vocab
                .merge_rules()
                .iter()
                .map(|r| r.pair)
                .collect();

            assert_eq!(actual, expected, "min_frequency={min_frequency}");
            assert_eq!(results.metrics.merge_count, expected.len());
            assert_eq!(results.vocab.len(), 256 + expected.len());
        }
    }

    #[test]
    fn test_tie_break_lowest_pair() {
        // (a, b), (c, d) and (b, c) all occur twice; "ab" wins.
        let results = trained_merges(
            &["abcd abcd"],
            BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 257),
        );
        assert_eq!(results.vocab.merge_rules()[0].pair, (b'a' as u32, b'b' as u32));
        assert_eq!(results.metrics.stop_reason, StopReason::TargetReached);
    }

    #[test]
    fn test_weighted_counts() {
        // "xy" only occurs inside one chunk text; but that text repeats.
        let results = trained_merges(
            &["xy xy xy ab ba"],
            BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 257),
        );
        assert_eq!(results.vocab.merge_rules()[0].pair, (b'x' as u32, b'y' as u32));
    }

    #[test]
    fn test_ceilings() {
        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000)
            .with_min_frequency(1)
            .with_max_merges(Some(5));
        let results = trained_merges(SAMPLES, options);
        assert_eq!(results.metrics.merge_count, 5);
        assert_eq!(results.metrics.stop_reason, StopReason::MaxMerges);
        assert_eq!(results.vocab.len(), 261);

        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000)
            .with_max_duration(Some(Duration::ZERO));
        let results = trained_merges(SAMPLES, options);
        assert_eq!(results.metrics.merge_count, 0);
        assert_eq!(results.metrics.stop_reason, StopReason::Timeout);
    }

    #[test]
    fn test_metrics() {
        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 258);
        let results = trained_merges(&["ab ab ab"], options);
        let metrics = &results.metrics;

        assert_eq!(metrics.unique_byte_count, 3);
        assert_eq!(metrics.total_byte_count, 8);
        assert_eq!(metrics.merge_count, 1);
        assert_eq!(metrics.vocab_size, 257);
        // [ab] ' ' [ab] ' ' [ab]
        assert_eq!(metrics.token_count, 5);
        assert_eq!(metrics.compression_ratio, 8.0 / 5.0);
        assert_eq!(metrics.stop_reason, StopReason::Exhausted);
    }

    #[test]
    fn test_no_merges_requested() {
        for target in [0, 256] {
            let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), target);
            let results = trained_merges(&["ab ab ab"], options);
            let metrics = &results.metrics;

            assert_eq!(results.vocab.len(), 256);
            assert_eq!(metrics.unique_byte_count, 3);
            assert_eq!(metrics.total_byte_count, 8);
            assert_eq!(metrics.merge_count, 0);
            assert_eq!(metrics.token_count, 8);
            assert_eq!(metrics.compression_ratio, 1.0);
            assert_eq!(metrics.stop_reason, StopReason::TargetReached);
        }

        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000)
            .with_max_merges(Some(0));
        let results = trained_merges(&["ab ab ab"], options);
        assert_eq!(results.vocab.len(), 256);
        assert_eq!(results.metrics.stop_reason, StopReason::MaxMerges);
    }

    #[test]
    fn test_train_tokenizer() {
        type T = u16;

        let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000);
        let mut trainer = options.init::<CompactString, u32>().unwrap();
        trainer.update_from_samples(SAMPLES.iter());

        let vocab: UnifiedTokenVocab<T> = trainer.train().unwrap();
        static_is_send_sync_check(&vocab);

        for rule in vocab.merge_rules() {
            assert_eq!(rule.token as usize, 256 + rule.rank);
        }
    }

    #[test]
    fn test_merge_job_heap_key() {
        type T = u32;
        type C = u32;

        let job = |pair: Pair<T>, count: C| MergeJob::<T, C> {
            pair,
            count,
            word_indices: Default::default(),
        };

        let job1 = job((1, 2), 2);
        let job2 = job((2, 1), 1);
        let job3 = job((2, 2), 1);

        assert_eq!(&job1, &job1);
        assert_ne!(&job1, &job2);

        assert_eq!(job1.heap_key(), (2, Reverse((1, 2))));

        // Higher count wins.
        assert_eq!(job1.cmp(&job2), Ordering::Greater);

        // On equal counts, the lower pair wins.
        assert_eq!(job2.cmp(&job3), Ordering::Greater);
        assert_eq!(job3.partial_cmp(&job2), Some(Ordering::Less));

        let mut heap = OctonaryHeap::new();
        heap.push(job((5, 9), 3));
        heap.push(job((5, 1), 3));
        heap.push(job((7, 0), 3));
        heap.push(job((0, 0), 2));
        assert_eq!(heap.pop().unwrap().pair, (5, 1));
        assert_eq!(heap.pop().unwrap().pair, (5, 9));
        assert_eq!(heap.pop().unwrap().pair, (7, 0));
        assert_eq!(heap.pop().unwrap().pair, (0, 0));
    }
}
