//! # Training Metrics

use core::fmt;

use serde::Serialize;

/// Why the merge loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The target vocab size was reached.
    TargetReached,

    /// No pair with at least `min_frequency` occurrences remained.
    Exhausted,

    /// The `max_merges` ceiling was reached.
    MaxMerges,

    /// The `max_duration` ceiling was reached.
    Timeout,
}

impl fmt::Display for StopReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            StopReason::TargetReached => "target vocab size reached",
            StopReason::Exhausted => "no mergeable pairs remain",
            StopReason::MaxMerges => "max merges reached",
            StopReason::Timeout => "max duration reached",
        };
        f.write_str(s)
    }
}

/// Summary statistics of a training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingMetrics {
    /// The number of distinct byte values in the corpus.
    pub unique_byte_count: usize,

    /// The total number of corpus bytes.
    pub total_byte_count: usize,

    /// The number of merges learned.
    pub merge_count: usize,

    /// The final vocabulary size.
    pub vocab_size: usize,

    /// The number of tokens the corpus encodes to under the learned vocabulary.
    pub token_count: usize,

    /// ``total_byte_count / token_count``; `1.0` for an empty corpus.
    pub compression_ratio: f64,

    /// Why the merge loop stopped.
    pub stop_reason: StopReason,
}

impl TrainingMetrics {
    /// Compute the compression ratio for a byte and token count.
    pub fn ratio(
        total_byte_count: usize,
        token_count: usize,
    ) -> f64 {
        if token_count == 0 {
            1.0
        } else {
            total_byte_count as f64 / token_count as f64
        }
    }
}
