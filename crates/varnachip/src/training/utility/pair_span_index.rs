//! # `PairIndex` Builder

use crate::{
    training::{CountType, utility::token_span_buffer::TokenSpanBuf},
    types::{Pair, TokenType, VCHashMap, VCHashSet},
};

/// A map from [`Pair`] to its occurrence count.
pub type PairCountMap<T, C> = VCHashMap<Pair<T>, C>;

/// A map from [`Pair`] to indices over ``words``.
pub type PairIndexMap<T> = VCHashMap<Pair<T>, VCHashSet<usize>>;

/// An index of ``(T, T)`` pair information relative to a ``&[TokenSpanBuf<T>]``.
#[derive(Debug, Clone)]
pub struct PairSpanIndex<T: TokenType, C: CountType> {
    /// A map from [`Pair`] to its occurrence count.
    ///
    /// ``sum(words[i].window_count(pair) * word_counts[i]) for all i``
    pub pair_counts: PairCountMap<T, C>,

    /// A map from [`Pair`] to span indices.
    pub pair_index: PairIndexMap<T>,
}

impl<T: TokenType, C: CountType> Default for PairSpanIndex<T, C> {
    fn default() -> Self {
        Self {
            pair_counts: PairCountMap::default(),
            pair_index: PairIndexMap::default(),
        }
    }
}

impl<T: TokenType, C: CountType> PairSpanIndex<T, C> {
    /// Build a [`PairSpanIndex`] from a slice of [`TokenSpanBuf`]s, using a count table.
    ///
    /// With the `rayon` feature, this is a parallel map-reduce over the spans.
    ///
    /// # Arguments
    /// * `spans` - a sequence of text spans; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `spans[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(spans, counts)))]
    pub fn from_span_count_table(
        spans: &[TokenSpanBuf<T>],
        counts: &[C],
    ) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                Self::from_span_count_table_par(spans, counts)
            } else {
                Self::from_span_count_table_serial(spans, counts)
            }
        }
    }

    /// Single threaded [`PairSpanIndex::from_span_count_table`].
    pub fn from_span_count_table_serial(
        spans: &[TokenSpanBuf<T>],
        counts: &[C],
    ) -> Self {
        let mut index = Self::default();
        for (idx, (span, &count)) in spans.iter().zip(counts).enumerate() {
            index.observe(idx, span, count);
        }
        index
    }

    /// Parallel [`PairSpanIndex::from_span_count_table`].
    #[cfg(feature = "rayon")]
    pub fn from_span_count_table_par(
        spans: &[TokenSpanBuf<T>],
        counts: &[C],
    ) -> Self {
        use rayon::prelude::*;

        spans
            .par_iter()
            .zip(counts.par_iter())
            .enumerate()
            .fold(Self::default, |mut index, (idx, (span, &count))| {
                index.observe(idx, span, count);
                index
            })
            .reduce(Self::default, Self::merge)
    }

    fn observe(
        &mut self,
        idx: usize,
        span: &TokenSpanBuf<T>,
        count: C,
    ) {
        if count == C::zero() || span.len() < 2 {
            return;
        }
        for p in span.pairs() {
            *self.pair_counts.entry(p).or_default() += count;
            self.pair_index.entry(p).or_default().insert(idx);
        }
    }

    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    fn merge(
        mut self,
        other: Self,
    ) -> Self {
        for (p, c) in other.pair_counts {
            *self.pair_counts.entry(p).or_default() += c;
        }
        for (p, s) in other.pair_index {
            self.pair_index.entry(p).or_default().extend(s);
        }
        self
    }
}
