//! # Chunk Counter

use crate::{
    segmentation::TextSegmentor,
    training::{CountType, StringChunkType, utility::token_span_buffer::TokenSpanBuf},
    types::{TokenType, VCHashMap},
    vocab::size_hints::EXPECTED_CHUNK_LENGTH,
};

/// Options for [`TextSpanCounter`].
#[derive(Debug, Clone)]
pub struct TextSpanCounterOptions {
    /// Expected average chunk length in bytes.
    /// Used when pre-allocating buffers.
    pub avg_chunk_len: usize,
}

impl Default for TextSpanCounterOptions {
    fn default() -> Self {
        Self {
            avg_chunk_len: EXPECTED_CHUNK_LENGTH,
        }
    }
}

impl TextSpanCounterOptions {
    /// Set the expected average chunk length in bytes.
    pub fn with_avg_chunk_len(
        self,
        avg_chunk_len: usize,
    ) -> Self {
        Self { avg_chunk_len }
    }
}

/// Chunk counter.
///
/// Identical chunk texts are counted once, with a multiplicity.
pub struct TextSpanCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// The config options.
    pub options: TextSpanCounterOptions,

    /// The segmentor.
    pub segmentor: TextSegmentor,

    /// The chunk counts.
    pub span_counts: VCHashMap<K, C>,

    /// The total number of bytes observed.
    pub total_bytes: usize,
}

impl<K, C> TextSpanCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new chunk counter.
    pub fn new(
        segmentor: TextSegmentor,
        options: TextSpanCounterOptions,
    ) -> Self {
        Self {
            options,
            segmentor,
            span_counts: VCHashMap::default(),
            total_bytes: 0,
        }
    }

    /// Update chunk counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let text = text.as_ref();
        let span_counts = &mut self.span_counts;
        span_counts.reserve(text.len() / self.options.avg_chunk_len.max(1));

        for chunk in self.segmentor.chunks(text) {
            let k: K = chunk.as_str(text).into();
            *span_counts.entry(k).or_default() += C::one();
        }
        self.total_bytes += text.len();
    }

    /// Update chunk counts inplace from a sample iterator.
    ///
    /// Each sample is segmented independently.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// The number of distinct byte values observed.
    pub fn unique_byte_count(&self) -> usize {
        let mut seen = [false; 256];
        for k in self.span_counts.keys() {
            for &b in k.as_ref().as_bytes() {
                seen[b as usize] = true;
            }
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Convert the chunk counter to a [`TokenSpanBuf<T>`] count iterator.
    pub fn to_text_span_counts_iter<T: TokenType>(&self) -> impl Iterator<Item = (TokenSpanBuf<T>, C)> + '_ {
        self.span_counts
            .iter()
            .map(|(k, v)| (TokenSpanBuf::from_string(k), *v))
    }
}
