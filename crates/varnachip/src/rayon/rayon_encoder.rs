//! # Parallel Encoder

use core::marker::PhantomData;

use crate::{
    encoders::TokenEncoder,
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::MergeVocab,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn segmentor(&self) -> &TextSegmentor {
        self.inner.segmentor()
    }

    fn merge_vocab(&self) -> &MergeVocab<T> {
        self.inner.merge_vocab()
    }

    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append_chunk(chunk, tokens)
    }

    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::{
        MergeVocabEncoder,
        testing::{COMMON_SAMPLES, common_encoder_test_vocab, common_encoder_tests},
    };

    #[test]
    fn test_encoder() {
        type T = u16;
        let vocab = common_encoder_test_vocab::<T>();

        let serial = MergeVocabEncoder::<T>::new(vocab.clone());
        let encoder = ParallelRayonEncoder::new(serial.clone());
        common_encoder_tests(vocab, &encoder);

        let batch: Vec<String> = COMMON_SAMPLES
            .iter()
            .cycle()
            .take(64)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(encoder.encode_batch(&batch), serial.encode_batch(&batch));
    }
}
