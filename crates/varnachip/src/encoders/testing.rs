//! # Encoder Test Utilities

use std::sync::Arc;

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{RankSweepSpanPolicy, SpanPolicy, TokenEncoder},
    segmentation::SegmentationConfig,
    training::train,
    types::{TokenType, static_is_send_sync_check},
    vocab::UnifiedTokenVocab,
};

/// Common samples; used for both training and encoding.
pub const COMMON_SAMPLES: &[&str] = &[
    "ನಮಸ್ಕಾರ, ಇದು ಕನ್ನಡ ಟೋಕನೈಜರ್ ಆಗಿದೆ.",
    "ಕನ್ನಡ ಭಾಷೆ ಸುಂದರ ಭಾಷೆ; ಕರ್ನಾಟಕ ಕನ್ನಡ ನಾಡು!!",
    "hello world, hello san francisco",
    "it's not the heat, it's the salt: 2024 2025",
    "aaaaaaa ಕಕಕಕಕ ababab\n\n",
];

/// Build common test vocabulary for [`TokenEncoder`] tests.
pub fn common_encoder_test_vocab<T: TokenType>() -> Arc<UnifiedTokenVocab<T>> {
    let (vocab, _) = train::<T, _>(COMMON_SAMPLES, 500, SegmentationConfig::kannada()).unwrap();
    assert!(vocab.len() > 256);
    vocab.into()
}

/// Common [`SpanPolicy`] tests.
///
/// Checks that the policy agrees with [`RankSweepSpanPolicy`], and round-trips.
pub fn common_span_policy_tests<T: TokenType, P: SpanPolicy<T>>(
    vocab: &Arc<UnifiedTokenVocab<T>>,
    policy: P,
) {
    let merge_vocab = vocab.merge_vocab();
    let decoder = DictionaryDecoder::from_unified_vocab(vocab);

    let probes = ["ಕನ್ನಡಕನ್ನಡ", "helloworld", "ಟೋಕನೈಜರ್", "ababababa", "zzz"];
    let chunks = COMMON_SAMPLES
        .iter()
        .copied()
        .flat_map(|s| vocab.segmentor().split_chunks(s))
        .chain(probes);

    for chunk in chunks {
        let prefix = T::from_u8(7).unwrap();

        let mut tokens = vec![prefix];
        policy.encode_append_span(merge_vocab, chunk.as_bytes(), &mut tokens);
        assert_eq!(tokens[0], prefix);
        let tokens = tokens[1..].to_vec();

        let mut expected = Vec::new();
        RankSweepSpanPolicy.encode_append_span(merge_vocab, chunk.as_bytes(), &mut expected);

        assert_eq!(tokens, expected, "{chunk:?}");
        assert_eq!(decoder.try_decode_to_bytes(&tokens).unwrap(), chunk.as_bytes());
    }
}

/// Common [`TokenEncoder`] tests.
pub fn common_encoder_tests<T: TokenType, E: TokenEncoder<T>>(
    vocab: Arc<UnifiedTokenVocab<T>>,
    encoder: &E,
) {
    static_is_send_sync_check(encoder);

    let decoder = DictionaryDecoder::from_unified_vocab(vocab);
    static_is_send_sync_check(&decoder);

    let token_batch = encoder.try_encode_batch(COMMON_SAMPLES).unwrap();
    let decoded_strings = decoder.try_decode_batch_to_strings(&token_batch).unwrap();
    assert_eq!(decoded_strings, COMMON_SAMPLES);

    for (sample, tokens) in COMMON_SAMPLES.iter().zip(&token_batch) {
        assert!(tokens.len() < sample.len(), "{sample:?}");
        assert_eq!(&encoder.encode(sample), tokens);

        let spans = encoder.encode_with_spans(sample);
        assert_eq!(
            spans.iter().map(|s| s.token).collect::<Vec<_>>(),
            *tokens
        );

        let mut offset = 0;
        for span in &spans {
            assert_eq!(span.range.start, offset);
            offset = span.range.end;
        }
        assert_eq!(offset, sample.len());
    }

    // Unseen text still encodes; at worst to byte tokens.
    for text in ["", "Ω≈ç√", "\u{10FFFF}", "ಕ", "🦀 rust"] {
        let tokens = encoder.encode(text);
        assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), text);
    }
}
