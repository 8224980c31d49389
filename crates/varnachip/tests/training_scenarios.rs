#![allow(missing_docs)]

use std::{fs, sync::Arc};

use tempdir::TempDir;
use varnachip::{
    MergeRule,
    UnifiedTokenVocab,
    VarnachipError,
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{MergeVocabEncoder, TokenEncoder},
    segmentation::SegmentationConfig,
    training::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, StopReason, train},
    vocab::io::{load_json_vocab_path, load_merges_text_path, save_json_vocab_path, save_merges_text_path},
};

type T = u32;

const CORPUS: &[&str] = &[
    "ನಮಸ್ಕಾರ, ಇದು ಕನ್ನಡ ಟೋಕನೈಜರ್ ಆಗಿದೆ.",
    "ಕನ್ನಡ ಭಾಷೆ ಸುಂದರ ಭಾಷೆ; ಕರ್ನಾಟಕ ಕನ್ನಡ ನಾಡು!!",
    "hello world, hello san francisco",
    "it's not the heat, it's the salt: 2024 2025",
];

#[test]
fn test_single_merge_scenario() {
    let (vocab, metrics) = train::<T, _>(["ab ab ab"], 258, SegmentationConfig::kannada()).unwrap();

    assert_eq!(
        vocab.merge_rules(),
        &[MergeRule {
            pair: (97, 98),
            token: 256,
            rank: 0,
        }]
    );
    assert_eq!(vocab.len(), 257);
    assert_eq!(metrics.stop_reason, StopReason::Exhausted);

    let vocab = Arc::new(vocab);
    let encoder = MergeVocabEncoder::<T>::new(vocab.clone());
    let decoder = DictionaryDecoder::from_unified_vocab(&vocab);

    let tokens = encoder.encode("ab");
    assert_eq!(tokens, vec![256]);
    assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), "ab");

    assert_eq!(encoder.encode("ab ab"), vec![256, 32, 256]);
}

#[test]
fn test_deterministic() {
    let (a, ma) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    let (b, mb) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    assert_eq!(a, b);
    assert_eq!(ma, mb);
}

#[test]
fn test_merges_respect_chunk_boundaries() {
    let (vocab, _) = train::<T, _>(CORPUS, 1000, SegmentationConfig::kannada()).unwrap();
    let segmentor = vocab.segmentor();

    for rule in vocab.merge_rules() {
        let bytes = vocab.get_bytes(rule.token).unwrap();
        if let Ok(text) = std::str::from_utf8(bytes) {
            assert_eq!(segmentor.split_chunks(text).len(), 1, "{text:?}");
        }
        if bytes.contains(&b' ') {
            assert!(bytes.iter().all(|b| b.is_ascii_whitespace()), "{bytes:?}");
        }
    }
}

#[test]
fn test_growth_is_monotonic() {
    let vocabs: Vec<UnifiedTokenVocab<T>> = [260, 280, 300, 320]
        .into_iter()
        .map(|size| train::<T, _>(CORPUS, size, SegmentationConfig::kannada()).unwrap().0)
        .collect();

    for w in vocabs.windows(2) {
        let small = w[0].merge_rules();
        let large = w[1].merge_rules();
        assert!(small.len() <= large.len());
        assert_eq!(small, &large[..small.len()]);
    }
}

#[test]
fn test_compression_matches_metrics() {
    let (vocab, metrics) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    let encoder = MergeVocabEncoder::<T>::new(vocab);

    let total_bytes: usize = CORPUS.iter().map(|s| s.len()).sum();
    let total_tokens: usize = CORPUS.iter().map(|s| encoder.encode(s).len()).sum();

    assert_eq!(metrics.total_byte_count, total_bytes);
    assert_eq!(metrics.token_count, total_tokens);
    assert!(metrics.compression_ratio > 1.0);
    assert!(total_tokens < total_bytes);
}

#[test]
fn test_unknown_bytes_encode_raw() {
    let (vocab, _) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    let vocab = Arc::new(vocab);
    let encoder = MergeVocabEncoder::<T>::new(vocab.clone());
    let decoder = DictionaryDecoder::from_unified_vocab(&vocab);

    let tokens = encoder.encode("€");
    assert_eq!(tokens, vec![0xE2, 0x82, 0xAC]);
    assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), "€");
}

#[test]
fn test_empty_corpus() {
    let (vocab, metrics) =
        train::<T, _>(Vec::<String>::new(), 300, SegmentationConfig::kannada()).unwrap();
    assert_eq!(vocab.len(), 256);
    assert_eq!(metrics.merge_count, 0);

    let encoder = MergeVocabEncoder::<T>::new(vocab);
    assert_eq!(encoder.encode("hi"), vec![104, 105]);
    assert!(encoder.encode("").is_empty());
}

#[test]
fn test_decode_out_of_range() {
    let (vocab, _) = train::<T, _>(["ab ab ab"], 258, SegmentationConfig::kannada()).unwrap();
    let decoder = DictionaryDecoder::from_unified_vocab(vocab);

    let tokens: [T; 2] = [104, 257];
    match decoder.try_decode_to_bytes(tokens) {
        Err(VarnachipError::OutOfRangeToken { token, vocab_size }) => {
            assert_eq!(token, 257);
            assert_eq!(vocab_size, 257);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_trainer_options() {
    let options = BinaryPairVocabTrainerOptions::new(SegmentationConfig::kannada(), 1000)
        .with_min_frequency(3)
        .with_max_merges(Some(10));

    let mut trainer: BinaryPairVocabTrainer = options.init().unwrap();
    trainer.update_from_samples(CORPUS);
    let results = trainer.train_with_metrics::<T>().unwrap();

    assert!(results.metrics.merge_count <= 10);
    assert_eq!(results.vocab.len(), 256 + results.metrics.merge_count);
}

#[test]
fn test_save_load_json() {
    let tmp_dir = TempDir::new("varnachip_json").unwrap();
    let path = tmp_dir.path().join("vocab.json");

    let (vocab, _) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    save_json_vocab_path(&vocab, &path).unwrap();

    let loaded: UnifiedTokenVocab<T> = load_json_vocab_path(&path).unwrap();
    assert_eq!(loaded, vocab);

    let encoder = MergeVocabEncoder::<T>::new(vocab);
    let loaded_encoder = MergeVocabEncoder::<T>::new(loaded);
    for sample in CORPUS {
        assert_eq!(encoder.encode(sample), loaded_encoder.encode(sample));
    }
}

#[test]
fn test_save_load_merges_text() {
    let tmp_dir = TempDir::new("varnachip_merges").unwrap();
    let path = tmp_dir.path().join("merges.txt");

    let (vocab, _) = train::<T, _>(CORPUS, 400, SegmentationConfig::kannada()).unwrap();
    save_merges_text_path(vocab.merge_vocab(), &path).unwrap();

    let loaded = load_merges_text_path::<T, _>(&path).unwrap();
    assert_eq!(loaded.merge_rules(), vocab.merge_rules());
}

#[test]
fn test_load_corrupt() {
    let tmp_dir = TempDir::new("varnachip_corrupt").unwrap();

    let path = tmp_dir.path().join("garbage.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_json_vocab_path::<T, _>(&path),
        Err(VarnachipError::CorruptVocabulary(_))
    ));

    let path = tmp_dir.path().join("missing.json");
    assert!(matches!(
        load_json_vocab_path::<T, _>(&path),
        Err(VarnachipError::Io(_))
    ));

    let path = tmp_dir.path().join("merges.txt");
    fs::write(&path, "97 98\n97 300\n").unwrap();
    assert!(matches!(
        load_merges_text_path::<T, _>(&path),
        Err(VarnachipError::CorruptVocabulary(_))
    ));
}
