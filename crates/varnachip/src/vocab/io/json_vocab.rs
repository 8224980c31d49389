//! # JSON Vocabulary IO
//!
//! ```json
//! {
//!   "format": "varnachip-vocab",
//!   "version": 1,
//!   "segmentation": { "target_ranges": [{ "start": 3200, "end": 3327 }] },
//!   "merges": [{ "rank": 0, "left": 97, "right": 98, "token": 256 }],
//!   "tokens": [{ "token": 256, "bytes": "YWI=" }]
//! }
//! ```
//!
//! `tokens` is optional on load; when present it must agree with the
//! expansions rebuilt from `merges`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{VCResult, VarnachipError},
    segmentation::SegmentationConfig,
    types::TokenType,
    vocab::{MergeRule, MergeVocab, UnifiedTokenVocab},
};

/// The `format` tag of a JSON vocab file.
pub const JSON_VOCAB_FORMAT: &str = "varnachip-vocab";

/// The `version` of the JSON vocab file layout.
pub const JSON_VOCAB_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct VocabRecord {
    format: String,
    version: u32,
    segmentation: SegmentationConfig,
    merges: Vec<MergeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<TokenRecord>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MergeRecord {
    rank: usize,
    left: u64,
    right: u64,
    token: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    token: u64,
    bytes: String,
}

fn corrupt(msg: String) -> VarnachipError {
    VarnachipError::CorruptVocabulary(msg)
}

fn record_token<T: TokenType>(token: u64) -> VCResult<T> {
    T::from_u64(token).ok_or_else(|| corrupt(format!("token {token} does not fit the token type")))
}

fn wire_token<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

/// Load a [`UnifiedTokenVocab`] from a JSON vocab file.
///
/// ## Arguments
/// * `path` - path to the file.
pub fn load_json_vocab_path<T, P>(path: P) -> VCResult<UnifiedTokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_json_vocab(reader)
}

/// Read a [`UnifiedTokenVocab`] from a JSON vocab reader.
///
/// ## Arguments
/// * `reader` - the source reader.
pub fn read_json_vocab<T, R>(reader: R) -> VCResult<UnifiedTokenVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let record: VocabRecord = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            VarnachipError::Json(e)
        } else {
            corrupt(e.to_string())
        }
    })?;

    if record.format != JSON_VOCAB_FORMAT {
        return Err(corrupt(format!("unknown format {:?}", record.format)));
    }
    if record.version != JSON_VOCAB_VERSION {
        return Err(corrupt(format!("unsupported version {}", record.version)));
    }

    let rules = record
        .merges
        .iter()
        .map(|m| {
            Ok(MergeRule {
                pair: (record_token(m.left)?, record_token(m.right)?),
                token: record_token(m.token)?,
                rank: m.rank,
            })
        })
        .collect::<VCResult<Vec<MergeRule<T>>>>()?;

    let merge_vocab = MergeVocab::from_merge_rules(rules)?;

    if let Some(tokens) = &record.tokens {
        verify_token_records(&merge_vocab, tokens)?;
    }

    UnifiedTokenVocab::new(record.segmentation, merge_vocab).map_err(|e| corrupt(e.to_string()))
}

fn verify_token_records<T: TokenType>(
    merge_vocab: &MergeVocab<T>,
    tokens: &[TokenRecord],
) -> VCResult<()> {
    if tokens.len() != merge_vocab.len() {
        return Err(corrupt(format!(
            "{} token records for {} tokens",
            tokens.len(),
            merge_vocab.len()
        )));
    }

    for (idx, record) in tokens.iter().enumerate() {
        if record.token != idx as u64 {
            return Err(corrupt(format!(
                "token record {} at position {idx}",
                record.token
            )));
        }
        let token: T = record_token(record.token)?;
        let bytes = BASE64_STANDARD
            .decode(&record.bytes)
            .map_err(|e| corrupt(format!("token {}: {e}", record.token)))?;

        match merge_vocab.get_bytes(token) {
            Some(expected) if expected == bytes.as_slice() => {}
            Some(_) => {
                return Err(corrupt(format!(
                    "token {} bytes disagree with its merge rule",
                    record.token
                )));
            }
            None => {
                return Err(corrupt(format!(
                    "token {} is outside the vocabulary",
                    record.token
                )));
            }
        }
    }
    Ok(())
}

/// Save a [`UnifiedTokenVocab`] to a JSON vocab file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_json_vocab_path<T, P>(
    vocab: &UnifiedTokenVocab<T>,
    path: P,
) -> VCResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`UnifiedTokenVocab`] to a [`Write`] writer.
///
/// Every token expansion is included.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_json_vocab<T, W>(
    vocab: &UnifiedTokenVocab<T>,
    writer: &mut W,
) -> VCResult<()>
where
    T: TokenType,
    W: Write,
{
    let merge_vocab = vocab.merge_vocab();

    let record = VocabRecord {
        format: JSON_VOCAB_FORMAT.to_string(),
        version: JSON_VOCAB_VERSION,
        segmentation: vocab.segmentation().clone(),
        merges: merge_vocab
            .merge_rules()
            .iter()
            .map(|rule| MergeRecord {
                rank: rule.rank,
                left: wire_token(rule.pair.0),
                right: wire_token(rule.pair.1),
                token: wire_token(rule.token),
            })
            .collect(),
        tokens: Some(
            merge_vocab
                .token_spans()
                .iter()
                .enumerate()
                .map(|(idx, span)| TokenRecord {
                    token: idx as u64,
                    bytes: BASE64_STANDARD.encode(span),
                })
                .collect(),
        ),
    };

    serde_json::to_writer_pretty(&mut *writer, &record)?;
    writeln!(writer)?;
    Ok(())
}
