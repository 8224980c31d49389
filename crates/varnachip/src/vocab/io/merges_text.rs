//! # Merges Text IO
//!
//! Lines are:
//! ```terminaloutput
//! {LEFT} {RIGHT}
//! ```
//! in rank order. Blank lines, and lines starting with `#`, are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{VCResult, VarnachipError},
    types::{Pair, TokenType},
    vocab::MergeVocab,
};

/// Load a [`MergeVocab`] from a merges text file.
///
/// ## Arguments
/// * `path` - the path to the merges file.
pub fn load_merges_text_path<T, P>(path: P) -> VCResult<MergeVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_merges_text(reader)
}

/// Read a [`MergeVocab`] from a merges text line reader.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_merges_text<T, R>(reader: R) -> VCResult<MergeVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut pairs: Vec<Pair<T>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }

        let lineno = idx + 1;
        let parse = |part: Option<&str>| -> VCResult<T> {
            let part = part.ok_or_else(|| {
                VarnachipError::CorruptVocabulary(format!("line {lineno}: expected two tokens"))
            })?;
            let id: u64 = part.parse().map_err(|e: core::num::ParseIntError| {
                VarnachipError::CorruptVocabulary(format!("line {lineno}: {e}"))
            })?;
            T::from_u64(id).ok_or_else(|| {
                VarnachipError::CorruptVocabulary(format!(
                    "line {lineno}: token {id} does not fit the token type"
                ))
            })
        };

        let mut parts = s.split_whitespace();
        let pair = (parse(parts.next())?, parse(parts.next())?);
        if parts.next().is_some() {
            return Err(VarnachipError::CorruptVocabulary(format!(
                "line {lineno}: expected two tokens"
            )));
        }
        pairs.push(pair);
    }

    MergeVocab::from_merge_pairs(pairs)
}

/// Save a [`MergeVocab`] to a merges text file.
///
/// ## Arguments
/// * `merge_vocab` - the vocabulary to save.
/// * `path` - the path to save the merges to.
pub fn save_merges_text_path<T, P>(
    merge_vocab: &MergeVocab<T>,
    path: P,
) -> VCResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_merges_text(merge_vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`MergeVocab`] to a [`Write`] writer.
///
/// ## Arguments
/// * `merge_vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_merges_text<T, W>(
    merge_vocab: &MergeVocab<T>,
    writer: &mut W,
) -> VCResult<()>
where
    T: TokenType,
    W: Write,
{
    writeln!(writer, "# varnachip merges")?;
    for rule in merge_vocab.merge_rules() {
        writeln!(writer, "{} {}", rule.pair.0, rule.pair.1)?;
    }
    Ok(())
}
