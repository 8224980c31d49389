//! # Text Segmentor

use core::{iter::FusedIterator, ops::Range};

use crate::{
    errors::VCResult,
    segmentation::{script_class::ScriptClass, segmentation_config::SegmentationConfig},
};

/// A maximal same-class run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The class shared by every character in the chunk.
    pub class: ScriptClass,

    /// The byte range of the chunk in the source text.
    pub range: Range<usize>,
}

impl Chunk {
    /// View the chunk in its source text.
    ///
    /// ## Arguments
    /// * `text` - the text the chunk was produced from.
    pub fn as_str<'a>(
        &self,
        text: &'a str,
    ) -> &'a str {
        &text[self.range.clone()]
    }

    /// The chunk length in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Is the chunk empty? (Never true for segmentor output.)
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Script-class run segmentor.
///
/// ## Style Hints
///
/// Instance names should prefer `segmentor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegmentor {
    config: SegmentationConfig,
}

impl TextSegmentor {
    /// Create a new text segmentor from the given configuration.
    ///
    /// ## Arguments
    /// * `config` - The segmentation configuration.
    ///
    /// ## Returns
    /// A new `TextSegmentor`, or an error if the config is invalid.
    pub fn from_config(config: SegmentationConfig) -> VCResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the segmentation config.
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Classify a single character.
    #[inline]
    pub fn classify(
        &self,
        c: char,
    ) -> ScriptClass {
        ScriptClass::classify(c, |c| self.config.is_target(c))
    }

    /// Iterate over the [`Chunk`]s of the text.
    ///
    /// The iterator is lazy, and may be cloned to restart from its current position.
    pub fn chunks<'a>(
        &'a self,
        text: &'a str,
    ) -> ChunkIter<'a> {
        ChunkIter {
            segmentor: self,
            text,
            offset: 0,
        }
    }

    /// Split the text into chunk slices.
    pub fn split_chunks<'a>(
        &'a self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.chunks(text).map(|chunk| chunk.as_str(text)).collect()
    }

    /// Split the text into pieces of at least `piece_len` bytes (the last may be shorter),
    /// cutting only at chunk boundaries.
    ///
    /// Every piece segments exactly as it does inside the full text,
    /// so pieces may be encoded independently and concatenated.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    /// * `piece_len` - the minimum piece length in bytes.
    pub fn split_aligned<'a>(
        &'a self,
        text: &'a str,
        piece_len: usize,
    ) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for chunk in self.chunks(text) {
            let end = chunk.range.end;
            if end - start >= piece_len {
                pieces.push(&text[start..end]);
                start = end;
            }
        }
        if start < text.len() {
            pieces.push(&text[start..]);
        }
        pieces
    }
}

/// Lazy iterator over the [`Chunk`]s of a text.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
    segmentor: &'a TextSegmentor,
    text: &'a str,
    offset: usize,
}

impl Iterator for ChunkIter<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        let rest = &self.text[start..];

        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let class = self.segmentor.classify(first);

        let end = chars
            .find(|&(_, c)| self.segmentor.classify(c) != class)
            .map(|(idx, _)| start + idx)
            .unwrap_or(self.text.len());

        self.offset = end;
        Some(Chunk {
            class,
            range: start..end,
        })
    }
}

impl FusedIterator for ChunkIter<'_> {}
