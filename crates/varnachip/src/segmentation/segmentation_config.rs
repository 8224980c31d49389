//! # Segmentation Config

use serde::{Deserialize, Serialize};

use crate::errors::{VCResult, VarnachipError};

/// An inclusive ``start..=end`` range of Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodePointRange {
    /// The first code point in the range.
    pub start: u32,

    /// The last code point in the range.
    pub end: u32,
}

impl CodePointRange {
    /// Create a new range.
    pub const fn new(
        start: u32,
        end: u32,
    ) -> Self {
        Self { start, end }
    }

    /// Does this range contain the code point?
    #[inline(always)]
    pub fn contains(
        &self,
        cp: u32,
    ) -> bool {
        self.start <= cp && cp <= self.end
    }
}

/// The Kannada Unicode block.
pub const KANNADA_BLOCK: CodePointRange = CodePointRange::new(0x0C80, 0x0CFF);

/// Zero width non-joiner and zero width joiner; used inside Indic words.
pub const ZW_JOINERS: CodePointRange = CodePointRange::new(0x200C, 0x200D);

/// Description of a text segmentation.
///
/// ## Style Hints
///
/// Instance names should prefer `segmentation`, or `segmentation_config`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Code point ranges whose characters form the target script class.
    pub target_ranges: Vec<CodePointRange>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self::kannada()
    }
}

impl SegmentationConfig {
    /// A config targeting Kannada.
    pub fn kannada() -> Self {
        Self {
            target_ranges: vec![KANNADA_BLOCK, ZW_JOINERS],
        }
    }

    /// A config with no target script; only the Latin/digit/other/space classes.
    pub fn latin_only() -> Self {
        Self {
            target_ranges: Vec::new(),
        }
    }

    /// Replace the target ranges.
    ///
    /// ## Arguments
    /// * `target_ranges` - the new ranges.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_target_ranges<I>(
        self,
        target_ranges: I,
    ) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        Self {
            target_ranges: target_ranges.into_iter().collect(),
        }
    }

    /// Add a target range.
    ///
    /// ## Arguments
    /// * `start` - the first code point.
    /// * `end` - the last code point (inclusive).
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_target_range(
        mut self,
        start: u32,
        end: u32,
    ) -> Self {
        self.target_ranges.push(CodePointRange::new(start, end));
        self
    }

    /// Check that every range is well-formed.
    pub fn validate(&self) -> VCResult<()> {
        for range in &self.target_ranges {
            if range.start > range.end {
                return Err(VarnachipError::InvalidConfig(format!(
                    "target range start {:#X} > end {:#X}",
                    range.start, range.end
                )));
            }
            if char::from_u32(range.start).is_none() && range.start == range.end {
                return Err(VarnachipError::InvalidConfig(format!(
                    "target range {:#X} is not a character",
                    range.start
                )));
            }
        }
        Ok(())
    }

    /// Is the character in one of the target ranges?
    #[inline]
    pub fn is_target(
        &self,
        c: char,
    ) -> bool {
        let cp = c as u32;
        self.target_ranges.iter().any(|r| r.contains(cp))
    }
}
