//! # Script Classes

use unicode_general_category::{GeneralCategory, get_general_category};

/// The character classes which bound segmentation chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScriptClass {
    /// Characters in the configured target script ranges.
    TargetScript,

    /// Latin letters and their combining marks.
    Latin,

    /// Decimal digits (general category `Nd`).
    Digit,

    /// Everything else which is not whitespace.
    Other,

    /// Unicode `White_Space` characters.
    Whitespace,
}

/// Inclusive code point ranges which hold Latin letters.
pub const LATIN_RANGES: &[(u32, u32)] = &[
    // Basic Latin; only the letters pass the category check.
    (0x0041, 0x007A),
    // Latin-1 Supplement.
    (0x00C0, 0x00FF),
    // Latin Extended-A, Latin Extended-B, IPA Extensions.
    (0x0100, 0x02AF),
    // Combining Diacritical Marks.
    (0x0300, 0x036F),
    // Latin Extended Additional.
    (0x1E00, 0x1EFF),
    // Latin Extended-C.
    (0x2C60, 0x2C7F),
    // Latin Extended-D.
    (0xA720, 0xA7FF),
    // Latin Extended-E.
    (0xAB30, 0xAB6F),
    // Alphabetic Presentation Forms (Latin ligatures).
    (0xFB00, 0xFB06),
    // Fullwidth Latin letters.
    (0xFF21, 0xFF5A),
];

fn in_ranges(
    cp: u32,
    ranges: &[(u32, u32)],
) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

fn is_letter_or_mark(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

impl ScriptClass {
    /// Classify a character.
    ///
    /// ## Arguments
    /// * `c` - the character to classify.
    /// * `is_target` - predicate for the target script ranges.
    ///
    /// Whitespace wins over everything; the target script ranges win over
    /// the category based classes (so native digits of the target script
    /// stay in the target script run).
    pub fn classify<F>(
        c: char,
        is_target: F,
    ) -> Self
    where
        F: Fn(char) -> bool,
    {
        if c.is_whitespace() {
            return ScriptClass::Whitespace;
        }
        if is_target(c) {
            return ScriptClass::TargetScript;
        }

        let category = get_general_category(c);
        if category == GeneralCategory::DecimalNumber {
            ScriptClass::Digit
        } else if is_letter_or_mark(category) && in_ranges(c as u32, LATIN_RANGES) {
            ScriptClass::Latin
        } else {
            ScriptClass::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kannada(c: char) -> bool {
        ('\u{0C80}'..='\u{0CFF}').contains(&c)
    }

    #[test]
    fn test_classify_basic() {
        assert_eq!(ScriptClass::classify('a', kannada), ScriptClass::Latin);
        assert_eq!(ScriptClass::classify('Z', kannada), ScriptClass::Latin);
        assert_eq!(ScriptClass::classify('é', kannada), ScriptClass::Latin);
        assert_eq!(ScriptClass::classify('7', kannada), ScriptClass::Digit);
        assert_eq!(ScriptClass::classify(' ', kannada), ScriptClass::Whitespace);
        assert_eq!(ScriptClass::classify('\n', kannada), ScriptClass::Whitespace);
        assert_eq!(ScriptClass::classify('\u{3000}', kannada), ScriptClass::Whitespace);
        assert_eq!(ScriptClass::classify(',', kannada), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('_', kannada), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('[', kannada), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('😀', kannada), ScriptClass::Other);
    }

    #[test]
    fn test_classify_target_script() {
        // ಕ (letter), ್ (virama), ಾ (vowel sign), ೭ (kannada digit seven).
        for c in ['ಕ', '್', 'ಾ', '೭'] {
            assert_eq!(ScriptClass::classify(c, kannada), ScriptClass::TargetScript);
        }

        // Without a target script, the letters fall to `Other`,
        // and native digits to `Digit`.
        assert_eq!(ScriptClass::classify('ಕ', |_| false), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('೭', |_| false), ScriptClass::Digit);
    }

    #[test]
    fn test_classify_non_latin_letters() {
        // Devanagari, Greek and CJK letters are not Latin.
        assert_eq!(ScriptClass::classify('न', kannada), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('λ', kannada), ScriptClass::Other);
        assert_eq!(ScriptClass::classify('你', kannada), ScriptClass::Other);

        // Devanagari digits are still digits.
        assert_eq!(ScriptClass::classify('३', kannada), ScriptClass::Digit);
    }

    #[test]
    fn test_combining_marks_stay_latin() {
        // "e" + COMBINING ACUTE ACCENT.
        assert_eq!(ScriptClass::classify('\u{0301}', kannada), ScriptClass::Latin);
    }
}
