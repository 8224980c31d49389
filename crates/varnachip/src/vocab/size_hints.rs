//! # Common Statistics

/// Expected average chunk length in bytes.
///
/// Kannada characters are 3 UTF-8 bytes wide, so this is larger than
/// the usual ascii word length.
pub const EXPECTED_CHUNK_LENGTH: usize = 12;

/// Expected bytes/token ratio.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;
