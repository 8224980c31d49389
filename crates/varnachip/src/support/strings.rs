//! # String Utilities

/// Convert bytes to a `String`, replacing invalid UTF-8 sequences with `U+FFFD`.
///
/// Reuses the allocation when the bytes are valid UTF-8.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    String::from_utf8(v).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
