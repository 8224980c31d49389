//! # Vocabulary Types

use crate::types::{Pair, VCHashMap};

/// `{ Pair<T> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `pair_map`, or `pair_tokens`.
pub type PairTokenMap<T> = VCHashMap<Pair<T>, T>;

/// `{ Vec<u8> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_map`, or `span_tokens`.
pub type SpanTokenMap<T> = VCHashMap<Vec<u8>, T>;
