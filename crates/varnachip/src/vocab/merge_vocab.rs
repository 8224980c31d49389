//! # Merge Vocabulary
//!
//! The trained symbol store: byte expansions, the reverse byte index,
//! and the rank ordered merge rules.

use crate::{
    errors::{VCResult, VarnachipError},
    types::{Pair, TokenType},
    vocab::{
        byte_tokens::{U8_SIZE, byte_token},
        vocab_types::{PairTokenMap, SpanTokenMap},
    },
};

/// A learned merge rule: ``pair -> token``, applied at `rank`.
///
/// For every rule, ``token == 256 + rank``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule<T: TokenType> {
    /// The ``(left, right)`` pair merged by this rule.
    pub pair: Pair<T>,

    /// The token produced by the rule.
    pub token: T,

    /// The 0-based order in which the rule was learned.
    pub rank: usize,
}

fn to_token<T: TokenType>(idx: usize) -> VCResult<T> {
    T::from_usize(idx).ok_or(VarnachipError::VocabSizeOverflow { size: idx + 1 })
}

/// Merge ``{ (T, T) -> T }`` vocabulary, with a dense ``T -> Vec<u8>`` table.
///
/// Tokens ``0..256`` are the raw bytes; every later token is the
/// concatenation of exactly two earlier tokens. Ids are dense, and
/// byte expansions never change once a token is created.
///
/// ## Style Hints
///
/// Instance names should prefer `merge_vocab`, or `vocab`.
#[derive(Debug, Clone)]
pub struct MergeVocab<T: TokenType> {
    /// Dense ``{ T -> Vec<u8> }`` expansion table.
    token_spans: Vec<Vec<u8>>,

    /// ``{ Vec<u8> -> T }``; holding the lowest token for each expansion.
    span_tokens: SpanTokenMap<T>,

    /// ``{ (T, T) -> T }`` rule index.
    pair_tokens: PairTokenMap<T>,

    /// Rules, in rank order.
    merges: Vec<MergeRule<T>>,
}

impl<T: TokenType> PartialEq for MergeVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // The indexes are functions of the rules.
        self.merges == other.merges
    }
}

impl<T: TokenType> Eq for MergeVocab<T> {}

impl<T: TokenType> Default for MergeVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> MergeVocab<T> {
    /// Create a vocabulary holding only the 256 byte tokens.
    pub fn new() -> Self {
        let token_spans: Vec<Vec<u8>> = (0..=u8::MAX).map(|b| vec![b]).collect();
        let span_tokens = token_spans
            .iter()
            .map(|span| (span.clone(), byte_token::<T>(span[0])))
            .collect();

        Self {
            token_spans,
            span_tokens,
            pair_tokens: PairTokenMap::default(),
            merges: Vec::new(),
        }
    }

    /// Rebuild a vocabulary from persisted merge rules.
    ///
    /// ## Arguments
    /// * `rules` - the rules, in rank order.
    ///
    /// ## Returns
    /// The rebuilt vocabulary; or a [`VarnachipError::CorruptVocabulary`] if:
    /// * a rule's rank is not its position,
    /// * a rule's token is not ``256 + rank``,
    /// * a rule references a token which is not yet defined,
    /// * a pair is merged twice.
    pub fn from_merge_rules<I>(rules: I) -> VCResult<Self>
    where
        I: IntoIterator<Item = MergeRule<T>>,
    {
        let mut vocab = Self::new();
        for (idx, rule) in rules.into_iter().enumerate() {
            if rule.rank != idx {
                return Err(VarnachipError::CorruptVocabulary(format!(
                    "merge at position {idx} has rank {}",
                    rule.rank
                )));
            }
            if rule.token.to_usize() != Some(U8_SIZE + idx) {
                return Err(VarnachipError::CorruptVocabulary(format!(
                    "merge rank {idx} has token {}; expected {}",
                    rule.token,
                    U8_SIZE + idx
                )));
            }
            vocab.try_push_merge(rule.pair).map_err(|e| match e {
                VarnachipError::VocabSizeOverflow { .. } => e,
                e => VarnachipError::CorruptVocabulary(format!("merge rank {idx}: {e}")),
            })?;
        }
        Ok(vocab)
    }

    /// Rebuild a vocabulary from an ordered list of pairs.
    ///
    /// Ranks and tokens are assigned by position.
    pub fn from_merge_pairs<I>(pairs: I) -> VCResult<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut vocab = Self::new();
        for (idx, pair) in pairs.into_iter().enumerate() {
            vocab.try_push_merge(pair).map_err(|e| match e {
                VarnachipError::VocabSizeOverflow { .. } => e,
                e => VarnachipError::CorruptVocabulary(format!("merge rank {idx}: {e}")),
            })?;
        }
        Ok(vocab)
    }

    /// Append a new merge rule.
    ///
    /// ## Arguments
    /// * `pair` - the pair to merge; both tokens must already exist.
    ///
    /// ## Returns
    /// The new token, ``256 + rank``.
    pub(crate) fn try_push_merge(
        &mut self,
        pair: Pair<T>,
    ) -> VCResult<T> {
        let (a, b) = pair;
        if self.pair_tokens.contains_key(&pair) {
            return Err(VarnachipError::CorruptVocabulary(format!(
                "pair ({a}, {b}) is already merged"
            )));
        }

        let mut span = self.try_get_bytes(a)?.to_vec();
        span.extend_from_slice(self.try_get_bytes(b)?);

        let idx = self.token_spans.len();
        let token: T = to_token(idx)?;

        self.span_tokens.entry(span.clone()).or_insert(token);
        self.token_spans.push(span);
        self.pair_tokens.insert(pair, token);
        self.merges.push(MergeRule {
            pair,
            token,
            rank: idx - U8_SIZE,
        });

        Ok(token)
    }

    /// The number of tokens in the vocabulary; bytes and merges.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.token_spans.len()
    }

    /// The highest token in the vocabulary.
    pub fn max_token(&self) -> T {
        self.merges
            .last()
            .map(|rule| rule.token)
            .unwrap_or_else(|| byte_token(u8::MAX))
    }

    /// Iterate over all tokens, in id order.
    pub fn tokens(&self) -> impl Iterator<Item = T> + '_ {
        (0..=u8::MAX)
            .map(byte_token::<T>)
            .chain(self.merges.iter().map(|rule| rule.token))
    }

    /// Get the byte expansion of a token.
    ///
    /// ## Returns
    /// `None` for tokens outside the vocabulary.
    #[inline]
    pub fn get_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        token
            .to_usize()
            .and_then(|idx| self.token_spans.get(idx))
            .map(Vec::as_slice)
    }

    /// Get the byte expansion of a token.
    ///
    /// ## Returns
    /// A [`VarnachipError::OutOfRangeToken`] for tokens outside the vocabulary.
    #[inline]
    pub fn try_get_bytes(
        &self,
        token: T,
    ) -> VCResult<&[u8]> {
        self.get_bytes(token)
            .ok_or_else(|| VarnachipError::OutOfRangeToken {
                token: token.to_u64().unwrap_or(u64::MAX),
                vocab_size: self.len(),
            })
    }

    /// Find the lowest token whose byte expansion is `bytes`.
    pub fn get_id_for_bytes(
        &self,
        bytes: &[u8],
    ) -> Option<T> {
        self.span_tokens.get(bytes).copied()
    }

    /// The merge rules, in rank order.
    pub fn merge_rules(&self) -> &[MergeRule<T>] {
        &self.merges
    }

    /// Look up the token produced by merging a pair.
    #[inline]
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_tokens.get(pair).copied()
    }

    /// Look up the rule which merges a pair.
    #[inline]
    pub fn lookup_rule(
        &self,
        pair: &Pair<T>,
    ) -> Option<&MergeRule<T>> {
        self.lookup_pair(pair).and_then(|token| {
            let idx = token.to_usize()? - U8_SIZE;
            self.merges.get(idx)
        })
    }

    /// The dense expansion table, indexed by token.
    pub fn token_spans(&self) -> &[Vec<u8>] {
        &self.token_spans
    }
}
