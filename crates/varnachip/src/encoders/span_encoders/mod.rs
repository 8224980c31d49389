//! # Span Encoders
//!
//! Interchangeable policies for encoding a single chunk.
//!
//! * [`MergeScanSpanPolicy`] - repeatedly merge the lowest-rank pair present.
//! * [`RankSweepSpanPolicy`] - one left-to-right pass per rule, in rank order.
//!
//! Both produce identical tokens: applying a rule only creates pairs
//! containing its new token, and every rule over that token has a higher rank.

mod merge_scan_encoder;
mod rank_sweep_encoder;
mod span_policy;

#[doc(inline)]
pub use merge_scan_encoder::MergeScanSpanPolicy;
#[doc(inline)]
pub use rank_sweep_encoder::RankSweepSpanPolicy;
#[doc(inline)]
pub use span_policy::SpanPolicy;
