//! # Text Segmentation
//!
//! This module exists to factor out text segmentation scanning.
//!
//! Text is split into maximal runs of characters which share a [`ScriptClass`];
//! byte pair merges never cross a run boundary, so (for instance) a word is
//! never merged with the punctuation or whitespace which follows it.
//!
//! [`SegmentationConfig`] describes the declarative needs of a tokenizer:
//! * `target_ranges` - the code point ranges of the target script.
//!
//! [`TextSegmentor`] implements the run-time classification and splitting.

pub mod script_class;
pub mod segmentation_config;
pub mod text_segmentor;

#[doc(inline)]
pub use script_class::ScriptClass;
#[doc(inline)]
pub use segmentation_config::{CodePointRange, SegmentationConfig};
#[doc(inline)]
pub use text_segmentor::{Chunk, ChunkIter, TextSegmentor};
