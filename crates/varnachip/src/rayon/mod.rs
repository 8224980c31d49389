//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders and decoders.
//!
//! Batch output order always matches input order.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
