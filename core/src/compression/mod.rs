//! compression/mod.rs
//! Whole-buffer compression behind the `gz` transform step.
//!
//! Notes:
//! - One envelope payload is one gzip member; no chunking or dictionaries.
//! - Codecs sit behind `Compressor`/`Decompressor` so the transform
//!   pipeline does not depend on flate2 directly.

pub mod types;
pub mod codecs;

pub use types::*;
pub use codecs::*;
