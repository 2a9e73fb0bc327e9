//! headers/mod.rs
//! Envelope header line and descriptor line.
//!
//! Notes:
//! - The header line selects a `FormatVersion`; the version owns the transform
//!   chain used by plain decode.
//! - The descriptor line is parsed on demand. Plain decode does not enforce it,
//!   inspection does.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
