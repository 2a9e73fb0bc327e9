//! envelope-core
//!
//! EC v1 text envelope: gzip, then base64, then a tagged three-line header.
//! Pure library; argument parsing lives in the cli crate.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod io;

pub mod compression;
pub mod headers;
pub mod transform;
pub mod telemetry;

pub mod envelope;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::envelope::{decode, encode, encode_with, inspect, parse, EncodeOptions, Envelope, Report};
    pub use crate::headers::{Descriptor, FormatVersion};
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::types::EnvelopeError;
}
