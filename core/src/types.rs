use std::io;
use thiserror::Error;

use crate::{
    compression::CompressionError,
    headers::{DescriptorError, FormatError},
};

/// Unified envelope error covering I/O, structure, payload decoding and content.
/// - `From<T>` impls let `?` cross every layer.
/// - Each variant maps to one failure stage so callers can tell them apart.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Source unreadable or destination unwritable.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Wrong line count or header.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Payload line is not valid base64.
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// gzip stream corrupt, truncated or empty (or the compressor failed).
    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    /// Descriptor line could not be interpreted.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Recovered bytes disagree with the declared content type.
    #[error("content error: {0}")]
    Content(String),
}
