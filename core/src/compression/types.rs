//! compression/types.rs
//! Codec traits and the compression error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    #[error("codec {codec} received an empty stream")]
    EmptyStream { codec: &'static str },
}

pub trait Compressor {
    /// Compress a whole buffer as one self-contained stream into `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor {
    /// Decompress a whole buffer (one or more members) into `out`.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
