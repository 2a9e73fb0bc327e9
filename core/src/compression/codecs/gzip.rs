//! Gzip (RFC 1952) via flate2. Compression writes one member; decompression
//! reads every concatenated member and rejects trailing bytes that are not gzip.

use std::io::{Read, Write};
use flate2::{Compression, read::MultiGzDecoder, write::GzEncoder};

use crate::compression::types::{Compressor, Decompressor, CompressionError};

const CODEC: &str = "gzip";

pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    /// Levels outside 0..=9 fall back to the flate2 default.
    pub fn new(level: u32) -> Self {
        let lvl = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level: lvl }
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self { level: Compression::default() }
    }
}

impl Compressor for GzipCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = GzEncoder::new(Vec::new(), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: CODEC, msg: e.to_string() })?;
        let compressed = enc.finish()
            .map_err(|e| CompressionError::CodecProcessFailed { codec: CODEC, msg: e.to_string() })?;

        out.extend_from_slice(&compressed);
        Ok(())
    }
}

#[derive(Default)]
pub struct GzipDecompressor;

impl Decompressor for GzipDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // Even an empty gzip member carries a 20 byte frame.
        if input.is_empty() {
            return Err(CompressionError::EmptyStream { codec: CODEC });
        }

        let mut dec = MultiGzDecoder::new(input);
        let mut decompressed = Vec::new();
        dec.read_to_end(&mut decompressed)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: CODEC, msg: e.to_string() })?;

        out.extend_from_slice(&decompressed);
        Ok(())
    }
}
