//! transform/pipeline.rs
//! Applying and reverting steps over whole buffers.
//!
//! Summary:
//! - Gzip goes through `compression::codecs`, base64 through the STANDARD engine.
//! - Every step is timed under its telemetry stage; gzip output length is
//!   recorded as the compressed size.

use std::time::Instant;

use base64::{Engine, engine::general_purpose};
use tracing::debug;

use crate::compression::{Compressor, Decompressor, GzipCompressor, GzipDecompressor};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::transform::types::{TransformChain, TransformStep};
use crate::types::EnvelopeError;

impl TransformStep {
    fn apply_stage(&self) -> Option<Stage> {
        match self {
            TransformStep::Gzip => Some(Stage::Compress),
            TransformStep::Base64 => Some(Stage::Encode),
            TransformStep::Identity => None,
        }
    }

    fn revert_stage(&self) -> Option<Stage> {
        match self {
            TransformStep::Gzip => Some(Stage::Decompress),
            TransformStep::Base64 => Some(Stage::Decode),
            TransformStep::Identity => None,
        }
    }

    /// Forward direction (raw side to wire side).
    pub fn apply(&self, input: Vec<u8>, level: u32) -> Result<Vec<u8>, EnvelopeError> {
        match self {
            TransformStep::Gzip => {
                let mut out = Vec::new();
                GzipCompressor::new(level).compress_chunk(&input, &mut out)?;
                Ok(out)
            }
            TransformStep::Base64 => Ok(general_purpose::STANDARD.encode(&input).into_bytes()),
            TransformStep::Identity => Ok(input),
        }
    }

    /// Reverse direction (wire side to raw side).
    pub fn revert(&self, input: Vec<u8>) -> Result<Vec<u8>, EnvelopeError> {
        match self {
            TransformStep::Gzip => {
                let mut out = Vec::new();
                GzipDecompressor.decompress_chunk(&input, &mut out)?;
                Ok(out)
            }
            TransformStep::Base64 => Ok(general_purpose::STANDARD.decode(&input)?),
            TransformStep::Identity => Ok(input),
        }
    }
}

impl TransformChain {
    /// Run every step front to back.
    pub fn apply(
        &self,
        input: &[u8],
        level: u32,
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>, EnvelopeError> {
        counters.bytes_plain = input.len() as u64;

        let mut data = input.to_vec();
        for step in self.steps() {
            let in_len = data.len();
            let t = Instant::now();
            data = step.apply(data, level)?;
            if let Some(stage) = step.apply_stage() {
                timer.add_stage_time(stage, t.elapsed());
            }
            counters.record_step(*step, data.len());
            debug!(step = %step, input = in_len, output = data.len(), "transform applied");
        }

        counters.bytes_encoded = data.len() as u64;
        Ok(data)
    }

    /// Undo every step back to front.
    pub fn revert(
        &self,
        payload: &[u8],
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>, EnvelopeError> {
        counters.bytes_encoded = payload.len() as u64;

        let mut data = payload.to_vec();
        for step in self.steps().iter().rev() {
            let in_len = data.len();
            let t = Instant::now();
            data = step.revert(data)?;
            if let Some(stage) = step.revert_stage() {
                timer.add_stage_time(stage, t.elapsed());
            }
            counters.record_step(*step, in_len);
            debug!(step = %step, input = in_len, output = data.len(), "transform reverted");
        }

        counters.bytes_plain = data.len() as u64;
        Ok(data)
    }
}
