//! telemetry/counters.rs
//! Mutable byte counters collected while an envelope is built or unpacked.

use serde::{Serialize, Deserialize};

use crate::transform::TransformStep;

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Raw input (encode) or recovered output (decode).
    pub bytes_plain: u64,
    /// Output of the gzip step; zero when the chain has none.
    pub bytes_compressed: u64,
    /// Payload line length.
    pub bytes_encoded: u64,
    /// Full envelope text length.
    pub bytes_envelope: u64,
}

impl TelemetryCounters {
    /// Record one step given the length on its wire side.
    pub fn record_step(&mut self, step: TransformStep, wire_len: usize) {
        if step == TransformStep::Gzip {
            self.bytes_compressed = wire_len as u64;
        }
    }

    pub fn set_envelope(&mut self, len: usize) {
        self.bytes_envelope = len as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_gzip_sets_compressed_size() {
        let mut c = TelemetryCounters::default();
        c.record_step(TransformStep::Base64, 16);
        assert_eq!(c.bytes_compressed, 0);
        c.record_step(TransformStep::Gzip, 31);
        assert_eq!(c.bytes_compressed, 31);
    }
}
