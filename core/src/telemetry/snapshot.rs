//! telemetry/snapshot.rs
//! Immutable view of one operation's counters and timings.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_plain: u64,
    pub bytes_compressed: u64,
    pub bytes_encoded: u64,
    pub bytes_envelope: u64,
    /// `bytes_compressed / bytes_plain`, 0.0 for empty input or no gzip step.
    /// May exceed 1.0 for small or incompressible inputs.
    pub compression_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_plain > 0 {
            counters.bytes_compressed as f64 / counters.bytes_plain as f64
        } else {
            0.0
        };

        Self {
            bytes_plain: counters.bytes_plain,
            bytes_compressed: counters.bytes_compressed,
            bytes_encoded: counters.bytes_encoded,
            bytes_envelope: counters.bytes_envelope,
            compression_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Stage times never exceed wall time; the envelope always contains its payload.
    pub fn sanity_check(&self) -> bool {
        self.stage_times.total() <= self.elapsed
            && self.bytes_envelope >= self.bytes_encoded
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
