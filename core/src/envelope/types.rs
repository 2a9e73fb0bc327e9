//! envelope/types.rs

use crate::constants::LINE_SEPARATOR;
use crate::constants::DEFAULT_LEVEL_GZIP;
use crate::headers::{decode_descriptor, Descriptor, DescriptorError, FormatVersion};
use crate::telemetry::TelemetrySnapshot;

/// Parsed envelope lines. The descriptor is kept verbatim and only
/// interpreted on request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub version: FormatVersion,
    pub descriptor: String,
    pub payload: String,
}

impl Envelope {
    /// Envelope carrying the version's literal descriptor.
    pub fn new(version: FormatVersion, payload: String) -> Self {
        Self {
            version,
            descriptor: version.descriptor_line().to_string(),
            payload,
        }
    }

    /// Strictly parse the descriptor line.
    pub fn descriptor(&self) -> Result<Descriptor, DescriptorError> {
        decode_descriptor(&self.descriptor)
    }

    /// Header, descriptor and payload joined by `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(
            self.version.header().len() + self.descriptor.len() + self.payload.len() + 2,
        );
        out.push_str(self.version.header());
        out.push(LINE_SEPARATOR);
        out.push_str(&self.descriptor);
        out.push(LINE_SEPARATOR);
        out.push_str(&self.payload);
        out
    }
}

/// Encoder settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// gzip level 0..=9; anything else means the default level.
    pub level: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { level: DEFAULT_LEVEL_GZIP }
    }
}

/// Result of a decode with statistics: the parsed lines, the recovered bytes
/// and the telemetry of the run.
#[derive(Clone, Debug)]
pub struct Decoded {
    pub envelope: Envelope,
    pub raw: Vec<u8>,
    pub snapshot: TelemetrySnapshot,
}
