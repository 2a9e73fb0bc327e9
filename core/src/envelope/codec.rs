//! envelope/codec.rs
//!
//! Encode raw bytes into envelope text and back.
//!
//! Decode validation order (fail fast):
//! 1. at least three lines after CRLF normalization
//! 2. exact header line
//! 3. base64 payload
//! 4. gzip stream
//!
//! The payload is reverted through the chain owned by the header's version.
//! The descriptor line is carried but not enforced here; see `inspect`.

use tracing::{debug, warn};

use crate::constants::{ENVELOPE_LINES, LINE_SEPARATOR};
use crate::envelope::types::{Decoded, EncodeOptions, Envelope};
use crate::headers::{FormatError, FormatVersion};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::EnvelopeError;

/// Encode with default options.
pub fn encode(raw: &[u8]) -> Result<String, EnvelopeError> {
    encode_with(raw, &EncodeOptions::default())
}

pub fn encode_with(raw: &[u8], opts: &EncodeOptions) -> Result<String, EnvelopeError> {
    encode_with_stats(raw, opts).map(|(text, _)| text)
}

pub fn encode_with_stats(
    raw: &[u8],
    opts: &EncodeOptions,
) -> Result<(String, TelemetrySnapshot), EnvelopeError> {
    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();

    let version = FormatVersion::LATEST;
    let wire = version.transforms().apply(raw, opts.level, &mut counters, &mut timer)?;

    // The version chain ends in base64, so the payload is single-line ASCII.
    let payload = String::from_utf8(wire)
        .map_err(|_| EnvelopeError::Content("payload is not single-line text".into()))?;
    debug_assert!(!payload.contains(LINE_SEPARATOR));

    let text = Envelope::new(version, payload).to_text();
    counters.set_envelope(text.len());
    timer.finish();

    debug!(version = %version, plain = raw.len(), envelope = text.len(), "envelope encoded");
    Ok((text, TelemetrySnapshot::from(&counters, &timer)))
}

/// Check line count and header, returning the raw lines.
/// Lines past the payload are ignored.
pub fn parse(text: &str) -> Result<Envelope, EnvelopeError> {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split(LINE_SEPARATOR).collect();

    if lines.len() < ENVELOPE_LINES {
        return Err(FormatError::too_few_lines(lines.len()).into());
    }
    let version = FormatVersion::from_header(lines[0])?;

    if lines.len() > ENVELOPE_LINES {
        debug!(extra = lines.len() - ENVELOPE_LINES, "ignoring lines after payload");
    }

    Ok(Envelope {
        version,
        descriptor: lines[1].to_string(),
        payload: lines[2].to_string(),
    })
}

pub fn decode(text: &str) -> Result<Vec<u8>, EnvelopeError> {
    decode_with_stats(text).map(|d| d.raw)
}

/// Decode and keep the parsed envelope alongside the recovered bytes.
pub fn decode_with_stats(text: &str) -> Result<Decoded, EnvelopeError> {
    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();
    counters.set_envelope(text.len());

    let envelope = timer.time(Stage::Validate, || parse(text))?;
    if envelope.descriptor != envelope.version.descriptor_line() {
        warn!(
            descriptor = %envelope.descriptor,
            version = %envelope.version,
            "descriptor differs from the version's chain; decoding with the version chain"
        );
    }

    let raw = envelope
        .version
        .transforms()
        .revert(envelope.payload.as_bytes(), &mut counters, &mut timer)?;
    timer.finish();

    debug!(version = %envelope.version, plain = raw.len(), "envelope decoded");
    Ok(Decoded {
        snapshot: TelemetrySnapshot::from(&counters, &timer),
        envelope,
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_descriptor_verbatim() {
        let env = parse("EC v1\nanything goes\nAAAA").unwrap();
        assert_eq!(env.descriptor, "anything goes");
        assert_eq!(env.payload, "AAAA");
    }

    #[test]
    fn parse_counts_lines_after_normalization() {
        let err = parse("EC v1\r\nt=gz>b64;ct=json").unwrap_err();
        assert!(matches!(
            err,
            EnvelopeError::Format(FormatError::ExpectedLines { have: 2, need: 3 })
        ));
    }

    #[test]
    fn text_round_trips_through_parse() {
        let text = encode(b"abc").unwrap();
        assert_eq!(parse(&text).unwrap().to_text(), text);
    }
}
