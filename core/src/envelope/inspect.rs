//! envelope/inspect.rs
//!
//! Strict validation driven by the descriptor rather than the version:
//! `t=` must be present and known, the payload is reverted through that
//! chain, and `ct=json` content must parse as JSON.

use std::fmt;
use serde::Serialize;

use crate::envelope::codec::parse;
use crate::telemetry::{TelemetryCounters, TelemetryTimer};
use crate::types::EnvelopeError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub header: &'static str,
    pub transforms: String,
    pub content_type: String,
    pub payload_len: usize,
    pub decoded_len: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Valid {} · t={}; ct={}", self.header, self.transforms, self.content_type)
    }
}

pub fn inspect(text: &str) -> Result<Report, EnvelopeError> {
    let envelope = parse(text)?;
    let descriptor = envelope.descriptor()?;

    let decoded = descriptor.transforms.revert(
        envelope.payload.as_bytes(),
        &mut TelemetryCounters::default(),
        &mut TelemetryTimer::new(),
    )?;

    if descriptor.is_json() {
        check_json(&decoded)?;
    }

    Ok(Report {
        header: envelope.version.header(),
        transforms: descriptor.transforms.to_string(),
        content_type: descriptor.content_type,
        payload_len: envelope.payload.len(),
        decoded_len: decoded.len(),
    })
}

fn check_json(bytes: &[u8]) -> Result<serde_json::Value, EnvelopeError> {
    serde_json::from_slice(bytes)
        .map_err(|e| EnvelopeError::Content(format!("payload tagged ct=json is not JSON: {}", e)))
}

/// Pretty-print JSON content, failing with a content error when it is not JSON.
pub fn pretty_json(bytes: &[u8]) -> Result<String, EnvelopeError> {
    let value = check_json(bytes)?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| EnvelopeError::Content(e.to_string()))
}
