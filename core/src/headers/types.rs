//! headers/types.rs
//! Format versions, the structured descriptor, and their errors.

use std::fmt;
use thiserror::Error;

use crate::constants::{DEFAULT_CONTENT_TYPE, DESCRIPTOR_V1, ENVELOPE_LINES, HEADER_V1};
use crate::transform::{TransformChain, TransformStep};

/// Known envelope versions, keyed by their header line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatVersion {
    V1,
}

impl FormatVersion {
    /// Version written by the encoder.
    pub const LATEST: FormatVersion = FormatVersion::V1;

    pub fn header(&self) -> &'static str {
        match self {
            FormatVersion::V1 => HEADER_V1,
        }
    }

    /// Resolve a header line to a version. The match is exact.
    pub fn from_header(line: &str) -> Result<Self, FormatError> {
        match line {
            HEADER_V1 => Ok(FormatVersion::V1),
            other => Err(FormatError::InvalidHeader {
                have: other.to_string(),
                need: HEADER_V1,
            }),
        }
    }

    /// Transform chain this version applies on encode and reverts on decode.
    pub fn transforms(&self) -> TransformChain {
        match self {
            FormatVersion::V1 => TransformChain::new(vec![TransformStep::Gzip, TransformStep::Base64]),
        }
    }

    /// Literal descriptor line written by this version.
    pub fn descriptor_line(&self) -> &'static str {
        match self {
            FormatVersion::V1 => DESCRIPTOR_V1,
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            transforms: self.transforms(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Structured view of the descriptor line (`t=<chain>;ct=<content type>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub transforms: TransformChain,
    pub content_type: String,
}

impl Descriptor {
    pub fn is_json(&self) -> bool {
        self.content_type == "json"
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        FormatVersion::LATEST.descriptor()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::headers::encode_descriptor(self))
    }
}

/// Structural envelope errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {need} lines, got {have}")]
    ExpectedLines { have: usize, need: usize },

    #[error("invalid header: expected {need:?}, got {have:?}")]
    InvalidHeader { have: String, need: &'static str },
}

impl FormatError {
    pub fn too_few_lines(have: usize) -> Self {
        FormatError::ExpectedLines { have, need: ENVELOPE_LINES }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("transform chain (t=) missing from descriptor {line:?}")]
    MissingTransforms { line: String },

    #[error("unknown transform step: {step:?}")]
    UnknownStep { step: String },
}
