//! headers/decode.rs
//!
//! Descriptor parsing.
//!
//! - Parts are `;`-separated `key=value` pairs, whitespace-trimmed.
//! - `t=` is required; `ct=` defaults to `json`.
//! - Unknown keys are skipped so later versions can add parts.

use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::constants::descriptor_keys::{CONTENT_TYPE, PART_SEPARATOR, TRANSFORMS};
use crate::headers::types::{Descriptor, DescriptorError};
use crate::transform::TransformChain;

pub fn decode_descriptor(line: &str) -> Result<Descriptor, DescriptorError> {
    let mut transforms = None;
    let mut content_type = DEFAULT_CONTENT_TYPE.to_string();

    for part in line.split(PART_SEPARATOR).map(str::trim) {
        if let Some(chain) = part.strip_prefix(TRANSFORMS) {
            transforms = Some(TransformChain::parse(chain)?);
        } else if let Some(ct) = part.strip_prefix(CONTENT_TYPE) {
            content_type = ct.to_string();
        }
    }

    let transforms = transforms.ok_or_else(|| DescriptorError::MissingTransforms {
        line: line.to_string(),
    })?;

    Ok(Descriptor { transforms, content_type })
}
