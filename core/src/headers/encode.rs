//! headers/encode.rs
//! Descriptor rendering.

use crate::constants::descriptor_keys::{CONTENT_TYPE, PART_SEPARATOR, TRANSFORMS};
use crate::headers::types::Descriptor;

/// Render a descriptor as `t=<chain>;ct=<content type>`.
pub fn encode_descriptor(d: &Descriptor) -> String {
    format!("{}{}{}{}{}", TRANSFORMS, d.transforms, PART_SEPARATOR, CONTENT_TYPE, d.content_type)
}
