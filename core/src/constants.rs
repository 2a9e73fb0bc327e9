//! Envelope literals and defaults shared by the encoder and decoder.

/// Header line for format version 1.
pub const HEADER_V1: &str = "EC v1";

/// Descriptor line emitted by every v1 encode.
/// The content type is fixed and does not reflect the input.
pub const DESCRIPTOR_V1: &str = "t=gz>b64;ct=json";

/// Separator between envelope lines.
pub const LINE_SEPARATOR: char = '\n';

/// Header, descriptor, payload.
pub const ENVELOPE_LINES: usize = 3;

/// Content type assumed when a descriptor omits `ct=`.
pub const DEFAULT_CONTENT_TYPE: &str = "json";

/// Default gzip level (matches `flate2::Compression::default()`).
pub const DEFAULT_LEVEL_GZIP: u32 = 6;

/// Descriptor grammar: `t=<chain>;ct=<content type>`.
pub mod descriptor_keys {
    pub const TRANSFORMS: &str = "t=";
    pub const CONTENT_TYPE: &str = "ct=";
    pub const PART_SEPARATOR: char = ';';
}

/// Transform step tokens as written in the descriptor.
pub mod step_names {
    pub const GZIP: &str = "gz";
    pub const BASE64: &str = "b64";
    pub const IDENTITY: &str = "none";
    pub const STEP_SEPARATOR: char = '>';
}
