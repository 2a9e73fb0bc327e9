//! envelope/mod.rs
//! The three-line EC text envelope.
//!
//! ```text
//! EC v1
//! t=gz>b64;ct=json
//! <base64 of gzip-compressed bytes>
//! ```

pub mod types;
pub mod codec;
pub mod inspect;

pub use types::*;
pub use codec::*;
pub use inspect::*;
