//! transform/mod.rs
//! Named, ordered transform steps between raw bytes and the payload line.
//!
//! A chain is written in encode order (`gz>b64`) and reverted back to front.

pub mod types;
pub mod pipeline;

pub use types::*;
