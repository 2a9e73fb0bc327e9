//! compression/codecs/mod.rs
//! Concrete codec implementations.

pub mod gzip;

pub use gzip::*;
