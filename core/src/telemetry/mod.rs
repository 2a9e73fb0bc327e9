//! telemetry/mod.rs
//! Byte counters, stage timers and immutable snapshots for one encode or decode.
//!
//! Notes:
//! - Counters and timers are filled while the transform chain runs.
//! - A snapshot is taken once the operation finishes and is serde-serializable.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
