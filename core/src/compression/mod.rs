//! compression/mod.rs
//! Whole-buffer block compression keyed by codec.
//!
//! Notes:
//! - The codec set is closed; names and wire ids resolve to `CompressionCodec`.
//! - The registry owns one backend per codec and is read-only once built.
//! - Failures from third-party codecs surface as `CodecFailure` with the cause attached.

pub mod constants;
pub mod types;
pub mod options;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use options::*;
pub use registry::*;
