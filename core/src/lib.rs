//! compression-core
//!
//! Codec registry for block-compressed columnar data: deflate and inflate
//! whole in-memory buffers with UNCOMPRESSED, GZIP, SNAPPY, LZO or BROTLI.

#![forbid(unsafe_code)]

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        default_registry, deflate, inflate, CodecBackend, CodecOptions, CodecRegistry,
        CompressionCodec, CompressionError,
    };
}
