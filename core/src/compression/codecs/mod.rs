//! compression/codecs/mod.rs
//! Stock backends, one per codec. Each wraps a third-party implementation
//! and keeps no encoder/decoder state between calls.

pub mod brotli;
pub mod gzip;
pub mod identity;
pub mod lzo;
pub mod snappy;

pub use self::brotli::BrotliBackend;
pub use self::gzip::GzipBackend;
pub use self::identity::IdentityBackend;
pub use self::lzo::LzoBackend;
pub use self::snappy::SnappyBackend;
