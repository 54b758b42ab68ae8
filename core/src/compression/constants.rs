//! compression/constants.rs
//! Stable codec ids, canonical names and default backend parameters.

/// Stable codec ids (u16) used to tag compressed blocks on the wire.
/// Numbering follows the columnar format's codec table.
pub mod codec_ids {
    pub const UNCOMPRESSED: u16 = 0x0000;
    pub const SNAPPY: u16       = 0x0001;
    pub const GZIP: u16         = 0x0002;
    pub const LZO: u16          = 0x0003;
    pub const BROTLI: u16       = 0x0004;
}

/// Canonical, case-sensitive codec names.
pub mod codec_names {
    pub const UNCOMPRESSED: &str = "UNCOMPRESSED";
    pub const GZIP: &str         = "GZIP";
    pub const SNAPPY: &str       = "SNAPPY";
    pub const LZO: &str          = "LZO";
    pub const BROTLI: &str       = "BROTLI";
}

/// Gzip level used by the stock backend (zlib default).
pub const DEFAULT_GZIP_LEVEL: u32 = 6;
pub const MAX_GZIP_LEVEL: u32 = 9;

/// Brotli parameters applied on every compress call by the stock backend.
pub const DEFAULT_BROTLI_QUALITY: u32 = 8;
pub const DEFAULT_BROTLI_LGWIN: u32 = 22;

pub const MAX_BROTLI_QUALITY: u32 = 11;
pub const MIN_BROTLI_LGWIN: u32 = 10;
pub const MAX_BROTLI_LGWIN: u32 = 24;

/// LZO1X end-of-stream marker; on its own it encodes an empty block.
pub const LZO_END_OF_STREAM: [u8; 3] = [0x11, 0x00, 0x00];
