//! codecs/gzip.rs
//! GZIP-framed deflate via flate2.

use std::io::{Read, Write};

use bytes::Bytes;
use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::compression::constants::DEFAULT_GZIP_LEVEL;
use crate::compression::types::{BackendError, CodecBackend};

#[derive(Debug, Clone, Copy)]
pub struct GzipBackend {
    level: Compression,
}

impl Default for GzipBackend {
    fn default() -> Self {
        Self::new(DEFAULT_GZIP_LEVEL)
    }
}

impl GzipBackend {
    /// Levels above 9 fall back to the zlib default.
    ///
    /// Direct callers get this clamp rather than an error; only
    /// `CodecRegistry::from_options` rejects out-of-range levels.
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }
}

impl CodecBackend for GzipBackend {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        // Each call is one complete gzip member
        let mut enc = GzEncoder::new(Vec::with_capacity(input.len() / 2 + 32), self.level);
        enc.write_all(input)?;
        Ok(Bytes::from(enc.finish()?))
    }

    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        // Concatenated members decode as one stream
        let mut dec = MultiGzDecoder::new(input.as_ref());
        let mut out = Vec::new();
        dec.read_to_end(&mut out)?;
        Ok(Bytes::from(out))
    }
}
