//! codecs/snappy.rs
//! Snappy raw block format (no stream framing) via snap.

use bytes::Bytes;
use snap::raw::{Decoder, Encoder};

use crate::compression::types::{BackendError, CodecBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct SnappyBackend;

impl SnappyBackend {
    pub fn new() -> Self { Self }
}

impl CodecBackend for SnappyBackend {
    fn name(&self) -> &'static str {
        "snappy"
    }

    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        let mut enc = Encoder::new();
        Ok(Bytes::from(enc.compress_vec(input)?))
    }

    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        let mut dec = Decoder::new();
        Ok(Bytes::from(dec.decompress_vec(input)?))
    }
}
