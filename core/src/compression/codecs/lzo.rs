//! codecs/lzo.rs
//! LZO1X via lzokay-native.
//!
//! LZO is behind the `lzo` feature. Without it the slot still exists but
//! every call fails, so the registry keeps one entry per codec.

use bytes::Bytes;

#[cfg(feature = "lzo")]
use crate::compression::constants::LZO_END_OF_STREAM;
use crate::compression::types::{BackendError, CodecBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct LzoBackend;

impl LzoBackend {
    pub fn new() -> Self { Self }
}

#[cfg(feature = "lzo")]
fn lzo_error<E: std::fmt::Debug>(e: E) -> BackendError {
    // lzokay's error type only promises Debug
    format!("lzo: {:?}", e).into()
}

#[cfg(feature = "lzo")]
impl CodecBackend for LzoBackend {
    fn name(&self) -> &'static str {
        "lzo"
    }

    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        // lzokay emits nothing for an empty block; write the bare terminator
        if input.is_empty() {
            return Ok(Bytes::from_static(&LZO_END_OF_STREAM));
        }
        let out = lzokay_native::compress(input).map_err(lzo_error)?;
        Ok(Bytes::from(out))
    }

    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        if input.is_empty() || input[..] == LZO_END_OF_STREAM {
            return Ok(Bytes::new());
        }
        // The block carries no uncompressed size, let the decoder grow.
        let out = lzokay_native::decompress_all(input, None).map_err(lzo_error)?;
        Ok(Bytes::from(out))
    }
}

#[cfg(not(feature = "lzo"))]
impl CodecBackend for LzoBackend {
    fn name(&self) -> &'static str {
        "lzo (disabled)"
    }

    fn compress(&self, _input: &Bytes) -> Result<Bytes, BackendError> {
        Err("lzo support not compiled in".into())
    }

    fn decompress(&self, _input: &Bytes) -> Result<Bytes, BackendError> {
        Err("lzo support not compiled in".into())
    }
}

#[cfg(all(test, feature = "lzo"))]
mod tests {
    use super::*;

    #[test]
    fn repetitive_input_shrinks() {
        let input = Bytes::from(vec![b'z'; 4096]);
        let backend = LzoBackend::new();
        let packed = backend.compress(&input).unwrap();
        assert!(packed.len() < input.len());
        assert_eq!(backend.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn empty_block_is_bare_terminator() {
        let backend = LzoBackend::new();
        let packed = backend.compress(&Bytes::new()).unwrap();
        assert_eq!(packed[..], LZO_END_OF_STREAM);
        assert!(backend.decompress(&packed).unwrap().is_empty());
        assert!(backend.decompress(&Bytes::new()).unwrap().is_empty());
    }

    #[test]
    fn single_byte_roundtrip() {
        let backend = LzoBackend::new();
        let input = Bytes::from_static(b"x");
        let packed = backend.compress(&input).unwrap();
        assert_eq!(backend.decompress(&packed).unwrap(), input);
    }
}
