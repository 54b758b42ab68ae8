//! codecs/brotli.rs
//! Brotli via the brotli crate, with parameters pinned at construction.

use bytes::Bytes;
use ::brotli::enc::backward_references::BrotliEncoderMode;
use ::brotli::enc::BrotliEncoderParams;

use crate::compression::options::{BrotliMode, BrotliParams};
use crate::compression::types::{BackendError, CodecBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrotliBackend {
    params: BrotliParams,
}

impl BrotliBackend {
    /// Stock parameters: generic mode, quality 8, 2^22 window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller is expected to have validated `params`.
    pub fn with_params(params: BrotliParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> BrotliParams {
        self.params
    }

    fn encoder_params(&self) -> BrotliEncoderParams {
        let mut p = BrotliEncoderParams::default();
        p.mode = match self.params.mode {
            BrotliMode::Generic => BrotliEncoderMode::BROTLI_MODE_GENERIC,
            BrotliMode::Text    => BrotliEncoderMode::BROTLI_MODE_TEXT,
            BrotliMode::Font    => BrotliEncoderMode::BROTLI_MODE_FONT,
        };
        p.quality = self.params.quality as i32;
        p.lgwin = self.params.lgwin as i32;
        p
    }
}

impl CodecBackend for BrotliBackend {
    fn name(&self) -> &'static str {
        "brotli"
    }

    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        let mut reader: &[u8] = input.as_ref();
        let mut out = Vec::new();
        ::brotli::BrotliCompress(&mut reader, &mut out, &self.encoder_params())?;
        Ok(Bytes::from(out))
    }

    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        let mut reader: &[u8] = input.as_ref();
        let mut out = Vec::new();
        ::brotli::BrotliDecompress(&mut reader, &mut out)?;
        Ok(Bytes::from(out))
    }
}
