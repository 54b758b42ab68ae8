//! codecs/identity.rs
//! Pass-through codec for UNCOMPRESSED blocks.

use bytes::Bytes;

use crate::compression::types::{BackendError, CodecBackend};

/// Returns the input buffer itself; `Bytes` clones share the allocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityBackend;

impl IdentityBackend {
    pub fn new() -> Self { Self }
}

impl CodecBackend for IdentityBackend {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        Ok(input.clone())
    }

    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError> {
        Ok(input.clone())
    }
}
