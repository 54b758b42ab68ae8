//! compression/types.rs
//! Codec identifiers, the backend trait and the error surface of the registry.
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::{codec_ids, codec_names};

/// Closed set of block codecs. Wire-stable `u16` discriminants.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    Uncompressed = codec_ids::UNCOMPRESSED,
    Snappy       = codec_ids::SNAPPY,
    Gzip         = codec_ids::GZIP,
    Lzo          = codec_ids::LZO,
    Brotli       = codec_ids::BROTLI,
}

impl CompressionCodec {
    /// Every recognized codec, in wire-id order.
    pub const ALL: [CompressionCodec; 5] = [
        CompressionCodec::Uncompressed,
        CompressionCodec::Snappy,
        CompressionCodec::Gzip,
        CompressionCodec::Lzo,
        CompressionCodec::Brotli,
    ];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Uncompressed => codec_names::UNCOMPRESSED,
            CompressionCodec::Snappy       => codec_names::SNAPPY,
            CompressionCodec::Gzip         => codec_names::GZIP,
            CompressionCodec::Lzo          => codec_names::LZO,
            CompressionCodec::Brotli       => codec_names::BROTLI,
        }
    }

    pub fn id(self) -> u16 {
        self as u16
    }

    /// Resolve a wire id.
    pub fn from_id(raw: u16) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw).map_err(|_| CompressionError::UnknownCodec {
            codec: enum_name_or_hex::<CompressionCodec>(raw),
        })
    }

    pub fn verify(raw: u16) -> Result<(), CompressionError> {
        Self::from_id(raw).map(|_| ())
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = CompressionError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionCodec::ALL
            .into_iter()
            .find(|codec| codec.name() == s)
            .ok_or_else(|| CompressionError::UnknownCodec { codec: s.to_owned() })
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Which way a buffer was being transformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Deflate,
    Inflate,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Deflate => f.write_str("deflate"),
            Direction::Inflate => f.write_str("inflate"),
        }
    }
}

/// Error raised by a backend; wrapped into [`CompressionError::CodecFailure`].
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("invalid compression method: {codec}")]
    UnknownCodec { codec: String },

    #[error("{codec} {direction} failed: {source}")]
    CodecFailure {
        codec: CompressionCodec,
        direction: Direction,
        #[source]
        source: BackendError,
    },
}

impl CompressionError {
    pub fn is_unknown_codec(&self) -> bool {
        matches!(self, CompressionError::UnknownCodec { .. })
    }

    pub fn is_codec_failure(&self) -> bool {
        matches!(self, CompressionError::CodecFailure { .. })
    }
}

/// One codec's compress/decompress pair.
///
/// Implementations are shared across threads by the registry, so any
/// encoder or decoder state must be created inside each call.
pub trait CodecBackend: Send + Sync {
    /// Short backend label for logs.
    fn name(&self) -> &'static str;

    /// Compress a whole buffer.
    fn compress(&self, input: &Bytes) -> Result<Bytes, BackendError>;

    /// Decompress a whole buffer produced by `compress`.
    fn decompress(&self, input: &Bytes) -> Result<Bytes, BackendError>;
}
