//! compression/registry.rs
//! Codec registry: resolves a codec to its backend and runs whole-buffer
//! deflate/inflate through it.
//!
//! - One backend slot per `CompressionCodec` variant; dispatch is an
//!   exhaustive match, so a new codec cannot be added without a slot.
//! - Backends are injected at construction (`RegistryBuilder`); unset slots
//!   get the stock backend.
//! - Immutable after construction and shared freely across threads.
use std::fmt;

use bytes::Bytes;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;

use crate::compression::codecs::{BrotliBackend, GzipBackend, IdentityBackend, LzoBackend, SnappyBackend};
use crate::compression::options::{CodecOptions, OptionsError};
use crate::compression::types::{CodecBackend, CompressionCodec, CompressionError, Direction};

pub struct CodecRegistry {
    uncompressed: Box<dyn CodecBackend>,
    snappy: Box<dyn CodecBackend>,
    gzip: Box<dyn CodecBackend>,
    lzo: Box<dyn CodecBackend>,
    brotli: Box<dyn CodecBackend>,
}

impl CodecRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Stock backends configured from `options`.
    ///
    /// # Errors
    /// - `OptionsError` when a parameter is outside the range its codec accepts.
    pub fn from_options(options: &CodecOptions) -> Result<Self, OptionsError> {
        if let Err(e) = options.validate() {
            warn!("rejecting codec options {:?}: {}", options, e);
            return Err(e);
        }
        Ok(Self::builder()
            .gzip(GzipBackend::new(options.gzip_level))
            .brotli(BrotliBackend::with_params(options.brotli))
            .build())
    }

    pub fn backend(&self, codec: CompressionCodec) -> &dyn CodecBackend {
        match codec {
            CompressionCodec::Uncompressed => self.uncompressed.as_ref(),
            CompressionCodec::Snappy       => self.snappy.as_ref(),
            CompressionCodec::Gzip         => self.gzip.as_ref(),
            CompressionCodec::Lzo          => self.lzo.as_ref(),
            CompressionCodec::Brotli       => self.brotli.as_ref(),
        }
    }

    /// Compress `input` with `codec`.
    ///
    /// # Errors
    /// - `CompressionError::CodecFailure` if the backend fails.
    pub fn deflate(&self, codec: CompressionCodec, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.run(codec, Direction::Deflate, input)
    }

    /// Decompress `input`, which must have been produced by `deflate` with the
    /// same codec (or be any valid stream for it).
    ///
    /// # Errors
    /// - `CompressionError::CodecFailure` on malformed or truncated input.
    pub fn inflate(&self, codec: CompressionCodec, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.run(codec, Direction::Inflate, input)
    }

    /// Like [`deflate`](Self::deflate) but keyed by canonical name.
    pub fn deflate_named(&self, name: &str, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.deflate(name.parse()?, input)
    }

    pub fn inflate_named(&self, name: &str, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.inflate(name.parse()?, input)
    }

    /// Like [`deflate`](Self::deflate) but keyed by wire id.
    pub fn deflate_id(&self, raw: u16, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.deflate(CompressionCodec::from_id(raw)?, input)
    }

    pub fn inflate_id(&self, raw: u16, input: &Bytes) -> Result<Bytes, CompressionError> {
        self.inflate(CompressionCodec::from_id(raw)?, input)
    }

    fn run(&self, codec: CompressionCodec, direction: Direction, input: &Bytes) -> Result<Bytes, CompressionError> {
        let backend = self.backend(codec);
        let result = match direction {
            Direction::Deflate => backend.compress(input),
            Direction::Inflate => backend.decompress(input),
        };

        match result {
            Ok(out) => {
                trace!("{} {} via {}: {} -> {} bytes", codec, direction, backend.name(), input.len(), out.len());
                Ok(out)
            }
            Err(source) => {
                debug!("{} {} via {} failed on {} bytes: {}", codec, direction, backend.name(), input.len(), source);
                Err(CompressionError::CodecFailure { codec, direction, source })
            }
        }
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for codec in CompressionCodec::ALL {
            map.entry(&codec.name(), &self.backend(codec).name());
        }
        map.finish()
    }
}

/// Collects backends for a [`CodecRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    uncompressed: Option<Box<dyn CodecBackend>>,
    snappy: Option<Box<dyn CodecBackend>>,
    gzip: Option<Box<dyn CodecBackend>>,
    lzo: Option<Box<dyn CodecBackend>>,
    brotli: Option<Box<dyn CodecBackend>>,
}

impl RegistryBuilder {
    pub fn uncompressed(mut self, backend: impl CodecBackend + 'static) -> Self {
        self.uncompressed = Some(Box::new(backend));
        self
    }

    pub fn snappy(mut self, backend: impl CodecBackend + 'static) -> Self {
        self.snappy = Some(Box::new(backend));
        self
    }

    pub fn gzip(mut self, backend: impl CodecBackend + 'static) -> Self {
        self.gzip = Some(Box::new(backend));
        self
    }

    pub fn lzo(mut self, backend: impl CodecBackend + 'static) -> Self {
        self.lzo = Some(Box::new(backend));
        self
    }

    pub fn brotli(mut self, backend: impl CodecBackend + 'static) -> Self {
        self.brotli = Some(Box::new(backend));
        self
    }

    pub fn build(self) -> CodecRegistry {
        CodecRegistry {
            uncompressed: self.uncompressed.unwrap_or_else(|| Box::new(IdentityBackend::new())),
            snappy: self.snappy.unwrap_or_else(|| Box::new(SnappyBackend::new())),
            gzip: self.gzip.unwrap_or_else(|| Box::new(GzipBackend::default())),
            lzo: self.lzo.unwrap_or_else(|| Box::new(LzoBackend::new())),
            brotli: self.brotli.unwrap_or_else(|| Box::new(BrotliBackend::new())),
        }
    }
}

static DEFAULT_REGISTRY: Lazy<CodecRegistry> = Lazy::new(|| {
    let registry = CodecRegistry::default();
    debug!("default codec registry initialised: {:?}", registry);
    registry
});

/// Process-wide registry with stock backends and fixed parameters.
pub fn default_registry() -> &'static CodecRegistry {
    &DEFAULT_REGISTRY
}

/// Deflate a buffer using the codec named `method`.
pub fn deflate(method: &str, input: &Bytes) -> Result<Bytes, CompressionError> {
    default_registry().deflate_named(method, input)
}

/// Inflate a buffer using the codec named `method`.
pub fn inflate(method: &str, input: &Bytes) -> Result<Bytes, CompressionError> {
    default_registry().inflate_named(method, input)
}
