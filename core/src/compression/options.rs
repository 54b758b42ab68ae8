//! compression/options.rs
//! Tunable parameters for the stock backends.
//!
//! Defaults reproduce the fixed parameters every writer of the format uses
//! (gzip level 6, brotli generic/q8/lgwin22). Hosts that need other values
//! build a registry from explicit options; the default registry never changes.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrotliMode {
    #[default]
    Generic,
    Text,
    Font,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrotliParams {
    pub mode: BrotliMode,
    pub quality: u32,
    pub lgwin: u32,
}

impl Default for BrotliParams {
    fn default() -> Self {
        Self {
            mode: BrotliMode::Generic,
            quality: DEFAULT_BROTLI_QUALITY,
            lgwin: DEFAULT_BROTLI_LGWIN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub gzip_level: u32,
    pub brotli: BrotliParams,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            gzip_level: DEFAULT_GZIP_LEVEL,
            brotli: BrotliParams::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("gzip level {level} out of range 0..={}", MAX_GZIP_LEVEL)]
    GzipLevel { level: u32 },
    #[error("brotli quality {quality} out of range 0..={}", MAX_BROTLI_QUALITY)]
    BrotliQuality { quality: u32 },
    #[error("brotli window {lgwin} out of range {}..={}", MIN_BROTLI_LGWIN, MAX_BROTLI_LGWIN)]
    BrotliWindow { lgwin: u32 },
}

impl BrotliParams {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.quality > MAX_BROTLI_QUALITY {
            return Err(OptionsError::BrotliQuality { quality: self.quality });
        }
        if !(MIN_BROTLI_LGWIN..=MAX_BROTLI_LGWIN).contains(&self.lgwin) {
            return Err(OptionsError::BrotliWindow { lgwin: self.lgwin });
        }
        Ok(())
    }
}

impl CodecOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.gzip_level > MAX_GZIP_LEVEL {
            return Err(OptionsError::GzipLevel { level: self.gzip_level });
        }
        self.brotli.validate()
    }
}
