//! Codec abstraction used by the benchmark stages.
//!
//! The benchmark never implements compression itself. Everything goes through
//! the [`Codec`] trait so the sweep and the dictionary demo only see bytes in,
//! bytes out. [`ZstdCodec`] is the only implementation and wraps the `zstd`
//! crate's bulk API.

use std::io::Read;
use std::ops::RangeInclusive;

use crate::error::{BenchError, Result};

/// Lowest level the sweep accepts. Zstd maps 0 to its default level.
pub const MIN_LEVEL: i32 = 0;
/// Highest level the sweep accepts.
pub const MAX_LEVEL: i32 = 22;
/// Level used for the dictionary comparison.
pub const DEFAULT_DICT_LEVEL: i32 = 3;
/// libzstd ignores raw-content dictionaries shorter than this.
pub const ZSTD_MIN_DICT_SIZE: usize = 8;

/// Raw-content dictionary built from a sample record.
///
/// Opaque to callers; only a [`Codec`] knows how to use it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    bytes: Vec<u8>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

pub trait Codec {
    /// Short human-readable codec name.
    fn name(&self) -> &'static str;

    /// Levels this benchmark accepts for the codec.
    fn level_range(&self) -> RangeInclusive<i32>;

    /// Smallest dictionary source the codec will actually use.
    fn min_dictionary_size(&self) -> usize;

    fn compress(&self, input: &[u8], level: i32) -> Result<Vec<u8>>;

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    fn compress_with_dictionary(
        &self,
        input: &[u8],
        level: i32,
        dict: &Dictionary,
    ) -> Result<Vec<u8>>;

    fn decompress_with_dictionary(&self, input: &[u8], dict: &Dictionary) -> Result<Vec<u8>>;

    /// Fail with [`BenchError::UnsupportedLevel`] when `level` is outside
    /// [`Codec::level_range`].
    fn check_level(&self, level: i32) -> Result<()> {
        let range = self.level_range();
        if range.contains(&level) {
            Ok(())
        } else {
            Err(BenchError::UnsupportedLevel {
                level,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }

    /// Build a dictionary from `source`.
    ///
    /// # Errors
    /// - [`BenchError::DictionaryBuild`] if `source` is shorter than
    ///   [`Codec::min_dictionary_size`].
    fn build_dictionary(&self, source: &[u8]) -> Result<Dictionary> {
        let min = self.min_dictionary_size();
        if source.len() < min {
            return Err(BenchError::DictionaryBuild {
                have: source.len(),
                min,
            });
        }
        Ok(Dictionary {
            bytes: source.to_vec(),
        })
    }
}

/// Zstandard through the `zstd` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZstdCodec;

impl ZstdCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "Zstandard"
    }

    fn level_range(&self) -> RangeInclusive<i32> {
        let lib = zstd::compression_level_range();
        MIN_LEVEL.max(*lib.start())..=MAX_LEVEL.min(*lib.end())
    }

    fn min_dictionary_size(&self) -> usize {
        ZSTD_MIN_DICT_SIZE
    }

    fn compress(&self, input: &[u8], level: i32) -> Result<Vec<u8>> {
        self.check_level(level)?;
        let mut cctx = zstd::bulk::Compressor::new(level)
            .map_err(|e| BenchError::Compression { level, msg: e.to_string() })?;
        cctx.compress(input)
            .map_err(|e| BenchError::Compression { level, msg: e.to_string() })
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        zstd::stream::decode_all(input).map_err(|e| BenchError::Decompression(e.to_string()))
    }

    fn compress_with_dictionary(
        &self,
        input: &[u8],
        level: i32,
        dict: &Dictionary,
    ) -> Result<Vec<u8>> {
        self.check_level(level)?;
        let mut cctx = zstd::bulk::Compressor::with_dictionary(level, dict.as_bytes())
            .map_err(|e| BenchError::Compression { level, msg: e.to_string() })?;
        cctx.compress(input)
            .map_err(|e| BenchError::Compression { level, msg: e.to_string() })
    }

    fn decompress_with_dictionary(&self, input: &[u8], dict: &Dictionary) -> Result<Vec<u8>> {
        let mut decoder = zstd::stream::Decoder::with_dictionary(input, dict.as_bytes())
            .map_err(|e| BenchError::Decompression(e.to_string()))?;
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| BenchError::Decompression(e.to_string()))?;
        Ok(out)
    }
}
