use std::path::PathBuf;

use crate::codec::{DEFAULT_DICT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use crate::error::{BenchError, Result};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "compression_test_100MB.txt.zst";

/// Runtime configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the corpus to load.
    pub input: PathBuf,
    /// Treat the input as the payload itself instead of a zstd frame.
    pub plain: bool,
    /// First level of the sweep (inclusive).
    pub min_level: i32,
    /// Last level of the sweep (inclusive).
    pub max_level: i32,
    /// Level used for both sides of the dictionary comparison.
    pub dict_level: i32,
    /// Decompress every output and compare it against the input.
    pub verify: bool,
    /// Draw a progress bar on stderr during the sweep.
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            plain: false,
            min_level: MIN_LEVEL,
            max_level: MAX_LEVEL,
            dict_level: DEFAULT_DICT_LEVEL,
            verify: false,
            progress: false,
        }
    }
}

impl Config {
    /// Reject a range whose bounds are swapped. Per-level support is checked
    /// by the codec when the sweep starts.
    pub fn validate(&self) -> Result<()> {
        if self.min_level > self.max_level {
            return Err(BenchError::InvalidRange {
                min: self.min_level,
                max: self.max_level,
            });
        }
        Ok(())
    }
}
