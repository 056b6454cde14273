use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    /// Input path does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input is not a valid compressed stream.
    #[error("decompression error: {0}")]
    Decompression(String),

    /// Level outside the codec's accepted range.
    #[error("unsupported compression level {level} (supported: {min}..={max})")]
    UnsupportedLevel { level: i32, min: i32, max: i32 },

    /// Degenerate input: empty payload or empty sample record.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Dictionary source below the codec's minimum dictionary size.
    #[error("cannot build dictionary from {have} bytes (minimum {min})")]
    DictionaryBuild { have: usize, min: usize },

    /// Level range with its bounds swapped.
    #[error("invalid level range {min}..={max}")]
    InvalidRange { min: i32, max: i32 },

    /// Codec failed while compressing.
    #[error("compression error at level {level}: {msg}")]
    Compression { level: i32, msg: String },

    /// Decompressed output differs from the original payload.
    #[error("round-trip mismatch at level {0}")]
    RoundTripMismatch(i32),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
