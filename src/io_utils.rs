//! CLI-facing error wrapping: a message plus an actionable hint.
use std::fmt;
use std::io;
use std::path::Path;

use crate::BenchError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a benchmark error into a CLI error with a hint.
pub fn bench_cli_error(input: &Path, err: BenchError) -> CliError {
    match err {
        BenchError::Io(io) => io_cli_error("reading input file", input, io),
        other => CliError {
            msg: format!("benchmark failed: {}", cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a benchmark error variant.
pub fn cli_hint(err: &BenchError) -> String {
    use BenchError::*;
    match err {
        FileNotFound(path) => format!(
            "input file '{}' not found. Pass the corpus path as the first argument.",
            path.display()
        ),
        Decompression(msg) => format!("{msg}. Input is not a zstd stream; use --plain for raw text."),
        UnsupportedLevel { level, min, max } => {
            format!("level {level} is not supported. Pick levels within {min}..={max}.")
        }
        EmptyInput(msg) => format!("{msg}. The corpus needs at least one complete line."),
        DictionaryBuild { have, min } => format!(
            "dictionary source is {have} bytes, below the {min}-byte minimum. Use longer records."
        ),
        InvalidRange { min, max } => {
            format!("--min-level {min} is above --max-level {max}.")
        }
        Compression { .. } | RoundTripMismatch(_) => format!("{err}. This is a codec bug."),
        Io(io) => format!("{io}"),
    }
}
