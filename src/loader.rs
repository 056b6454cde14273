//! Reads the benchmark corpus into memory.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::codec::Codec;
use crate::error::{BenchError, Result};

/// Decompressed corpus shared read-only by every benchmark stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BenchError::FileNotFound(path.to_path_buf()),
        _ => BenchError::Io(e),
    })
}

/// Read `path` and decompress it with `codec`.
///
/// # Errors
/// - [`BenchError::FileNotFound`] when `path` does not exist.
/// - [`BenchError::Decompression`] when the contents are not a valid stream.
pub fn load_payload<C: Codec + ?Sized>(path: &Path, codec: &C) -> Result<Payload> {
    let compressed = read_input(path)?;
    debug!(path = %path.display(), bytes = compressed.len(), "read compressed input");
    let bytes = codec.decompress(&compressed)?;
    info!(
        codec = codec.name(),
        compressed = compressed.len(),
        decompressed = bytes.len(),
        "loaded payload"
    );
    Ok(Payload::new(bytes))
}

/// Read `path` as the payload itself, without decompression.
pub fn load_plain(path: &Path) -> Result<Payload> {
    let bytes = read_input(path)?;
    info!(bytes = bytes.len(), "loaded plain payload");
    Ok(Payload::new(bytes))
}
