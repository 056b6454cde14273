//! Result records produced by the benchmark stages.
//!
//! Records are plain data. The stages hand them to a
//! [`Reporter`](crate::report::Reporter) as soon as they exist and keep
//! nothing beyond the running [`SweepSummary`].

use tracing::info;

/// Compressed size as a percentage of the uncompressed size.
///
/// Returns 0.0 for an empty input rather than NaN.
pub fn ratio(compressed: usize, uncompressed: usize) -> f64 {
    if uncompressed == 0 {
        return 0.0;
    }
    compressed as f64 * 100.0 / uncompressed as f64
}

/// Outcome of compressing the full payload at one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelResult {
    pub level: i32,
    pub uncompressed_size: usize,
    pub compressed_size: usize,
    /// Percent, see [`ratio`].
    pub ratio: f64,
    pub elapsed_ms: f64,
    /// Whether the output was decompressed and compared to the input.
    pub verified: bool,
}

impl LevelResult {
    pub fn new(
        level: i32,
        uncompressed_size: usize,
        compressed_size: usize,
        elapsed_ms: f64,
        verified: bool,
    ) -> Self {
        Self {
            level,
            uncompressed_size,
            compressed_size,
            ratio: ratio(compressed_size, uncompressed_size),
            elapsed_ms,
            verified,
        }
    }
}

/// One side of the dictionary comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryResult {
    pub label: &'static str,
    pub uncompressed_size: usize,
    pub compressed_size: usize,
    pub ratio: f64,
}

impl DictionaryResult {
    pub fn new(label: &'static str, uncompressed_size: usize, compressed_size: usize) -> Self {
        Self {
            label,
            uncompressed_size,
            compressed_size,
            ratio: ratio(compressed_size, uncompressed_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryComparison {
    pub level: i32,
    /// Length of the record the dictionary was built from.
    pub dictionary_size: usize,
    pub without_dictionary: DictionaryResult,
    pub with_dictionary: DictionaryResult,
}

impl DictionaryComparison {
    /// Bytes saved by the dictionary. Negative when it made things worse.
    pub fn saved_bytes(&self) -> i64 {
        self.without_dictionary.compressed_size as i64 - self.with_dictionary.compressed_size as i64
    }
}

/// Running totals over a sweep, logged once at the end.
#[derive(Debug)]
pub struct SweepSummary {
    levels: usize,
    total_ms: f64,
    best: Option<(i32, f64)>,
    fastest: Option<(i32, f64)>,
}

impl SweepSummary {
    pub fn new() -> Self {
        Self {
            levels: 0,
            total_ms: 0.0,
            best: None,
            fastest: None,
        }
    }

    pub fn record(&mut self, result: &LevelResult) {
        self.levels += 1;
        self.total_ms += result.elapsed_ms;
        if self.best.map_or(true, |(_, r)| result.ratio < r) {
            self.best = Some((result.level, result.ratio));
        }
        if self.fastest.map_or(true, |(_, t)| result.elapsed_ms < t) {
            self.fastest = Some((result.level, result.elapsed_ms));
        }
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Level with the lowest ratio. Ties keep the lower level.
    pub fn best_level(&self) -> Option<i32> {
        self.best.map(|(level, _)| level)
    }

    pub fn fastest_level(&self) -> Option<i32> {
        self.fastest.map(|(level, _)| level)
    }

    pub fn report(&self) {
        info!(
            levels = self.levels,
            total_ms = self.total_ms,
            best_level = ?self.best_level(),
            fastest_level = ?self.fastest_level(),
            "sweep complete"
        );
    }
}

impl Default for SweepSummary {
    fn default() -> Self {
        Self::new()
    }
}
