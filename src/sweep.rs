//! Compress the whole payload once per level and time each run.

use std::ops::RangeInclusive;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::codec::Codec;
use crate::error::{BenchError, Result};
use crate::loader::Payload;
use crate::report::Reporter;
use crate::stats::{LevelResult, SweepSummary};

/// Options for [`run_sweep`].
#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub levels: RangeInclusive<i32>,
    pub verify: bool,
    pub progress: bool,
}

/// Check every level up front so a bad range fails before any work or output.
fn check_levels<C: Codec + ?Sized>(codec: &C, levels: &RangeInclusive<i32>) -> Result<()> {
    if levels.start() > levels.end() {
        return Err(BenchError::InvalidRange {
            min: *levels.start(),
            max: *levels.end(),
        });
    }
    for level in levels.clone() {
        codec.check_level(level)?;
    }
    Ok(())
}

fn progress_bar(enabled: bool, len: u64) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} levels {msg}") {
        pb.set_style(style);
    }
    pb
}

/// Compress `payload` at one level. Verification happens outside the timed
/// section.
pub fn bench_level<C: Codec + ?Sized>(
    codec: &C,
    payload: &Payload,
    level: i32,
    verify: bool,
) -> Result<LevelResult> {
    let input = payload.as_bytes();
    let start = Instant::now();
    let compressed = codec.compress(input, level)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if verify {
        let restored = codec.decompress(&compressed)?;
        if restored != input {
            return Err(BenchError::RoundTripMismatch(level));
        }
    }

    Ok(LevelResult::new(
        level,
        input.len(),
        compressed.len(),
        elapsed_ms,
        verify,
    ))
}

/// Run the level sweep, reporting one record per level in ascending order.
///
/// # Errors
/// - [`BenchError::EmptyInput`] for an empty payload.
/// - [`BenchError::UnsupportedLevel`] naming the first level the codec
///   rejects; nothing is reported in that case.
/// - Any codec or reporter error aborts the sweep.
pub fn run_sweep<C: Codec + ?Sized>(
    codec: &C,
    payload: &Payload,
    opts: &SweepOptions,
    reporter: &mut dyn Reporter,
) -> Result<SweepSummary> {
    if payload.is_empty() {
        return Err(BenchError::EmptyInput("payload has no bytes to compress".into()));
    }
    check_levels(codec, &opts.levels)?;

    info!(
        codec = codec.name(),
        min = *opts.levels.start(),
        max = *opts.levels.end(),
        bytes = payload.len(),
        "starting level sweep"
    );
    reporter.sweep_started(codec.name(), &opts.levels)?;

    let count = (opts.levels.end() - opts.levels.start() + 1) as u64;
    let pb = progress_bar(opts.progress, count);
    let mut summary = SweepSummary::new();

    for level in opts.levels.clone() {
        pb.set_message(format!("level {level}"));
        let result = bench_level(codec, payload, level, opts.verify)?;
        debug!(
            level,
            compressed = result.compressed_size,
            elapsed_ms = result.elapsed_ms,
            "level done"
        );
        summary.record(&result);
        reporter.level(&result)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    summary.report();
    Ok(summary)
}
