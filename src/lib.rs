//! Zstandard level and dictionary benchmark.
//!
//! Loads a compressed corpus, sweeps compression levels over the whole
//! payload, then compares plain and dictionary compression of one short
//! record. Everything runs sequentially on the calling thread.

pub mod codec;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod io_utils;
pub mod loader;
pub mod report;
pub mod stats;
pub mod sweep;

pub use codec::{Codec, Dictionary, ZstdCodec, DEFAULT_DICT_LEVEL, MAX_LEVEL, MIN_LEVEL};
pub use config::Config;
pub use dictionary::{compare_records, select_records, DictionaryDemo, SampleRecords};
pub use error::{BenchError, Result};
pub use loader::{load_payload, load_plain, Payload};
pub use report::{Reporter, TextReporter};
pub use stats::{ratio, DictionaryComparison, DictionaryResult, LevelResult, SweepSummary};
pub use sweep::{bench_level, run_sweep, SweepOptions};

/// What a full run produced, besides what went to the reporter.
pub struct RunOutcome {
    pub summary: SweepSummary,
    pub dictionary: DictionaryComparison,
}

/// Load the input named by `config` and run both stages against it.
///
/// Nothing is retried; the first error ends the run.
pub fn run<C: Codec + ?Sized>(
    config: &Config,
    codec: &C,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome> {
    config.validate()?;
    let payload = if config.plain {
        load_plain(&config.input)?
    } else {
        load_payload(&config.input, codec)?
    };
    run_on_payload(config, codec, &payload, reporter)
}

/// Run both stages on an already loaded payload.
pub fn run_on_payload<C: Codec + ?Sized>(
    config: &Config,
    codec: &C,
    payload: &Payload,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome> {
    config.validate()?;

    // Fail on a degenerate dictionary setup before the sweep prints anything.
    let demo = DictionaryDemo::prepare(codec, payload, config.dict_level)?;

    let opts = SweepOptions {
        levels: config.min_level..=config.max_level,
        verify: config.verify,
        progress: config.progress,
    };
    let summary = run_sweep(codec, payload, &opts, reporter)?;
    let dictionary = demo.run(codec, config.verify)?;
    reporter.dictionary(&dictionary)?;
    reporter.finish()?;
    Ok(RunOutcome {
        summary,
        dictionary,
    })
}
