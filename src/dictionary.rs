//! Plain vs dictionary compression of a single short record.
//!
//! Small inputs compress poorly on their own because the compressor has no
//! history to match against. Seeding it with a structurally similar record
//! fixes that. This stage measures both sides on one record of the payload.

use tracing::{debug, info};

use crate::codec::{Codec, Dictionary};
use crate::error::{BenchError, Result};
use crate::loader::Payload;
use crate::stats::{DictionaryComparison, DictionaryResult};

/// The two lines used by the demo, borrowed from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRecords<'a> {
    /// First line; the dictionary is built from it.
    pub dictionary_source: &'a [u8],
    /// Second-to-last element of the newline split; this one gets compressed.
    pub sample: &'a [u8],
}

/// Pick the dictionary source and the sample from `payload`.
///
/// The last element of the split is skipped: the corpus may end in a
/// truncated record, and a well-formed file ends in `\n` so the last element
/// is empty anyway.
///
/// # Errors
/// - [`BenchError::EmptyInput`] if the split has fewer than two elements or
///   either selected line is empty.
pub fn select_records(payload: &[u8]) -> Result<SampleRecords<'_>> {
    let is_newline = |b: &u8| *b == b'\n';
    let dictionary_source = payload.split(is_newline).next().unwrap_or_default();

    let mut tail = payload.rsplit(is_newline);
    tail.next();
    let sample = tail.next().ok_or_else(|| {
        BenchError::EmptyInput("payload has no complete line before the trailing fragment".into())
    })?;

    if dictionary_source.is_empty() {
        return Err(BenchError::EmptyInput("first line is empty".into()));
    }
    if sample.is_empty() {
        return Err(BenchError::EmptyInput("second-to-last line is empty".into()));
    }
    Ok(SampleRecords {
        dictionary_source,
        sample,
    })
}

/// Compress `records.sample` at `level` with and without `dict`.
pub fn compare_records<C: Codec + ?Sized>(
    codec: &C,
    records: &SampleRecords<'_>,
    level: i32,
    dict: &Dictionary,
    verify: bool,
) -> Result<DictionaryComparison> {
    codec.check_level(level)?;
    let sample = records.sample;

    let plain = codec.compress(sample, level)?;
    if verify && codec.decompress(&plain)? != sample {
        return Err(BenchError::RoundTripMismatch(level));
    }

    let seeded = codec.compress_with_dictionary(sample, level, dict)?;
    if verify && codec.decompress_with_dictionary(&seeded, dict)? != sample {
        return Err(BenchError::RoundTripMismatch(level));
    }

    Ok(DictionaryComparison {
        level,
        dictionary_size: dict.len(),
        without_dictionary: DictionaryResult::new("without_dictionary", sample.len(), plain.len()),
        with_dictionary: DictionaryResult::new("with_dictionary", sample.len(), seeded.len()),
    })
}

/// Records and dictionary for the comparison, set up before the sweep so a
/// degenerate corpus fails before anything is reported.
#[derive(Debug)]
pub struct DictionaryDemo<'a> {
    records: SampleRecords<'a>,
    dictionary: Dictionary,
    level: i32,
}

impl<'a> DictionaryDemo<'a> {
    /// Select the records from `payload`, check `level` and build the
    /// dictionary.
    ///
    /// # Errors
    /// - [`BenchError::EmptyInput`] from [`select_records`].
    /// - [`BenchError::UnsupportedLevel`] for a bad `level`.
    /// - [`BenchError::DictionaryBuild`] when the first line is too short.
    pub fn prepare<C: Codec + ?Sized>(codec: &C, payload: &'a Payload, level: i32) -> Result<Self> {
        let records = select_records(payload.as_bytes())?;
        codec.check_level(level)?;
        let dictionary = codec.build_dictionary(records.dictionary_source)?;
        debug!(dict_bytes = dictionary.len(), "built dictionary");
        Ok(Self {
            records,
            dictionary,
            level,
        })
    }

    pub fn records(&self) -> &SampleRecords<'a> {
        &self.records
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Compress the sample both ways with the prepared dictionary.
    pub fn run<C: Codec + ?Sized>(&self, codec: &C, verify: bool) -> Result<DictionaryComparison> {
        let cmp = compare_records(codec, &self.records, self.level, &self.dictionary, verify)?;
        info!(
            level = self.level,
            sample = self.records.sample.len(),
            plain = cmp.without_dictionary.compressed_size,
            with_dict = cmp.with_dictionary.compressed_size,
            "dictionary comparison done"
        );
        Ok(cmp)
    }
}
