//! Rendering of benchmark records.
//!
//! Stages emit structured records through [`Reporter`]; presentation lives
//! entirely here. [`TextReporter`] is the console writer.

use std::io::Write;
use std::ops::RangeInclusive;

use crate::error::Result;
use crate::stats::{DictionaryComparison, DictionaryResult, LevelResult};

pub trait Reporter {
    /// Called once before the first level is compressed.
    fn sweep_started(&mut self, codec: &str, levels: &RangeInclusive<i32>) -> Result<()>;

    /// Called once per level, in ascending level order.
    fn level(&mut self, result: &LevelResult) -> Result<()>;

    fn dictionary(&mut self, comparison: &DictionaryComparison) -> Result<()>;

    /// Flush anything buffered. No records may follow.
    fn finish(&mut self) -> Result<()>;
}

/// Format `n` with `,` between groups of three digits.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Human-readable console output.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn dictionary_block(&mut self, heading: &str, result: &DictionaryResult) -> Result<()> {
        writeln!(self.out, "\n{heading}")?;
        writeln!(
            self.out,
            "Uncompressed Length: {} - Compressed Length: {} - Compression Ratio: {:.3}%",
            result.uncompressed_size, result.compressed_size, result.ratio
        )?;
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn sweep_started(&mut self, codec: &str, levels: &RangeInclusive<i32>) -> Result<()> {
        writeln!(
            self.out,
            "\nTesting {} Compression Levels {}-{}\n",
            codec,
            levels.start(),
            levels.end()
        )?;
        Ok(())
    }

    fn level(&mut self, r: &LevelResult) -> Result<()> {
        writeln!(
            self.out,
            "Compression Level: {:>2} - Uncompressed: {} - Compressed: {} - Ratio: {:5.2}% - Compression Time: {:8.2}ms",
            r.level,
            group_thousands(r.uncompressed_size),
            group_thousands(r.compressed_size),
            r.ratio,
            r.elapsed_ms
        )?;
        Ok(())
    }

    fn dictionary(&mut self, cmp: &DictionaryComparison) -> Result<()> {
        self.dictionary_block(
            "Compression Level without using a dictionary",
            &cmp.without_dictionary,
        )?;
        self.dictionary_block("Compression Level using a dictionary", &cmp.with_dictionary)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> DictionaryComparison {
        DictionaryComparison {
            level: 3,
            dictionary_size: 64,
            without_dictionary: DictionaryResult::new("without_dictionary", 64, 60),
            with_dictionary: DictionaryResult::new("with_dictionary", 64, 20),
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(104_857_600), "104,857,600");
    }

    #[test]
    fn text_level_line_layout() {
        let mut rep = TextReporter::new(Vec::new());
        rep.level(&LevelResult::new(3, 1_000_000, 250_000, 12.5, false))
            .unwrap();
        let text = String::from_utf8(rep.into_inner()).unwrap();
        assert_eq!(
            text,
            "Compression Level:  3 - Uncompressed: 1,000,000 - Compressed: 250,000 - Ratio: 25.00% - Compression Time:    12.50ms\n"
        );
    }

    #[test]
    fn text_dictionary_blocks() {
        let mut rep = TextReporter::new(Vec::new());
        rep.dictionary(&comparison()).unwrap();
        let text = String::from_utf8(rep.into_inner()).unwrap();
        assert!(text.contains("Compression Level without using a dictionary\nUncompressed Length: 64 - Compressed Length: 60 - Compression Ratio: 93.750%"));
        assert!(text.contains("Compression Level using a dictionary\nUncompressed Length: 64 - Compressed Length: 20 - Compression Ratio: 31.250%"));
    }
}
