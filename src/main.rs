use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use levelbench::config::DEFAULT_INPUT;
use levelbench::io_utils::bench_cli_error;
use levelbench::{
    run, Config, TextReporter, ZstdCodec, DEFAULT_DICT_LEVEL, MAX_LEVEL, MIN_LEVEL,
};

/// Benchmark zstd compression levels and dictionary compression on a corpus.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Zstd-compressed corpus (newline-delimited records)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// First compression level of the sweep
    #[arg(long, default_value_t = MIN_LEVEL, allow_negative_numbers = true)]
    min_level: i32,

    /// Last compression level of the sweep
    #[arg(long, default_value_t = MAX_LEVEL, allow_negative_numbers = true)]
    max_level: i32,

    /// Level used for the dictionary comparison
    #[arg(long, default_value_t = DEFAULT_DICT_LEVEL, allow_negative_numbers = true)]
    dict_level: i32,

    /// Read the input as plain text instead of a zstd frame
    #[arg(long)]
    plain: bool,

    /// Decompress every output and check it matches the input
    #[arg(long)]
    verify: bool,

    /// Show a progress bar on stderr while sweeping
    #[arg(long)]
    progress: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            plain: self.plain,
            min_level: self.min_level,
            max_level: self.max_level,
            dict_level: self.dict_level,
            verify: self.verify,
            progress: self.progress,
        }
    }

    fn log_filter(&self) -> EnvFilter {
        let default = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            _ => "debug",
        };
        EnvFilter::new(default)
    }
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = args.config();
    debug!(?config, "parsed configuration");

    let mut reporter = TextReporter::new(io::stdout().lock());
    run(&config, &ZstdCodec::new(), &mut reporter)
        .map_err(|e| bench_cli_error(&config.input, e))?;
    Ok(())
}
