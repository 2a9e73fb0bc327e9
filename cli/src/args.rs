use clap::{ArgAction, Parser, ValueEnum};

use envelope_core::constants::DEFAULT_LEVEL_GZIP;

/// Encode files into EC v1 text envelopes and back.
#[derive(Parser, Debug)]
#[command(name = "ecv1", version)]
pub struct Args {
    /// Operation to run
    #[arg(value_enum)]
    pub mode: Mode,

    /// Input file path, or - for stdin
    pub input: String,

    /// Output file path, or - for stdout (default: stdout)
    #[arg(conflicts_with = "output_flag")]
    pub output: Option<String>,

    /// Output file path (same as the positional OUTPUT)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output_flag: Option<String>,

    /// gzip level used by encode
    #[arg(long, default_value_t = DEFAULT_LEVEL_GZIP, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: u32,

    /// On decode, pretty-print content tagged ct=json
    #[arg(long)]
    pub pretty: bool,

    /// Print byte counts and stage timings as JSON on stderr
    #[arg(long)]
    pub stats: bool,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Encode,
    Decode,
    /// Validate an envelope against its own descriptor
    Inspect,
}

impl Args {
    pub fn output(&self) -> Option<&str> {
        self.output_flag.as_deref().or(self.output.as_deref())
    }
}
