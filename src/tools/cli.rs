use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use std::{fmt::Display, fmt::Formatter};

use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Environment variable that overrides the default log level.
pub const LOG_ENV: &str = "HUFFRUNE_LOG";

/// Compress or decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Name of the file to read for input
    pub file: PathBuf,
    /// Most detailed log level to report
    pub log_level: LevelFilter,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Zip,
            file: PathBuf::new(),
            log_level: LevelFilter::Info,
        }
    }

    /// Build options from an argument list (program name first). The log level still comes
    /// from the environment.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        let (op_mode, file) = match args.command {
            Command::Compress { file } => (Mode::Zip, file),
            Command::Decompress { file } => (Mode::Unzip, file),
        };
        Ok(Self {
            op_mode,
            file,
            log_level: parse_level(std::env::var(LOG_ENV).ok().as_deref()),
        })
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman compression for UTF-8 text files",
    long_about = "
    Compresses a text file symbol by symbol (one Unicode code point at a time) with a
    Huffman code, storing the code tree in the file header. The code points U+0000 and
    U+0001 are reserved by the file format and cannot be compressed.

    Set HUFFRUNE_LOG to off, error, warn, info, debug or trace to change how chatty it is."
)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress FILE into FILE.huff
    Compress {
        /// Text file to compress
        file: PathBuf,
    },
    /// Restore FILE.huff into FILE
    Decompress {
        /// Compressed file, must end in .huff
        file: PathBuf,
    },
}

/// Parse the log level setting, falling back to Info when it is missing or not understood.
pub fn parse_level(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Read the command line. Prints usage and exits on bad arguments, as clap does.
pub fn huffopts_init() -> HuffOpts {
    match HuffOpts::from_args(std::env::args_os()) {
        Ok(opts) => {
            log::set_max_level(opts.log_level);
            opts
        }
        Err(e) => e.exit(),
    }
}
