use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "icomp", about = "Dictionary and bitmask compressor for fixed-width binary lines", version)]
pub struct Cli {
    /// 1 to compress, 2 to decompress
    pub mode: Mode,

    /// Input file (defaults to original.txt or compressed.txt by mode)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output file (defaults to cout.txt or dout.txt by mode)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Path to a JSON codec config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print compression statistics as JSON on stdout
    #[arg(long)]
    pub stats: bool,

    /// Enable info-level logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[value(name = "1", alias = "compress")]
    Compress,
    #[value(name = "2", alias = "decompress")]
    Decompress,
}

impl Mode {
    pub fn default_input(&self) -> &'static str {
        match self {
            Mode::Compress => "original.txt",
            Mode::Decompress => "compressed.txt",
        }
    }

    pub fn default_output(&self) -> &'static str {
        match self {
            Mode::Compress => "cout.txt",
            Mode::Decompress => "dout.txt",
        }
    }
}
