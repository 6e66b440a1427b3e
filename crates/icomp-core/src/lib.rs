//! Shared vocabulary for the instruction compressor: errors, configuration,
//! data model types and bit-string helpers.

pub mod bits;
pub mod config;
pub mod error;
pub mod types;

pub use config::{
    CodecConfig, DictionaryConfig, FormatConfig, StrategyConfig, MAX_RUN_LENGTH_WIDTH,
};
pub use error::{IcompError, Result};
pub use types::{CompressionResult, EncodedInstruction, InstructionEntry, Line};
