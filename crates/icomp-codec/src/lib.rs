//! Instruction compressor core.
//!
//! Components:
//! 1. Frequency dictionary — most common lines, ranked and capped at 2^B
//! 2. Strategy catalog — competing encodings; position in the catalog is the wire tag
//! 3. Encoder — greedy cheapest-payload selection per position
//! 4. Bitstream packer/unpacker — tagged payloads framed into fixed-width rows
//! 5. Decoder — replays instructions against the dictionary

pub mod artifact;
pub mod catalog;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod packer;
pub mod pipeline;
pub mod strategy;

pub use artifact::CompressedArtifact;
pub use catalog::Catalog;
pub use decoder::Decoder;
pub use dictionary::Dictionary;
pub use encoder::Encoder;
pub use packer::{BitstreamPacker, BitstreamUnpacker};
pub use pipeline::{Codec, CompressionReport, CompressionStats, StrategyUsage};
pub use strategy::{PassContext, Strategy, StrategyKind};
