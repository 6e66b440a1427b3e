//! The competing encodings. A strategy either declines a position
//! (`Ok(None)`) or produces a fixed-width payload standing for one or more
//! input lines.

mod bitmask;
mod direct;
mod literal;
mod mismatch;
mod run_length;

pub use bitmask::BitmaskDelta;
pub use direct::DictionaryDirect;
pub use literal::Literal;
pub use mismatch::{FixedMismatch, PairMismatch};
pub use run_length::RunLength;

use crate::dictionary::Dictionary;
use icomp_core::bits::flip_bit;
use icomp_core::{CodecConfig, CompressionResult, Line, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State that lives for exactly one encoding pass.
#[derive(Debug, Clone, Default)]
pub struct PassContext {
    /// Value the run-length strategy last compressed, if its look-back held.
    pub last_run: Option<Line>,
}

/// Identifies a strategy independently of its field widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Literal,
    RunLength,
    DictionaryDirect,
    BitmaskDelta,
    Mismatch1,
    Mismatch2,
    Mismatch4,
    PairMismatch,
}

impl StrategyKind {
    /// Wire order of the standard catalog; position is the tag.
    pub const STANDARD_ORDER: [StrategyKind; 8] = [
        Self::Literal,
        Self::RunLength,
        Self::DictionaryDirect,
        Self::BitmaskDelta,
        Self::Mismatch1,
        Self::Mismatch2,
        Self::Mismatch4,
        Self::PairMismatch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::RunLength => "run_length",
            Self::DictionaryDirect => "dictionary_direct",
            Self::BitmaskDelta => "bitmask_delta",
            Self::Mismatch1 => "mismatch_1",
            Self::Mismatch2 => "mismatch_2",
            Self::Mismatch4 => "mismatch_4",
            Self::PairMismatch => "pair_mismatch",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One encoding, configured with its field widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Literal(Literal),
    RunLength(RunLength),
    DictionaryDirect(DictionaryDirect),
    BitmaskDelta(BitmaskDelta),
    FixedMismatch(FixedMismatch),
    PairMismatch(PairMismatch),
}

impl Strategy {
    pub fn from_kind(kind: StrategyKind, config: &CodecConfig) -> Self {
        let index_width = config.dictionary.index_width;
        let s = &config.strategies;
        match kind {
            StrategyKind::Literal => Self::Literal(Literal::new(config.format.line_width)),
            StrategyKind::RunLength => Self::RunLength(RunLength::new(s.run_length_width)),
            StrategyKind::DictionaryDirect => Self::DictionaryDirect(DictionaryDirect::new(index_width)),
            StrategyKind::BitmaskDelta => Self::BitmaskDelta(BitmaskDelta::new(
                s.bitmask_offset_width,
                s.bitmask_width,
                index_width,
            )),
            StrategyKind::Mismatch1 => Self::FixedMismatch(FixedMismatch::with_kind(kind, 1, s.mismatch_offset_width, index_width)),
            StrategyKind::Mismatch2 => Self::FixedMismatch(FixedMismatch::with_kind(kind, 2, s.mismatch_offset_width, index_width)),
            StrategyKind::Mismatch4 => Self::FixedMismatch(FixedMismatch::with_kind(kind, 4, s.mismatch_offset_width, index_width)),
            StrategyKind::PairMismatch => Self::PairMismatch(PairMismatch::new(s.pair_position_width, index_width)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Literal(_) => StrategyKind::Literal,
            Self::RunLength(_) => StrategyKind::RunLength,
            Self::DictionaryDirect(_) => StrategyKind::DictionaryDirect,
            Self::BitmaskDelta(_) => StrategyKind::BitmaskDelta,
            Self::FixedMismatch(m) => m.kind(),
            Self::PairMismatch(_) => StrategyKind::PairMismatch,
        }
    }

    /// Payload width in bits, fixed for the strategy's lifetime.
    pub fn encoding_length(&self) -> usize {
        match self {
            Self::Literal(s) => s.encoding_length(),
            Self::RunLength(s) => s.encoding_length(),
            Self::DictionaryDirect(s) => s.encoding_length(),
            Self::BitmaskDelta(s) => s.encoding_length(),
            Self::FixedMismatch(s) => s.encoding_length(),
            Self::PairMismatch(s) => s.encoding_length(),
        }
    }

    pub fn compress(
        &self,
        dict: &Dictionary,
        lines: &[Line],
        position: usize,
        ctx: &mut PassContext,
    ) -> Result<Option<CompressionResult>> {
        match self {
            Self::Literal(s) => s.compress(lines, position),
            Self::RunLength(s) => s.compress(lines, position, ctx),
            Self::DictionaryDirect(s) => s.compress(dict, lines, position),
            Self::BitmaskDelta(s) => s.compress(dict, lines, position),
            Self::FixedMismatch(s) => s.compress(dict, lines, position),
            Self::PairMismatch(s) => s.compress(dict, lines, position),
        }
    }

    /// Append the line(s) `payload` stands for to `out`.
    pub fn decompress(&self, dict: &Dictionary, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        match self {
            Self::Literal(s) => s.decompress(out, payload),
            Self::RunLength(s) => s.decompress(out, payload),
            Self::DictionaryDirect(s) => s.decompress(dict, out, payload),
            Self::BitmaskDelta(s) => s.decompress(dict, out, payload),
            Self::FixedMismatch(s) => s.decompress(dict, out, payload),
            Self::PairMismatch(s) => s.decompress(dict, out, payload),
        }
    }
}

/// Flip `positions` in `buf`, compare with `target`, then restore `buf`.
fn flipped_equals(buf: &mut [u8], positions: &[usize], target: &[u8]) -> Result<bool> {
    for &p in positions {
        flip_bit(buf, p)?;
    }
    let hit = buf == target;
    for &p in positions {
        flip_bit(buf, p)?;
    }
    Ok(hit)
}
