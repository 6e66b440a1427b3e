use super::{flipped_equals, StrategyKind};
use crate::dictionary::Dictionary;
use icomp_core::bits::{flip_positions, to_bits, BitCursor};
use icomp_core::{CompressionResult, IcompError, Line, Result};

/// A dictionary entry with `k` consecutive bits flipped.
///
/// Payload layout: `start offset | dictionary index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMismatch {
    kind: StrategyKind,
    mismatches: usize,
    offset_width: usize,
    index_width: usize,
}

impl FixedMismatch {
    /// Only spans of 1, 2 or 4 bits have a wire tag.
    pub fn new(mismatches: usize, offset_width: usize, index_width: usize) -> Result<Self> {
        let kind = match mismatches {
            1 => StrategyKind::Mismatch1,
            2 => StrategyKind::Mismatch2,
            4 => StrategyKind::Mismatch4,
            other => {
                return Err(IcompError::InvalidConfig(format!("no mismatch strategy spans {other} bits")));
            }
        };
        Ok(Self::with_kind(kind, mismatches, offset_width, index_width))
    }

    pub(super) fn with_kind(kind: StrategyKind, mismatches: usize, offset_width: usize, index_width: usize) -> Self {
        Self { kind, mismatches, offset_width, index_width }
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    pub fn encoding_length(&self) -> usize {
        self.offset_width + self.index_width
    }

    pub fn compress(&self, dict: &Dictionary, lines: &[Line], position: usize) -> Result<Option<CompressionResult>> {
        let target = lines[position].as_bytes();
        for (index, entry) in dict.iter() {
            if entry.len() != target.len() || entry.len() < self.mismatches {
                continue;
            }
            let mut buf = entry.as_bytes().to_vec();
            for start in 0..=entry.len() - self.mismatches {
                let flips: Vec<usize> = (start..start + self.mismatches).collect();
                if flipped_equals(&mut buf, &flips, target)? {
                    let payload = to_bits(start as u64, self.offset_width)?
                        + &to_bits(index as u64, self.index_width)?;
                    return Ok(Some(CompressionResult::single(payload)));
                }
            }
        }
        Ok(None)
    }

    pub fn decompress(&self, dict: &Dictionary, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        let mut cursor = BitCursor::new(payload);
        let start = cursor.read_field(self.offset_width)? as usize;
        let index = cursor.read_field(self.index_width)? as usize;
        let entry = dict.get(index)?;
        if start + self.mismatches > entry.len() {
            return Err(IcompError::StreamCorruption(format!(
                "{}-bit mismatch at {start} overruns a {}-bit entry",
                self.mismatches,
                entry.len()
            )));
        }
        out.push(flip_positions(entry, start..start + self.mismatches)?);
        Ok(())
    }
}

/// A dictionary entry with two arbitrary, distinct bits flipped.
///
/// Payload layout: `first position | second position | dictionary index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMismatch {
    position_width: usize,
    index_width: usize,
}

impl PairMismatch {
    pub fn new(position_width: usize, index_width: usize) -> Self {
        Self { position_width, index_width }
    }

    pub fn encoding_length(&self) -> usize {
        self.position_width * 2 + self.index_width
    }

    pub fn compress(&self, dict: &Dictionary, lines: &[Line], position: usize) -> Result<Option<CompressionResult>> {
        let target = lines[position].as_bytes();
        for (index, entry) in dict.iter() {
            if entry.len() != target.len() {
                continue;
            }
            let mut buf = entry.as_bytes().to_vec();
            for first in 0..entry.len() {
                for second in 0..entry.len() {
                    if first == second {
                        continue;
                    }
                    if flipped_equals(&mut buf, &[first, second], target)? {
                        let payload = to_bits(first as u64, self.position_width)?
                            + &to_bits(second as u64, self.position_width)?
                            + &to_bits(index as u64, self.index_width)?;
                        return Ok(Some(CompressionResult::single(payload)));
                    }
                }
            }
        }
        Ok(None)
    }

    pub fn decompress(&self, dict: &Dictionary, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        let mut cursor = BitCursor::new(payload);
        let first = cursor.read_field(self.position_width)? as usize;
        let second = cursor.read_field(self.position_width)? as usize;
        let index = cursor.read_field(self.index_width)? as usize;
        let entry = dict.get(index)?;
        if first == second || first >= entry.len() || second >= entry.len() {
            return Err(IcompError::StreamCorruption(format!(
                "mismatch pair ({first}, {second}) invalid for a {}-bit entry",
                entry.len()
            )));
        }
        out.push(flip_positions(entry, [first, second])?);
        Ok(())
    }
}
