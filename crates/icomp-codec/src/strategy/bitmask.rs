use super::flipped_equals;
use crate::dictionary::Dictionary;
use icomp_core::bits::{flip_positions, max_value, to_bits, BitCursor};
use icomp_core::{CompressionResult, IcompError, Line, Result};

/// A dictionary entry with a short bitmask XORed in at some offset.
///
/// Payload layout: `offset | mask | dictionary index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmaskDelta {
    offset_width: usize,
    mask_width: usize,
    index_width: usize,
}

impl BitmaskDelta {
    pub fn new(offset_width: usize, mask_width: usize, index_width: usize) -> Self {
        Self { offset_width, mask_width, index_width }
    }

    pub fn encoding_length(&self) -> usize {
        self.offset_width + self.mask_width + self.index_width
    }

    /// Line positions flipped by `mask` placed at `offset`, leftmost first.
    fn mask_positions(&self, mask: u64, offset: usize) -> Vec<usize> {
        (0..self.mask_width)
            .filter(|j| (mask >> (self.mask_width - 1 - j)) & 1 == 1)
            .map(|j| offset + j)
            .collect()
    }

    pub fn compress(&self, dict: &Dictionary, lines: &[Line], position: usize) -> Result<Option<CompressionResult>> {
        let target = lines[position].as_bytes();
        for (index, entry) in dict.iter() {
            if entry.len() != target.len() || entry.len() < self.mask_width {
                continue;
            }
            let mut buf = entry.as_bytes().to_vec();
            // Highest mask first so the leftmost set bit is canonical.
            for mask in (1..=max_value(self.mask_width)).rev() {
                for offset in 0..=entry.len() - self.mask_width {
                    let flips = self.mask_positions(mask, offset);
                    if flipped_equals(&mut buf, &flips, target)? {
                        let payload = to_bits(offset as u64, self.offset_width)?
                            + &to_bits(mask, self.mask_width)?
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
        let offset = cursor.read_field(self.offset_width)? as usize;
        let mask = cursor.read_field(self.mask_width)?;
        let index = cursor.read_field(self.index_width)? as usize;
        let entry = dict.get(index)?;
        if mask == 0 || offset + self.mask_width > entry.len() {
            return Err(IcompError::StreamCorruption(format!(
                "bitmask {mask:b} at offset {offset} does not fit a {}-bit entry",
                entry.len()
            )));
        }
        out.push(flip_positions(entry, self.mask_positions(mask, offset))?);
        Ok(())
    }
}
