//! Framing of tagged instructions into fixed-width rows, and back.

use crate::catalog::Catalog;
use icomp_core::bits::{is_binary, to_bits, BitCursor};
use icomp_core::{EncodedInstruction, IcompError, Result};
use tracing::debug;

/// Concatenates `tag | payload` for every instruction and cuts the result
/// into rows of `row_width`, zero-padding the last one.
pub struct BitstreamPacker {
    tag_width: usize,
    row_width: usize,
}

impl BitstreamPacker {
    pub fn new(tag_width: usize, row_width: usize) -> Self {
        Self { tag_width, row_width }
    }

    pub fn pack(&self, instructions: &[EncodedInstruction]) -> Result<Vec<String>> {
        let mut stream = String::new();
        for ins in instructions {
            stream.push_str(&to_bits(ins.tag as u64, self.tag_width)?);
            stream.push_str(&ins.payload);
        }
        let padding = (self.row_width - stream.len() % self.row_width) % self.row_width;
        stream.extend(std::iter::repeat('0').take(padding));

        let rows: Vec<String> = (0..stream.len())
            .step_by(self.row_width)
            .map(|i| stream[i..i + self.row_width].to_string())
            .collect();
        debug!(instructions = instructions.len(), rows = rows.len(), padding, "packed bitstream");
        Ok(rows)
    }
}

/// Re-joins packed rows and splits them into instructions using the
/// catalog's payload widths.
pub struct BitstreamUnpacker<'a> {
    catalog: &'a Catalog,
    row_width: usize,
}

impl<'a> BitstreamUnpacker<'a> {
    pub fn new(catalog: &'a Catalog, row_width: usize) -> Self {
        Self { catalog, row_width }
    }

    pub fn unpack(&self, rows: &[String]) -> Result<Vec<EncodedInstruction>> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != self.row_width || !is_binary(row) {
                return Err(IcompError::StreamCorruption(format!(
                    "row {i} is not {} binary digits: {row:?}",
                    self.row_width
                )));
            }
        }
        let stream = rows.concat();
        let tag_width = self.catalog.tag_width();
        let mut cursor = BitCursor::new(&stream);
        let mut instructions = Vec::new();

        let tail_start = loop {
            let at = cursor.position();
            if cursor.remaining() < tag_width {
                break at;
            }
            let tag = cursor.read_field(tag_width)? as usize;
            let strategy = self.catalog.get(tag)?;
            let Some(payload) = cursor.take(strategy.encoding_length()) else {
                // Too short for a payload: only zero padding may remain.
                if tag != 0 {
                    return Err(IcompError::StreamCorruption(format!(
                        "non-zero tag {tag} in trailing padding at bit {at}"
                    )));
                }
                break at;
            };
            instructions.push(EncodedInstruction::new(tag, payload));
        };
        if stream[tail_start..].bytes().any(|b| b != b'0') {
            return Err(IcompError::StreamCorruption(format!(
                "non-zero bits in trailing padding after bit {tail_start}"
            )));
        }
        debug!(rows = rows.len(), instructions = instructions.len(), "unpacked bitstream");
        Ok(instructions)
    }
}
