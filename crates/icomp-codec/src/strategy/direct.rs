use crate::dictionary::Dictionary;
use icomp_core::bits::{to_bits, BitCursor};
use icomp_core::{CompressionResult, Line, Result};

/// Exact dictionary hit, encoded as the entry's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryDirect {
    index_width: usize,
}

impl DictionaryDirect {
    pub fn new(index_width: usize) -> Self {
        Self { index_width }
    }

    pub fn encoding_length(&self) -> usize {
        self.index_width
    }

    pub fn compress(&self, dict: &Dictionary, lines: &[Line], position: usize) -> Result<Option<CompressionResult>> {
        match dict.index_of(&lines[position]) {
            Some(index) => Ok(Some(CompressionResult::single(to_bits(index as u64, self.index_width)?))),
            None => Ok(None),
        }
    }

    pub fn decompress(&self, dict: &Dictionary, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        let index = BitCursor::new(payload).read_field(self.index_width)? as usize;
        out.push(dict.get(index)?.to_string());
        Ok(())
    }
}
