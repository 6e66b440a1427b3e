//! Greedy per-position strategy selection.

use crate::catalog::Catalog;
use crate::dictionary::Dictionary;
use crate::strategy::PassContext;
use icomp_core::bits::is_binary;
use icomp_core::{CompressionResult, EncodedInstruction, IcompError, Line, Result};
use tracing::{debug, trace};

/// Check every line is `line_width` binary digits.
pub fn validate_lines(lines: &[Line], line_width: usize) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if line.len() != line_width {
            return Err(IcompError::InvalidInput(format!(
                "line {i} has width {}, expected {line_width}",
                line.len()
            )));
        }
        if !is_binary(line) {
            return Err(IcompError::InvalidInput(format!("line {i} is not a binary string: {line:?}")));
        }
    }
    Ok(())
}

pub struct Encoder<'a> {
    catalog: &'a Catalog,
    dictionary: &'a Dictionary,
}

impl<'a> Encoder<'a> {
    pub fn new(catalog: &'a Catalog, dictionary: &'a Dictionary) -> Self {
        Self { catalog, dictionary }
    }

    /// Encode all lines. At each position the strictly shortest payload wins;
    /// on equal length the earlier tag is kept.
    pub fn encode(&self, lines: &[Line]) -> Result<Vec<EncodedInstruction>> {
        let mut ctx = PassContext::default();
        let mut instructions = Vec::new();
        let mut position = 0;

        while position < lines.len() {
            let mut best: Option<(usize, usize, CompressionResult)> = None;
            for (tag, strategy) in self.catalog.iter() {
                let Some(result) = strategy.compress(self.dictionary, lines, position, &mut ctx)? else {
                    continue;
                };
                let bits = strategy.encoding_length();
                if best.as_ref().map_or(true, |(_, best_bits, _)| bits < *best_bits) {
                    best = Some((tag, bits, result));
                }
            }
            let (tag, bits, result) = best.ok_or_else(|| {
                IcompError::InvalidConfig(format!("no strategy applies at line {position}"))
            })?;
            if result.lines_consumed == 0 {
                return Err(IcompError::InvalidConfig(format!("strategy {tag} consumed no lines at {position}")));
            }
            trace!(position, tag, bits, consumed = result.lines_consumed, "selected");
            position += result.lines_consumed;
            instructions.push(EncodedInstruction::new(tag, result.payload));
        }

        debug!(lines = lines.len(), instructions = instructions.len(), "encoded pass");
        Ok(instructions)
    }
}
