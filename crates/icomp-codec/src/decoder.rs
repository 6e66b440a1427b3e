//! Replays encoded instructions back into lines.

use crate::catalog::Catalog;
use crate::dictionary::Dictionary;
use icomp_core::{EncodedInstruction, IcompError, Line, Result};
use tracing::debug;

pub struct Decoder<'a> {
    catalog: &'a Catalog,
    dictionary: &'a Dictionary,
}

impl<'a> Decoder<'a> {
    pub fn new(catalog: &'a Catalog, dictionary: &'a Dictionary) -> Self {
        Self { catalog, dictionary }
    }

    pub fn decode(&self, instructions: &[EncodedInstruction]) -> Result<Vec<Line>> {
        let mut out = Vec::with_capacity(instructions.len());
        for ins in instructions {
            let strategy = self.catalog.get(ins.tag)?;
            if ins.payload.len() != strategy.encoding_length() {
                return Err(IcompError::StreamCorruption(format!(
                    "tag {} expects {} payload bits, got {}",
                    ins.tag,
                    strategy.encoding_length(),
                    ins.payload.len()
                )));
            }
            strategy.decompress(self.dictionary, &mut out, &ins.payload)?;
        }
        debug!(instructions = instructions.len(), lines = out.len(), "decoded pass");
        Ok(out)
    }
}
