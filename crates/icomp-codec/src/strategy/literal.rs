use icomp_core::{CompressionResult, IcompError, Line, Result};

/// The line itself, verbatim. Always applicable; tag 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    line_width: usize,
}

impl Literal {
    pub fn new(line_width: usize) -> Self {
        Self { line_width }
    }

    pub fn encoding_length(&self) -> usize {
        self.line_width
    }

    pub fn compress(&self, lines: &[Line], position: usize) -> Result<Option<CompressionResult>> {
        let line = &lines[position];
        if line.len() != self.line_width {
            return Err(IcompError::InvalidInput(format!(
                "line {position} has width {}, expected {}",
                line.len(),
                self.line_width
            )));
        }
        Ok(Some(CompressionResult::single(line.clone())))
    }

    pub fn decompress(&self, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        out.push(payload.to_string());
        Ok(())
    }
}
