use super::PassContext;
use icomp_core::bits::{max_value, to_bits, BitCursor};
use icomp_core::{CompressionResult, IcompError, Line, Result, MAX_RUN_LENGTH_WIDTH};

/// Repeats of the previous line. The payload counts the extra repeats
/// after the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLength {
    count_width: usize,
}

impl RunLength {
    pub fn new(count_width: usize) -> Self {
        Self { count_width }
    }

    pub fn encoding_length(&self) -> usize {
        self.count_width
    }

    /// Largest look-ahead count the payload can carry.
    pub fn max_count(&self) -> usize {
        usize::try_from(max_value(self.count_width)).unwrap_or(usize::MAX)
    }

    pub fn compress(
        &self,
        lines: &[Line],
        position: usize,
        ctx: &mut PassContext,
    ) -> Result<Option<CompressionResult>> {
        if position == 0 || lines[position] != lines[position - 1] {
            ctx.last_run = None;
            return Ok(None);
        }
        let current = &lines[position];
        // The same run must not re-trigger right after a capped run.
        if ctx.last_run.as_ref() == Some(current) {
            ctx.last_run = None;
            return Ok(None);
        }
        ctx.last_run = Some(current.clone());

        let extra = lines[position + 1..]
            .iter()
            .take(self.max_count())
            .take_while(|l| *l == current)
            .count();
        let payload = to_bits(extra as u64, self.count_width)?;
        Ok(Some(CompressionResult::spanning(payload, extra + 1)))
    }

    pub fn decompress(&self, out: &mut Vec<Line>, payload: &str) -> Result<()> {
        let extra = BitCursor::new(payload).read_field(self.count_width)?;
        if extra > max_value(MAX_RUN_LENGTH_WIDTH) {
            return Err(IcompError::StreamCorruption(format!("run-length count {extra} out of range")));
        }
        let repeats = extra as usize + 1;
        let previous = out
            .last()
            .cloned()
            .ok_or_else(|| IcompError::StreamCorruption("run-length instruction with no previous line".into()))?;
        out.extend(std::iter::repeat(previous).take(repeats));
        Ok(())
    }
}
