/// One fixed-width line of binary digits.
pub type Line = String;

/// Occurrence record gathered while ranking input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionEntry {
    pub line: Line,
    pub first_index: usize,
    pub count: usize,
}

impl InstructionEntry {
    pub fn new(line: Line, first_index: usize) -> Self {
        Self { line, first_index, count: 1 }
    }
}

/// A tag plus the payload bits its strategy produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedInstruction {
    pub tag: usize,
    pub payload: String,
}

impl EncodedInstruction {
    pub fn new(tag: usize, payload: impl Into<String>) -> Self {
        Self { tag, payload: payload.into() }
    }
}

/// What a strategy returns when it applies at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub payload: String,
    pub lines_consumed: usize,
}

impl CompressionResult {
    /// Result standing for exactly one input line.
    pub fn single(payload: String) -> Self {
        Self { payload, lines_consumed: 1 }
    }

    pub fn spanning(payload: String, lines_consumed: usize) -> Self {
        Self { payload, lines_consumed }
    }
}
