//! Text form of a compressed artifact: packed rows, a separator row, then
//! the dictionary listing one entry per row.

use icomp_core::{IcompError, Line, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompressedArtifact {
    pub rows: Vec<String>,
    pub dictionary: Vec<Line>,
}

/// Split newline-delimited text into lines, dropping one trailing empty line.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = text.lines().map(str::to_string).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

impl CompressedArtifact {
    pub fn to_text(&self, separator: &str) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(separator);
        out.push('\n');
        for entry in &self.dictionary {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    pub fn parse(text: &str, separator: &str) -> Result<Self> {
        let lines = split_lines(text);
        let split = lines
            .iter()
            .position(|l| l == separator)
            .ok_or_else(|| IcompError::StreamCorruption(format!("separator {separator:?} not found")))?;
        let mut rows = lines;
        let dictionary = rows.split_off(split + 1);
        rows.pop();
        Ok(Self { rows, dictionary })
    }
}
