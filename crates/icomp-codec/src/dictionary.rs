//! Frequency-ranked dictionary of the most common input lines.

use icomp_core::{DictionaryConfig, IcompError, InstructionEntry, Line, Result};
use std::collections::HashMap;
use tracing::debug;

fn limit(config: &DictionaryConfig) -> usize {
    1usize.checked_shl(config.index_width as u32).unwrap_or(usize::MAX)
}

/// Count each distinct line and order by (descending count, ascending first index).
pub fn rank_lines(lines: &[Line]) -> Vec<InstructionEntry> {
    let mut counter: HashMap<&str, InstructionEntry> = HashMap::new();
    for (i, line) in lines.iter().enumerate() {
        counter
            .entry(line.as_str())
            .and_modify(|e| e.count += 1)
            .or_insert_with(|| InstructionEntry::new(line.clone(), i));
    }
    let mut ranked: Vec<InstructionEntry> = counter.into_values().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_index.cmp(&b.first_index)));
    ranked
}

/// Ordered table of at most 2^B distinct lines, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Line>,
    lookup: HashMap<Line, usize>,
}

impl Dictionary {
    /// Build from the full input of a compression pass.
    pub fn build(lines: &[Line], config: &DictionaryConfig) -> Result<Self> {
        if config.capacity > limit(config) {
            return Err(IcompError::InvalidConfig(format!(
                "dictionary capacity {} exceeds 2^{}",
                config.capacity, config.index_width
            )));
        }
        let ranked = rank_lines(lines);
        let distinct = ranked.len();
        let entries: Vec<Line> = ranked
            .into_iter()
            .take(config.capacity)
            .map(|e| e.line)
            .collect();
        debug!(distinct, kept = entries.len(), "built dictionary");
        Ok(Self::assemble(entries))
    }

    /// Load a persisted listing verbatim (decompression side).
    pub fn from_entries(entries: Vec<Line>, config: &DictionaryConfig) -> Result<Self> {
        if entries.len() > limit(config) {
            return Err(IcompError::InvalidConfig(format!(
                "dictionary listing has {} entries, index width {} allows {}",
                entries.len(),
                config.index_width,
                limit(config)
            )));
        }
        let dict = Self::assemble(entries);
        if dict.lookup.len() != dict.entries.len() {
            return Err(IcompError::StreamCorruption("dictionary listing has duplicate entries".into()));
        }
        Ok(dict)
    }

    fn assemble(entries: Vec<Line>) -> Self {
        let mut lookup = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            lookup.entry(e.clone()).or_insert(i);
        }
        Self { entries, lookup }
    }

    pub fn index_of(&self, line: &str) -> Option<usize> {
        self.lookup.get(line).copied()
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(IcompError::OutOfRange { index, size: self.entries.len() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Line] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().enumerate().map(|(i, e)| (i, e.as_str()))
    }
}
