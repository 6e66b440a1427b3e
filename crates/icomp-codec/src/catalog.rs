//! Ordered strategy list. A strategy's position is its wire tag.

use crate::strategy::{Strategy, StrategyKind};
use icomp_core::{CodecConfig, IcompError, Result};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    strategies: Vec<Strategy>,
    tag_width: usize,
}

impl Catalog {
    /// The full catalog in standard tag order.
    pub fn standard(config: &CodecConfig) -> Result<Self> {
        Self::from_kinds(&StrategyKind::STANDARD_ORDER, config)
    }

    /// Catalog of the given kinds, in the given order. The first must be
    /// `Literal`, since an all-zero tag in the padding means literal.
    pub fn from_kinds(kinds: &[StrategyKind], config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        if kinds.first() != Some(&StrategyKind::Literal) {
            return Err(IcompError::InvalidConfig("catalog must start with the literal strategy".into()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = kinds.iter().find(|k| !seen.insert(**k)) {
            return Err(IcompError::InvalidConfig(format!("strategy {dup} listed twice")));
        }
        let tag_width = config.format.tag_width;
        let capacity = 1usize.checked_shl(tag_width as u32).unwrap_or(usize::MAX);
        if kinds.len() > capacity {
            return Err(IcompError::InvalidConfig(format!(
                "{} strategies do not fit a {tag_width}-bit tag",
                kinds.len()
            )));
        }
        Ok(Self {
            strategies: kinds.iter().map(|k| Strategy::from_kind(*k, config)).collect(),
            tag_width,
        })
    }

    /// Strategy for a wire tag.
    pub fn get(&self, tag: usize) -> Result<&Strategy> {
        self.strategies
            .get(tag)
            .ok_or_else(|| IcompError::StreamCorruption(format!("unknown tag {tag}")))
    }

    pub fn tag_width(&self) -> usize {
        self.tag_width
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// `(tag, strategy)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Strategy)> {
        self.strategies.iter().enumerate()
    }

    pub fn kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(Strategy::kind).collect()
    }
}
