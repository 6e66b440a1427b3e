use serde::{Deserialize, Serialize};

use crate::bits::bits_needed;
use crate::error::{IcompError, Result};

/// Widest numeric field the codec will read or write.
pub const MAX_FIELD_WIDTH: usize = 63;

/// Widest run-length count; bounds how many lines one instruction may expand to.
pub const MAX_RUN_LENGTH_WIDTH: usize = 16;

/// Full codec configuration. Compress and decompress sides of one artifact
/// must use identical values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CodecConfig {
    pub format: FormatConfig,
    pub dictionary: DictionaryConfig,
    pub strategies: StrategyConfig,
}

/// Framing of the packed artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Bits used for the strategy tag (F).
    pub tag_width: usize,
    /// Bits per packed output row (W).
    pub row_width: usize,
    /// Width of every input line.
    pub line_width: usize,
    /// Row separating packed data from the dictionary listing.
    pub separator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Bits of a dictionary index (B).
    pub index_width: usize,
    /// Maximum number of entries kept, at most 2^B.
    pub capacity: usize,
}

/// Per-strategy payload field widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub run_length_width: usize,
    pub bitmask_width: usize,
    pub bitmask_offset_width: usize,
    pub mismatch_offset_width: usize,
    pub pair_position_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            tag_width: 3,
            row_width: 32,
            line_width: 32,
            separator: "xxxx".into(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self { index_width: 4, capacity: 16 }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            run_length_width: 3,
            bitmask_width: 4,
            bitmask_offset_width: 5,
            mismatch_offset_width: 5,
            pair_position_width: 5,
        }
    }
}

fn invalid(msg: impl Into<String>) -> IcompError {
    IcompError::InvalidConfig(msg.into())
}

fn check_field(name: &str, width: usize) -> Result<()> {
    if width == 0 || width > MAX_FIELD_WIDTH {
        return Err(invalid(format!("{name} must be in 1..={MAX_FIELD_WIDTH}, got {width}")));
    }
    Ok(())
}

fn check_holds(name: &str, width: usize, largest: usize) -> Result<()> {
    if bits_needed(largest as u64) > width {
        return Err(invalid(format!("{name} of {width} bits cannot hold {largest}")));
    }
    Ok(())
}

impl CodecConfig {
    /// Parse a JSON config; omitted fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Largest number of entries a dictionary index can address.
    pub fn dictionary_limit(&self) -> usize {
        1usize
            .checked_shl(self.dictionary.index_width as u32)
            .unwrap_or(usize::MAX)
    }

    /// Reject inconsistent widths before any dictionary or catalog is built.
    pub fn validate(&self) -> Result<()> {
        let f = &self.format;
        let d = &self.dictionary;
        let s = &self.strategies;

        check_field("tag_width", f.tag_width)?;
        check_field("index_width", d.index_width)?;
        check_field("run_length_width", s.run_length_width)?;
        if s.run_length_width > MAX_RUN_LENGTH_WIDTH {
            return Err(invalid(format!(
                "run_length_width must be at most {MAX_RUN_LENGTH_WIDTH}, got {}",
                s.run_length_width
            )));
        }
        check_field("bitmask_width", s.bitmask_width)?;
        check_field("bitmask_offset_width", s.bitmask_offset_width)?;
        check_field("mismatch_offset_width", s.mismatch_offset_width)?;
        check_field("pair_position_width", s.pair_position_width)?;

        if f.row_width == 0 || f.line_width == 0 {
            return Err(invalid("row_width and line_width must be non-zero"));
        }
        if d.capacity > self.dictionary_limit() {
            return Err(invalid(format!(
                "dictionary capacity {} exceeds 2^{} entries",
                d.capacity, d.index_width
            )));
        }
        if s.bitmask_width > f.line_width {
            return Err(invalid(format!(
                "bitmask_width {} wider than line_width {}",
                s.bitmask_width, f.line_width
            )));
        }
        check_holds("bitmask_offset_width", s.bitmask_offset_width, f.line_width - s.bitmask_width)?;
        check_holds("mismatch_offset_width", s.mismatch_offset_width, f.line_width - 1)?;
        check_holds("pair_position_width", s.pair_position_width, f.line_width - 1)?;

        // Padding is shorter than a row; it must never hold a whole literal.
        if f.line_width + f.tag_width < f.row_width {
            return Err(invalid(format!(
                "row_width {} exceeds line_width + tag_width ({})",
                f.row_width,
                f.line_width + f.tag_width
            )));
        }
        if f.separator.is_empty()
            || f.separator.contains('\n')
            || f.separator.bytes().all(|b| b == b'0' || b == b'1')
        {
            return Err(invalid(format!("unusable separator {:?}", f.separator)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let c = CodecConfig::default();
        c.validate().unwrap();
        assert_eq!(c.dictionary_limit(), 16);
        assert_eq!(c.format.separator, "xxxx");
    }

    #[test]
    fn test_capacity_over_limit() {
        let mut c = CodecConfig::default();
        c.dictionary.capacity = 17;
        assert!(matches!(c.validate(), Err(IcompError::InvalidConfig(_))));
    }

    #[test]
    fn test_offset_width_too_narrow() {
        let mut c = CodecConfig::default();
        c.strategies.mismatch_offset_width = 4;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_row_wider_than_padding_allows() {
        let mut c = CodecConfig::default();
        c.format.row_width = 64;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_wide_run_length_rejected() {
        let mut c = CodecConfig::default();
        c.strategies.run_length_width = MAX_RUN_LENGTH_WIDTH;
        assert!(c.validate().is_ok());
        c.strategies.run_length_width = MAX_RUN_LENGTH_WIDTH + 1;
        assert!(matches!(c.validate(), Err(IcompError::InvalidConfig(_))));
    }

    #[test]
    fn test_binary_separator_rejected() {
        let mut c = CodecConfig::default();
        c.format.separator = "0101".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let c = CodecConfig::from_json(r#"{"dictionary": {"index_width": 5, "capacity": 32}}"#).unwrap();
        assert_eq!(c.dictionary.capacity, 32);
        assert_eq!(c.format.row_width, 32);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(CodecConfig::from_json("{"), Err(IcompError::Serialization(_))));
    }
}
