//! Codec facade: dictionary, encoder, packer and their inverses.

use crate::artifact::{split_lines, CompressedArtifact};
use crate::catalog::Catalog;
use crate::decoder::Decoder;
use crate::dictionary::Dictionary;
use crate::encoder::{validate_lines, Encoder};
use crate::packer::{BitstreamPacker, BitstreamUnpacker};
use icomp_core::bits::is_binary;
use icomp_core::{CodecConfig, IcompError, Line, Result};
use serde::Serialize;
use tracing::info;

/// How often one tag was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyUsage {
    pub tag: usize,
    pub strategy: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionStats {
    pub lines: usize,
    pub original_bits: usize,
    /// Tag and payload bits before row padding.
    pub stream_bits: usize,
    pub packed_bits: usize,
    pub instructions: usize,
    pub dictionary_entries: usize,
    pub usage: Vec<StrategyUsage>,
}

impl CompressionStats {
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 { return 1.0; }
        self.packed_bits as f64 / self.original_bits as f64
    }

    pub fn padding_bits(&self) -> usize {
        self.packed_bits - self.stream_bits
    }
}

#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub artifact: CompressedArtifact,
    pub stats: CompressionStats,
}

#[derive(Debug)]
pub struct Codec {
    config: CodecConfig,
    catalog: Catalog,
}

impl Codec {
    /// Codec with the standard catalog.
    pub fn new(config: CodecConfig) -> Result<Self> {
        let catalog = Catalog::standard(&config)?;
        Ok(Self { config, catalog })
    }

    /// Codec with a custom catalog built from the same config.
    pub fn with_catalog(config: CodecConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        if catalog.tag_width() != config.format.tag_width {
            return Err(IcompError::InvalidConfig(format!(
                "catalog tag width {} differs from configured {}",
                catalog.tag_width(),
                config.format.tag_width
            )));
        }
        if Catalog::from_kinds(&catalog.kinds(), &config)? != catalog {
            return Err(IcompError::InvalidConfig(
                "catalog field widths differ from the codec config".into(),
            ));
        }
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn compress(&self, lines: &[Line]) -> Result<CompressionReport> {
        let format = &self.config.format;
        validate_lines(lines, format.line_width)?;

        let dictionary = Dictionary::build(lines, &self.config.dictionary)?;
        let instructions = Encoder::new(&self.catalog, &dictionary).encode(lines)?;
        let rows = BitstreamPacker::new(format.tag_width, format.row_width).pack(&instructions)?;

        let mut usage: Vec<StrategyUsage> = self
            .catalog
            .iter()
            .map(|(tag, s)| StrategyUsage { tag, strategy: s.kind().to_string(), count: 0 })
            .collect();
        for ins in &instructions {
            usage[ins.tag].count += 1;
        }

        let stats = CompressionStats {
            lines: lines.len(),
            original_bits: lines.len() * format.line_width,
            stream_bits: instructions.iter().map(|i| format.tag_width + i.payload.len()).sum(),
            packed_bits: rows.len() * format.row_width,
            instructions: instructions.len(),
            dictionary_entries: dictionary.len(),
            usage,
        };
        info!(
            lines = stats.lines,
            instructions = stats.instructions,
            original_bits = stats.original_bits,
            packed_bits = stats.packed_bits,
            "compressed"
        );

        let artifact = CompressedArtifact {
            rows,
            dictionary: dictionary.entries().to_vec(),
        };
        Ok(CompressionReport { artifact, stats })
    }

    pub fn decompress(&self, artifact: &CompressedArtifact) -> Result<Vec<Line>> {
        let width = self.config.format.line_width;
        for (i, entry) in artifact.dictionary.iter().enumerate() {
            if entry.len() != width || !is_binary(entry) {
                return Err(IcompError::StreamCorruption(format!(
                    "dictionary entry {i} is not {width} binary digits: {entry:?}"
                )));
            }
        }
        let dictionary = Dictionary::from_entries(artifact.dictionary.clone(), &self.config.dictionary)?;
        let instructions = BitstreamUnpacker::new(&self.catalog, self.config.format.row_width).unpack(&artifact.rows)?;
        let lines = Decoder::new(&self.catalog, &dictionary).decode(&instructions)?;
        info!(rows = artifact.rows.len(), lines = lines.len(), "decompressed");
        Ok(lines)
    }

    /// Compress newline-delimited text into artifact text.
    pub fn compress_text(&self, text: &str) -> Result<String> {
        let report = self.compress(&split_lines(text))?;
        Ok(report.artifact.to_text(&self.config.format.separator))
    }

    /// Decompress artifact text into newline-terminated lines.
    pub fn decompress_text(&self, text: &str) -> Result<String> {
        let artifact = CompressedArtifact::parse(text, &self.config.format.separator)?;
        let lines = self.decompress(&artifact)?;
        let mut out = String::with_capacity(lines.len() * (self.config.format.line_width + 1));
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }
}
