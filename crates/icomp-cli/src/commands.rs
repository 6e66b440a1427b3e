use crate::cli::{Cli, Mode};
use anyhow::Context;
use icomp_codec::{Codec, CompressionStats};
use icomp_core::CodecConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load a JSON config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    CodecConfig::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn compress_file(codec: &Codec, input: &Path, output: &Path) -> anyhow::Result<CompressionStats> {
    let text = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let lines = icomp_codec::artifact::split_lines(&text);
    let report = codec.compress(&lines)?;
    let packed = report.artifact.to_text(&codec.config().format.separator);
    fs::write(output, packed).with_context(|| format!("writing {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), "compressed file");
    Ok(report.stats)
}

/// Returns the number of lines written.
pub fn decompress_file(codec: &Codec, input: &Path, output: &Path) -> anyhow::Result<usize> {
    let text = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let restored = codec.decompress_text(&text)?;
    fs::write(output, &restored).with_context(|| format!("writing {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), "decompressed file");
    Ok(restored.lines().count())
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let codec = Codec::new(config)?;
    let input = cli.input.clone().unwrap_or_else(|| PathBuf::from(cli.mode.default_input()));
    let output = cli.output.clone().unwrap_or_else(|| PathBuf::from(cli.mode.default_output()));

    match cli.mode {
        Mode::Compress => {
            let stats = compress_file(&codec, &input, &output)?;
            if cli.stats {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Mode::Decompress => {
            let lines = decompress_file(&codec, &input, &output)?;
            if cli.stats {
                println!("{}", serde_json::json!({ "lines": lines }));
            }
        }
    }
    Ok(())
}
