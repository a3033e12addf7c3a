//! Optional TOML settings file.
//!
//! Precedence: command-line flags, then the file, then built-in defaults.

use anyhow::Context;
use asciify::{AsciiConfig, AsciiError, Palette};
use serde::Deserialize;
use std::path::Path;

use crate::args::Args;

/// Settings file structure, every key optional
///
/// ```toml
/// width = 100
/// palette = "@%#*+=-:. "
/// aspect_ratio = 2.0
/// parallel = true
/// ```
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub width: Option<u32>,
    pub palette: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub parallel: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Merge flags over file settings over defaults, then validate
pub fn build_config(args: &Args, file: &FileConfig) -> Result<AsciiConfig, AsciiError> {
    let defaults = AsciiConfig::default();

    let palette = match args.palette.as_deref().or(file.palette.as_deref()) {
        Some(ramp) => Palette::new(ramp)?,
        None => defaults.palette,
    };

    let config = AsciiConfig {
        output_width: args.width.or(file.width).unwrap_or(defaults.output_width),
        palette,
        aspect_ratio: args
            .aspect_ratio
            .or(file.aspect_ratio)
            .unwrap_or(defaults.aspect_ratio),
        parallel: !args.sequential && file.parallel.unwrap_or(defaults.parallel),
    };
    config.validate()?;
    Ok(config)
}
