//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render images as ASCII art", long_about = None)]
pub struct Args {
    /// Input image (PNG, JPEG, BMP, GIF, TGA, ...)
    pub input: PathBuf,

    /// Write the ASCII art to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in characters [default: 80]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Glyph ramp from darkest to lightest [default: "@#S%?*+;:,.- "]
    #[arg(long)]
    pub palette: Option<String>,

    /// Character cell height divided by width [default: 2.0]
    #[arg(long)]
    pub aspect_ratio: Option<f64>,

    /// Render rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// TOML file with default settings
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
