mod args;
mod config;

use anyhow::Context;
use args::Args;
use asciify::{Geometry, PixelBuffer, convert_to_ascii};
use clap::Parser;
use config::{FileConfig, build_config};
use image::GrayImage;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Configure logging, warnings only unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = build_config(args, &file_config).context("invalid settings")?;

    let image = load_grayscale(&args.input)?;
    let buffer = PixelBuffer::try_from(&image)
        .with_context(|| format!("unusable image {}", args.input.display()))?;

    let geometry = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            convert_to_ascii(&buffer, &config, &mut writer)
                .with_context(|| format!("failed to write {}", path.display()))?
        }
        None => {
            let mut stdout = io::stdout().lock();
            convert_to_ascii(&buffer, &config, &mut stdout).context("failed to write stdout")?
        }
    };

    report(&geometry, args.output.as_deref());
    Ok(())
}

/// Decode any format the image crate supports and reduce it to luma
fn load_grayscale(path: &Path) -> anyhow::Result<GrayImage> {
    let img = image::open(path).with_context(|| {
        format!(
            "failed to load image {} (supported formats include PNG, JPEG, BMP, GIF, TGA)",
            path.display()
        )
    })?;

    log::info!(
        "Image loaded: {}x{} pixels, {:?} converted to grayscale",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_luma8())
}

fn report(geometry: &Geometry, output: Option<&Path>) {
    let destination = output.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    log::info!(
        "Wrote {}x{} characters ({}x{} pixel blocks) to {}",
        geometry.output_width,
        geometry.output_height,
        geometry.block_width,
        geometry.block_height,
        destination
    );
}
