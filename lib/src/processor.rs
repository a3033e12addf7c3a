use crate::ascii::{Geometry, render_row, render_rows};
use crate::buffer::PixelBuffer;
use crate::config::AsciiConfig;
use crate::error::AsciiError;
use image::GrayImage;
use std::io::Write;

/// Converts a grayscale buffer to ASCII art and writes it to `sink`
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Derive the block grid from the image size and requested width
/// 3. Average each block and quantize it through the palette
/// 4. Write each row followed by `'\n'`, top to bottom, then flush
///
/// # Arguments
/// * `buffer` - Source pixels, already validated by [`PixelBuffer::new`]
/// * `config` - Output width, palette, aspect ratio and threading mode
/// * `sink` - Destination for the text
///
/// # Returns
/// The geometry that was rendered
///
/// # Errors
/// Configuration errors are returned before anything is written. Write or
/// flush failures surface as [`AsciiError::SinkUnavailable`]; rows already
/// written stay in the sink.
pub fn convert_to_ascii<W: Write>(
    buffer: &PixelBuffer<'_>,
    config: &AsciiConfig,
    sink: &mut W,
) -> Result<Geometry, AsciiError> {
    config.validate()?;

    let (width, height) = buffer.dimensions();
    let geometry = Geometry::compute(width, height, config.output_width, config.aspect_ratio);

    log::debug!(
        "Original: {}x{}, output (chars): {}x{}",
        width,
        height,
        geometry.output_width,
        geometry.output_height
    );
    log::debug!(
        "Sampling block size: {}x{} pixels",
        geometry.block_width,
        geometry.block_height
    );
    if geometry.output_height == 0 {
        log::warn!(
            "Image height {} is smaller than block height {}, nothing to render",
            height,
            geometry.block_height
        );
    }

    if config.parallel {
        // Rows are collected in order before anything is written
        for row in render_rows(buffer, &geometry, &config.palette, true) {
            writeln!(sink, "{row}")?;
        }
    } else {
        for y_char in 0..geometry.output_height {
            let row = render_row(buffer, &geometry, &config.palette, y_char);
            writeln!(sink, "{row}")?;
        }
    }
    sink.flush()?;

    Ok(geometry)
}

/// Converts a grayscale buffer to an ASCII art string
pub fn render_to_string(
    buffer: &PixelBuffer<'_>,
    config: &AsciiConfig,
) -> Result<String, AsciiError> {
    let mut out = Vec::new();
    convert_to_ascii(buffer, config, &mut out)?;

    // Palette characters and '\n' only, so this is always valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Converts a decoded grayscale image to an ASCII art string
///
/// # Example
/// ```
/// use asciify::{AsciiConfig, process_image};
/// use image::{GrayImage, Luma};
///
/// let img = GrayImage::from_pixel(8, 8, Luma([0]));
/// let art = process_image(&img, &AsciiConfig::with_width(4)).unwrap();
/// assert_eq!(art, "@@@@\n@@@@\n");
/// ```
pub fn process_image(input: &GrayImage, config: &AsciiConfig) -> Result<String, AsciiError> {
    let buffer = PixelBuffer::try_from(input)?;
    render_to_string(&buffer, config)
}
