use crate::buffer::PixelBuffer;
use crate::lut::Palette;
use rayon::prelude::*;

/// Block grid derived from the image size and requested column count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Source columns merged into one character
    pub block_width: u32,
    /// Source rows merged into one character
    pub block_height: u32,
    /// Characters per row, exactly as requested
    pub output_width: u32,
    /// Rows of characters, `height / block_height`
    pub output_height: u32,
}

impl Geometry {
    /// Derive the sampling grid
    ///
    /// The block height comes from the unclamped block width, so an image
    /// narrower than the requested width samples 1x1 blocks. Both block
    /// dimensions are clamped to at least 1. Source rows past
    /// `output_height * block_height` are not rendered.
    ///
    /// # Arguments
    /// * `width` - Source width in pixels
    /// * `height` - Source height in pixels
    /// * `output_width` - Requested character columns (>= 1)
    /// * `aspect_ratio` - Character cell height / width
    pub fn compute(width: u32, height: u32, output_width: u32, aspect_ratio: f64) -> Self {
        let raw_block_width = width / output_width.max(1);
        let block_width = raw_block_width.max(1);

        // Float to int casts saturate, so huge ratios cannot wrap
        let block_height = ((f64::from(raw_block_width) * aspect_ratio).floor() as u32).max(1);

        Self {
            block_width,
            block_height,
            output_width,
            output_height: height / block_height,
        }
    }

    /// Total number of characters, excluding line breaks
    pub fn cell_count(&self) -> usize {
        self.output_width as usize * self.output_height as usize
    }
}

/// Mean brightness of the block behind one output cell
///
/// The block is clipped to the image bounds. A block lying entirely outside
/// the image covers no pixels and reads as 0.
///
/// # Arguments
/// * `buffer` - Source pixels
/// * `geometry` - Grid produced by [`Geometry::compute`]
/// * `x_char` - Output column
/// * `y_char` - Output row
pub fn block_mean(buffer: &PixelBuffer<'_>, geometry: &Geometry, x_char: u32, y_char: u32) -> u8 {
    let (width, height) = (buffer.width() as usize, buffer.height() as usize);

    let start_x = (x_char as usize * geometry.block_width as usize).min(width);
    let end_x = (start_x + geometry.block_width as usize).min(width);
    let start_y = (y_char as usize * geometry.block_height as usize).min(height);
    let end_y = (start_y + geometry.block_height as usize).min(height);

    let pixel_count = ((end_x - start_x) * (end_y - start_y)) as u64;
    if pixel_count == 0 {
        return 0;
    }

    let total: u64 = (start_y..end_y)
        .map(|y| {
            buffer.row(y as u32)[start_x..end_x]
                .iter()
                .map(|&p| u64::from(p))
                .sum::<u64>()
        })
        .sum();

    (total / pixel_count) as u8
}

/// Render one output row, without the line terminator
pub fn render_row(
    buffer: &PixelBuffer<'_>,
    geometry: &Geometry,
    palette: &Palette,
    y_char: u32,
) -> String {
    (0..geometry.output_width)
        .map(|x_char| palette.quantize(i32::from(block_mean(buffer, geometry, x_char, y_char))))
        .collect()
}

/// Render every output row, top to bottom
///
/// With `parallel` set, rows are computed on the rayon pool; the returned
/// vector is in row order either way.
pub fn render_rows(
    buffer: &PixelBuffer<'_>,
    geometry: &Geometry,
    palette: &Palette,
    parallel: bool,
) -> Vec<String> {
    if parallel {
        (0..geometry.output_height)
            .into_par_iter()
            .map(|y_char| render_row(buffer, geometry, palette, y_char))
            .collect()
    } else {
        (0..geometry.output_height)
            .map(|y_char| render_row(buffer, geometry, palette, y_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        (0..width * height)
            .map(|i| ((i % width) * 255 / (width - 1).max(1)) as u8)
            .collect()
    }

    #[test]
    fn test_geometry_even_split() {
        let g = Geometry::compute(4, 4, 2, 2.0);
        assert_eq!(g.block_width, 2);
        assert_eq!(g.block_height, 4);
        assert_eq!(g.output_width, 2);
        assert_eq!(g.output_height, 1);
    }

    #[test]
    fn test_geometry_wider_than_image() {
        let g = Geometry::compute(2, 6, 10, 2.0);
        assert_eq!(g.block_width, 1);
        assert_eq!(g.block_height, 1);
        assert_eq!(g.output_width, 10);
        assert_eq!(g.output_height, 6);
    }

    #[test]
    fn test_geometry_drops_remainder_rows() {
        // block 3x6, 20 / 6 = 3 rows, 2 rows dropped
        let g = Geometry::compute(30, 20, 10, 2.0);
        assert_eq!(g.block_width, 3);
        assert_eq!(g.block_height, 6);
        assert_eq!(g.output_height, 3);
    }

    #[test]
    fn test_geometry_small_aspect_clamps() {
        let g = Geometry::compute(10, 10, 5, 0.25);
        assert_eq!(g.block_width, 2);
        assert_eq!(g.block_height, 1);
        assert_eq!(g.output_height, 10);
    }

    #[test]
    fn test_geometry_image_shorter_than_block() {
        let g = Geometry::compute(100, 3, 10, 2.0);
        assert_eq!(g.block_height, 20);
        assert_eq!(g.output_height, 0);
        assert_eq!(g.cell_count(), 0);
    }

    #[test]
    fn test_block_mean_uniform() {
        let data = vec![77u8; 64];
        let buf = PixelBuffer::new(&data, 8, 8).unwrap();
        let g = Geometry::compute(8, 8, 4, 2.0);
        for y in 0..g.output_height {
            for x in 0..g.output_width {
                assert_eq!(block_mean(&buf, &g, x, y), 77);
            }
        }
    }

    #[test]
    fn test_block_mean_truncates() {
        // 2x1 block of [0, 255]: 255 / 2 = 127
        let data = [0u8, 255];
        let buf = PixelBuffer::new(&data, 2, 1).unwrap();
        let g = Geometry {
            block_width: 2,
            block_height: 1,
            output_width: 1,
            output_height: 1,
        };
        assert_eq!(block_mean(&buf, &g, 0, 0), 127);
    }

    #[test]
    fn test_block_mean_clipped_at_right_edge() {
        // 5 columns, blocks of 2: last block is column 4 only
        let data = [0u8, 0, 0, 0, 200];
        let buf = PixelBuffer::new(&data, 5, 1).unwrap();
        let g = Geometry {
            block_width: 2,
            block_height: 1,
            output_width: 3,
            output_height: 1,
        };
        assert_eq!(block_mean(&buf, &g, 2, 0), 200);
    }

    #[test]
    fn test_block_mean_outside_image_is_zero() {
        let data = [255u8; 4];
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        let g = Geometry::compute(2, 2, 10, 2.0);
        assert_eq!(block_mean(&buf, &g, 1, 0), 255);
        assert_eq!(block_mean(&buf, &g, 2, 0), 0);
        assert_eq!(block_mean(&buf, &g, 9, 1), 0);
    }

    #[test]
    fn test_block_mean_large_block_no_overflow() {
        let data = vec![255u8; 4096 * 64];
        let buf = PixelBuffer::new(&data, 4096, 64).unwrap();
        let g = Geometry::compute(4096, 64, 1, 0.015_625);
        assert_eq!(g.block_width, 4096);
        assert_eq!(g.block_height, 64);
        assert_eq!(block_mean(&buf, &g, 0, 0), 255);
    }

    #[test]
    fn test_render_row_gradient_left_to_right() {
        let data = gradient(26, 2);
        let buf = PixelBuffer::new(&data, 26, 2).unwrap();
        let g = Geometry::compute(26, 2, 13, 0.5);
        let palette = Palette::default();
        let row = render_row(&buf, &g, &palette, 0);

        assert_eq!(row.chars().count(), 13);
        assert!(row.starts_with('@'));

        let indices: Vec<usize> = row
            .chars()
            .map(|c| palette.chars().iter().position(|&p| p == c).unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        assert!(indices[12] >= 11);
    }

    #[test]
    fn test_render_rows_parallel_matches_sequential() {
        let data = gradient(97, 61);
        let buf = PixelBuffer::new(&data, 97, 61).unwrap();
        let g = Geometry::compute(97, 61, 17, 2.0);
        let palette = Palette::default();

        let seq = render_rows(&buf, &g, &palette, false);
        let par = render_rows(&buf, &g, &palette, true);
        assert_eq!(seq.len(), g.output_height as usize);
        assert_eq!(seq, par);
    }
}
