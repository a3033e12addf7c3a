use crate::error::AsciiError;
use image::GrayImage;

/// Borrowed view of a row-major, one-byte-per-pixel grayscale image
///
/// Construction checks that the dimensions are non-zero and that the slice
/// holds exactly `width * height` samples. The bytes stay owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw grayscale samples
    ///
    /// # Errors
    /// * [`AsciiError::EmptyBuffer`] if `data` is empty
    /// * [`AsciiError::InvalidDimensions`] if `width` or `height` is zero
    /// * [`AsciiError::BufferSizeMismatch`] if `data.len() != width * height`
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, AsciiError> {
        if data.is_empty() {
            return Err(AsciiError::EmptyBuffer);
        }
        if width == 0 || height == 0 {
            return Err(AsciiError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(AsciiError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One image row as a slice
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }
}

impl<'a> TryFrom<&'a GrayImage> for PixelBuffer<'a> {
    type Error = AsciiError;

    fn try_from(img: &'a GrayImage) -> Result<Self, Self::Error> {
        let (width, height) = img.dimensions();
        PixelBuffer::new(img.as_raw(), width, height)
    }
}
