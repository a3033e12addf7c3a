use thiserror::Error;

/// Errors reported by the ASCII conversion pipeline
///
/// Input errors are detected before anything is written to the sink.
/// A [`AsciiError::SinkUnavailable`] may leave partial output behind.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// Pixel data is absent or has zero length
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    /// Image width or height is zero
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length does not match width * height
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Requested output width is zero
    #[error("output width must be at least 1 character")]
    InvalidOutputWidth,

    /// Palette cannot represent a brightness ramp
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Character aspect ratio is not a positive finite number
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),

    /// The output destination rejected a write or flush
    #[error("output sink unavailable: {0}")]
    SinkUnavailable(#[source] std::io::Error),
}

impl From<std::io::Error> for AsciiError {
    fn from(err: std::io::Error) -> Self {
        AsciiError::SinkUnavailable(err)
    }
}
