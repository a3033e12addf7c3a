use crate::error::AsciiError;
use crate::lut::Palette;

/// Default number of character columns
pub const DEFAULT_OUTPUT_WIDTH: u32 = 80;

/// Text cells are modeled as twice as tall as they are wide
pub const DEFAULT_ASPECT_RATIO: f64 = 2.0;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Character columns per output row, must be >= 1
    pub output_width: u32,

    /// Darkest-to-lightest glyph ramp
    pub palette: Palette,

    /// Source rows merged per source column (cell height / cell width)
    pub aspect_ratio: f64,

    /// Compute rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            palette: Palette::default(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            parallel: true,
        }
    }
}

impl AsciiConfig {
    /// Default configuration with a specific column count
    pub fn with_width(output_width: u32) -> Self {
        Self {
            output_width,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), AsciiError> {
        if self.output_width == 0 {
            return Err(AsciiError::InvalidOutputWidth);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(AsciiError::InvalidAspectRatio(self.aspect_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AsciiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.to_string(), "@#S%?*+;:,.- ");
    }

    #[test]
    fn test_invalid_output_width() {
        let config = AsciiConfig::with_width(0);
        assert!(matches!(
            config.validate(),
            Err(AsciiError::InvalidOutputWidth)
        ));
    }

    #[test]
    fn test_invalid_aspect_ratio() {
        let mut config = AsciiConfig::default();
        config.aspect_ratio = 0.0;
        assert!(config.validate().is_err());

        config.aspect_ratio = -2.0;
        assert!(config.validate().is_err());

        config.aspect_ratio = f64::NAN;
        assert!(config.validate().is_err());

        config.aspect_ratio = f64::INFINITY;
        assert!(config.validate().is_err());
    }
}
