//! asciify - grayscale image to ASCII art converter
//!
//! The source image is split into a grid of pixel blocks sized so that the
//! output has the requested number of columns. Blocks are taller than they
//! are wide to compensate for text cells, and each block's mean brightness
//! picks one character from a darkest-to-lightest palette.
//!
//! Decoding image files is left to the caller; the converter consumes a
//! one-byte-per-pixel grayscale buffer.
//!
//! # Example
//! ```no_run
//! use asciify::{AsciiConfig, process_image};
//!
//! let input = image::open("photo.jpg").unwrap().to_luma8();
//! let art = process_image(&input, &AsciiConfig::with_width(100)).unwrap();
//! print!("{art}");
//! ```

pub mod ascii;
pub mod buffer;
pub mod config;
pub mod error;
pub mod lut;
pub mod processor;

// Re-export main types for convenience
pub use ascii::Geometry;
pub use buffer::PixelBuffer;
pub use config::AsciiConfig;
pub use error::AsciiError;
pub use lut::{DEFAULT_PALETTE, Palette};
pub use processor::{convert_to_ascii, process_image, render_to_string};
