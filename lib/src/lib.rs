//! Phosphor Renderer - CPU-based CRT monitor stylizer
//!
//! This library turns an arbitrary raster image into a monochrome phosphor
//! look: colors are remapped through an inverted-brightness tint, then
//! optionally given a soft glow and horizontal scanlines, and finally
//! contrast-stretched.
//!
//! # Example
//! ```no_run
//! use phosphor_rendr::{process_image, Palette, PhosphorConfig};
//!
//! let input = image::open("logo.png").unwrap().to_rgba8();
//! let config = PhosphorConfig {
//!     palette: Palette::Shader,
//!     ..Default::default()
//! };
//! let output = process_image(input, &config).unwrap();
//! output.save("logo_crt.png").unwrap();
//! ```

pub mod config;
pub mod contrast;
pub mod error;
pub mod filters;
pub mod glow;
pub mod normalize;
pub mod processor;
pub mod remap;
pub mod scanlines;

// Re-export main types for convenience
pub use config::{Palette, PhosphorConfig};
pub use error::{PhosphorError, Result};
pub use processor::{
    ConversionSummary, convert_file, decode_image, encode_png, process_dynamic, process_image,
};
