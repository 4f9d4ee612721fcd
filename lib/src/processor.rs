use crate::config::{CONTRAST_FACTOR, Palette, PhosphorConfig};
use crate::contrast::enhance_contrast;
use crate::error::{PhosphorError, Result};
use crate::glow::apply_glow;
use crate::normalize::{normalize, scale_image};
use crate::remap::remap_colors;
use crate::scanlines::apply_scanlines;
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Facts about a finished conversion, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub scanlines: bool,
    pub glow: bool,
}

/// Runs the stylization stages over an RGBA grid
///
/// This implements the full pipeline:
/// 1. Scale (Lanczos3) when `config.scale` is not 1.0
/// 2. Remap every pixel through the inverted-brightness palette tint
/// 3. Glow: blurred copy under the sharp image (optional)
/// 4. Scanlines on even rows (optional)
/// 5. Contrast stretch around the mean gray level
///
/// # Arguments
/// * `input` - The RGBA grid to stylize, consumed by the pipeline
/// * `config` - Palette and effect switches
///
/// # Returns
/// The stylized grid, or `InvalidConfig` when the config does not validate
/// or the scale factor would produce an oversized grid
pub fn process_image(input: RgbaImage, config: &PhosphorConfig) -> Result<RgbaImage> {
    config.validate()?;

    let grid = scale_image(input, config.scale)?;
    Ok(run_stages(grid, config))
}

/// Normalizes a decoded image of any layout, then stylizes it
pub fn process_dynamic(input: DynamicImage, config: &PhosphorConfig) -> Result<RgbaImage> {
    config.validate()?;

    let grid = normalize(input, config.scale)?;
    Ok(run_stages(grid, config))
}

fn run_stages(grid: RgbaImage, config: &PhosphorConfig) -> RgbaImage {
    let (width, height) = grid.dimensions();
    log::debug!(
        "stylizing {}x{} palette={} glow={} scanlines={}",
        width,
        height,
        config.palette,
        config.glow,
        config.scanlines
    );

    let mut grid = remap_colors(grid, config.palette);

    if config.glow {
        grid = apply_glow(grid);
    }

    if config.scanlines {
        grid = apply_scanlines(grid);
    }

    enhance_contrast(grid, CONTRAST_FACTOR)
}

/// Decode an image file, guessing the format from its contents
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.decode().map_err(PhosphorError::Decode)
}

/// Write the grid as PNG regardless of the path's extension
///
/// An empty grid is refused with `Encode` before the file is created.
pub fn encode_png(grid: &RgbaImage, path: &Path) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(PhosphorError::Encode(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::DimensionMismatch),
        )));
    }

    grid.save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => PhosphorError::Io(io),
            other => PhosphorError::Encode(other),
        })
}

/// Decode `input`, stylize it and write the result to `output` as PNG
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &PhosphorConfig,
) -> Result<ConversionSummary> {
    config.validate()?;

    let decoded = decode_image(input)?;
    let result = process_dynamic(decoded, config)?;
    encode_png(&result, output)?;

    log::info!("processed {} -> {}", input.display(), output.display());

    Ok(ConversionSummary {
        width: result.width(),
        height: result.height(),
        palette: config.palette,
        scanlines: config.scanlines,
        glow: config.glow,
    })
}
