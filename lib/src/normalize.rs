use crate::error::{PhosphorError, Result};
use image::{DynamicImage, RgbaImage, imageops};

/// Largest grid a scale factor may produce (1 GiB of RGBA)
pub const MAX_SCALED_PIXELS: u64 = 1 << 28;

/// Compute the target dimensions for a uniform scale factor
///
/// Each axis is truncated toward zero, never below one pixel. Targets past
/// [`MAX_SCALED_PIXELS`] are rejected with `InvalidConfig`.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Result<(u32, u32)> {
    let too_large = || {
        PhosphorError::InvalidConfig(format!(
            "scale {} is too large for a {}x{} image",
            scale, width, height
        ))
    };
    let scale_axis = |dim: u32| {
        let scaled = (dim as f64 * scale).trunc();
        if !scaled.is_finite() || scaled > u32::MAX as f64 {
            return Err(too_large());
        }
        Ok((scaled as u32).max(1))
    };

    let (target_width, target_height) = (scale_axis(width)?, scale_axis(height)?);
    if target_width as u64 * target_height as u64 > MAX_SCALED_PIXELS {
        return Err(too_large());
    }
    Ok((target_width, target_height))
}

/// Resize an RGBA grid by `scale` using Lanczos3 filtering
///
/// Returns the input untouched when `scale` is exactly 1.0.
pub fn scale_image(input: RgbaImage, scale: f64) -> Result<RgbaImage> {
    if scale == 1.0 {
        return Ok(input);
    }

    let (width, height) = input.dimensions();
    let (target_width, target_height) = scaled_dimensions(width, height, scale)?;
    log::debug!(
        "scaling {}x{} -> {}x{} (factor {})",
        width,
        height,
        target_width,
        target_height,
        scale
    );

    Ok(imageops::resize(
        &input,
        target_width,
        target_height,
        imageops::FilterType::Lanczos3,
    ))
}

/// Convert any decoded image to an RGBA grid and apply the scale factor
///
/// Layouts without alpha become fully opaque.
pub fn normalize(input: DynamicImage, scale: f64) -> Result<RgbaImage> {
    scale_image(input.into_rgba8(), scale)
}
