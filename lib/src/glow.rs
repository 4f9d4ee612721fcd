use crate::config::GLOW_RADIUS;
use crate::filters::{composite_over, gaussian_blur};
use image::RgbaImage;

/// Add a soft phosphor bloom around the remapped image
///
/// The blurred copy is laid onto a transparent canvas first, then the sharp
/// image is composited over it, so the glow only shows where the sharp layer
/// is translucent or absent.
pub fn apply_glow(sharp: RgbaImage) -> RgbaImage {
    let (width, height) = sharp.dimensions();
    log::debug!("glow: blurring {}x{} with radius {}", width, height, GLOW_RADIUS);

    let blurred = gaussian_blur(&sharp, GLOW_RADIUS);

    let canvas = RgbaImage::new(width, height);
    let canvas = composite_over(canvas, &blurred);
    composite_over(canvas, &sharp)
}
