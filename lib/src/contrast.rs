use image::RgbaImage;
use rayon::prelude::*;

/// Rec. 601 luma of an RGB triple, in [0, 255]
fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Mean gray level across every pixel of the grid, rounded to an integer
///
/// Alpha is ignored, so transparent pixels count with their stored color.
/// Returns `None` for an empty grid.
pub fn mean_luminance(grid: &RgbaImage) -> Option<f32> {
    let count = grid.width() as usize * grid.height() as usize;
    if count == 0 {
        return None;
    }

    let total: f64 = grid
        .par_chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .sum();

    Some((total / count as f64).round() as f32)
}

/// Stretch every color channel away from the image mean by `factor`
///
/// Two passes: the mean is computed over the whole grid before any pixel is
/// adjusted. Alpha is left as is.
pub fn enhance_contrast(mut grid: RgbaImage, factor: f32) -> RgbaImage {
    let Some(mean) = mean_luminance(&grid) else {
        return grid;
    };
    log::debug!("contrast: mean gray {} factor {}", mean, factor);

    grid.par_chunks_exact_mut(4).for_each(|px| {
        for channel in &mut px[..3] {
            let stretched = mean + (*channel as f32 - mean) * factor;
            *channel = stretched.round().clamp(0.0, 255.0) as u8;
        }
    });

    grid
}
