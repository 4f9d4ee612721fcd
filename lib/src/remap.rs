use crate::config::Palette;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Remap one pixel through the inverted-brightness tint
///
/// brightness = (r + g + b) / 3 / 255, output = fg * (1 - brightness).
/// Channels are truncated toward zero, not rounded. Fully transparent
/// pixels collapse to (0, 0, 0, 0).
pub fn remap_pixel(pixel: Rgba<u8>, fg: [u8; 3]) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let brightness = (r as u32 + g as u32 + b as u32) as f64 / 3.0 / 255.0;
    let inverted = 1.0 - brightness;

    Rgba([
        (fg[0] as f64 * inverted) as u8,
        (fg[1] as f64 * inverted) as u8,
        (fg[2] as f64 * inverted) as u8,
        a,
    ])
}

/// Apply the palette remap to every pixel of the grid
pub fn remap_colors(mut grid: RgbaImage, palette: Palette) -> RgbaImage {
    let fg = palette.fg();

    grid.par_chunks_exact_mut(4).for_each(|px| {
        let out = remap_pixel(Rgba([px[0], px[1], px[2], px[3]]), fg);
        px.copy_from_slice(&out.0);
    });

    grid
}
