use crate::config::SCANLINE_ALPHA;
use crate::filters::composite_over;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

/// Build the scanline layer: translucent black on every even row
pub fn scanline_overlay(width: u32, height: u32) -> RgbaImage {
    let mut overlay = RgbaImage::new(width, height);
    let line = Rgba([0, 0, 0, SCANLINE_ALPHA]);

    for y in (0..height).step_by(2) {
        draw_line_segment_mut(&mut overlay, (0.0, y as f32), (width as f32, y as f32), line);
    }

    overlay
}

/// Darken alternating rows to mimic a raster display
pub fn apply_scanlines(grid: RgbaImage) -> RgbaImage {
    let (width, height) = grid.dimensions();
    log::debug!("scanlines: {} rows over {}x{}", height.div_ceil(2), width, height);

    let overlay = scanline_overlay(width, height);
    composite_over(grid, &overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_rows() {
        let overlay = scanline_overlay(7, 6);
        for y in 0..6 {
            for x in 0..7 {
                let expected = if y % 2 == 0 {
                    Rgba([0, 0, 0, SCANLINE_ALPHA])
                } else {
                    Rgba([0, 0, 0, 0])
                };
                assert_eq!(overlay.get_pixel(x, y), &expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_overlay_single_column() {
        let overlay = scanline_overlay(1, 3);
        assert_eq!(overlay.get_pixel(0, 0)[3], SCANLINE_ALPHA);
        assert_eq!(overlay.get_pixel(0, 1)[3], 0);
        assert_eq!(overlay.get_pixel(0, 2)[3], SCANLINE_ALPHA);
    }

    #[test]
    fn test_odd_rows_untouched() {
        let mut img = RgbaImage::new(10, 10);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgba([(x * 20) as u8, (y * 20) as u8, 77, (x * 25 + y) as u8]);
        }
        let out = apply_scanlines(img.clone());

        for y in (1..10).step_by(2) {
            for x in 0..10 {
                assert_eq!(out.get_pixel(x, y), img.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_even_rows_darken() {
        let img = RgbaImage::from_pixel(5, 4, Rgba([200, 200, 200, 100]));
        let out = apply_scanlines(img);

        let even = out.get_pixel(2, 0);
        assert!(even[3] > 100);
        assert!(even[0] < 200);
        assert_eq!(out.get_pixel(2, 1), &Rgba([200, 200, 200, 100]));
    }

    #[test]
    fn test_opaque_even_rows_stay_opaque() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        let out = apply_scanlines(img);
        let px = out.get_pixel(0, 0);
        assert_eq!(px[3], 255);
        // 255 * (1 - 40/255) = 215
        assert_eq!(px[0], 215);
    }
}
