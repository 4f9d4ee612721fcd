use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;

/// Calculate Gaussian weight for a given sigma and position
///
/// Formula: (1 / sqrt(2π σ²)) * exp(-(pos²) / (2σ²))
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
/// * `pos` - Position relative to center
///
/// # Returns
/// Gaussian weight at the given position
pub fn gaussian(sigma: f32, pos: f32) -> f32 {
    let two_pi = 2.0 * std::f32::consts::PI;
    let sigma_sq = sigma * sigma;

    (1.0 / (two_pi * sigma_sq).sqrt()) * (-pos * pos / (2.0 * sigma_sq)).exp()
}

/// Build a normalized 1D Gaussian kernel of `2 * radius + 1` taps
///
/// Sigma is half the radius, so the outermost tap weighs about 14% of the
/// center and the tails past `radius` carry under 5% of the mass. This keeps
/// the bloom tight around strokes; a sigma equal to the radius would spread
/// a lone pixel's glow so thin it rounds away.
pub fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let sigma = (radius as f32 / 2.0).max(0.5);
    let radius = radius as i32;

    let weights: Vec<f32> = (-radius..=radius)
        .map(|offset| gaussian(sigma, offset as f32))
        .collect();
    let weight_sum: f32 = weights.iter().sum();

    weights.into_iter().map(|w| w / weight_sum).collect()
}

/// Apply horizontal Gaussian blur to every RGBA channel
///
/// Samples past the border are clamped to the edge pixel.
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `kernel` - Normalized kernel from [`gaussian_kernel`]
///
/// # Returns
/// Horizontally blurred image
pub fn gaussian_blur_h(img: &RgbaImage, kernel: &[f32]) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }
    let mut output = RgbaImage::new(width, height);
    let radius = (kernel.len() / 2) as i32;

    output
        .par_chunks_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut sum = [0.0f32; 4];

                // Convolve with horizontal Gaussian kernel
                for (tap, &weight) in kernel.iter().enumerate() {
                    let offset = tap as i32 - radius;
                    let sample_x = (x as i32 + offset).clamp(0, width as i32 - 1) as u32;
                    let sample = img.get_pixel(sample_x, y as u32);
                    for c in 0..4 {
                        sum[c] += sample[c] as f32 * weight;
                    }
                }

                let idx = x as usize * 4;
                for c in 0..4 {
                    row[idx + c] = sum[c].round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    output
}

/// Apply vertical Gaussian blur to every RGBA channel
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `kernel` - Normalized kernel from [`gaussian_kernel`]
///
/// # Returns
/// Vertically blurred image
pub fn gaussian_blur_v(img: &RgbaImage, kernel: &[f32]) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }
    let mut output = RgbaImage::new(width, height);
    let radius = (kernel.len() / 2) as i32;

    output
        .par_chunks_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut sum = [0.0f32; 4];

                // Convolve with vertical Gaussian kernel
                for (tap, &weight) in kernel.iter().enumerate() {
                    let offset = tap as i32 - radius;
                    let sample_y = (y as i32 + offset).clamp(0, height as i32 - 1) as u32;
                    let sample = img.get_pixel(x, sample_y);
                    for c in 0..4 {
                        sum[c] += sample[c] as f32 * weight;
                    }
                }

                let idx = x as usize * 4;
                for c in 0..4 {
                    row[idx + c] = sum[c].round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    output
}

/// Apply full 2D Gaussian blur (separable)
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `radius` - Kernel radius in pixels
///
/// # Returns
/// Blurred image
pub fn gaussian_blur(img: &RgbaImage, radius: u32) -> RgbaImage {
    let kernel = gaussian_kernel(radius);
    let temp = gaussian_blur_h(img, &kernel);
    gaussian_blur_v(&temp, &kernel)
}

/// Porter-Duff "over": draw `src` atop `dst`
///
/// Delegates to [`Pixel::blend`], which works in straight alpha and
/// truncates back to `u8`. A fully transparent source leaves `dst`
/// bit-identical and a fully opaque one replaces it.
pub fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let mut out = dst;
    out.blend(&src);
    out
}

/// Composite `src` over `dst` pixel by pixel
///
/// # Panics
/// If the two images differ in size.
pub fn composite_over(mut dst: RgbaImage, src: &RgbaImage) -> RgbaImage {
    assert_eq!(
        dst.dimensions(),
        src.dimensions(),
        "Composited layers must share dimensions"
    );

    dst.par_chunks_exact_mut(4)
        .zip(src.par_chunks_exact(4))
        .for_each(|(d, s)| {
            Rgba::from_slice_mut(d).blend(Rgba::from_slice(s));
        });

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_at_center() {
        let sigma = 1.0;
        let weight = gaussian(sigma, 0.0);
        // At center (pos=0), weight should be maximum
        assert!(weight > 0.3);
    }

    #[test]
    fn test_gaussian_symmetry() {
        let sigma = 2.0;
        let w1 = gaussian(sigma, 1.0);
        let w2 = gaussian(sigma, -1.0);
        // Should be symmetric
        assert!((w1 - w2).abs() < 0.0001);
    }

    #[test]
    fn test_gaussian_kernel_normalized() {
        let kernel = gaussian_kernel(5);
        assert_eq!(kernel.len(), 11);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(kernel[5] > kernel[4] && kernel[4] > kernel[0]);
    }

    #[test]
    fn test_gaussian_kernel_tail_is_small() {
        let kernel = gaussian_kernel(5);
        // exp(-25 / 12.5) relative to the center tap
        let ratio = kernel[0] / kernel[5];
        assert!((ratio - (-2.0f32).exp()).abs() < 1e-4);
    }

    #[test]
    fn test_gaussian_blur_preserves_dimensions() {
        let img = RgbaImage::new(64, 48);
        let blurred = gaussian_blur(&img, 5);
        assert_eq!(blurred.dimensions(), (64, 48));
    }

    #[test]
    fn test_gaussian_blur_uniform_is_stable() {
        let img = RgbaImage::from_pixel(20, 20, Rgba([90, 180, 30, 200]));
        let blurred = gaussian_blur(&img, 5);
        for pixel in blurred.pixels() {
            assert_eq!(pixel, &Rgba([90, 180, 30, 200]));
        }
    }

    #[test]
    fn test_gaussian_blur_spreads_point() {
        let mut img = RgbaImage::new(21, 21);
        img.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let blurred = gaussian_blur(&img, 5);

        let center = blurred.get_pixel(10, 10)[3];
        let near = blurred.get_pixel(12, 10)[3];
        assert!(center < 255);
        assert!(near > 0 && near <= center);
        assert_eq!(blurred.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_gaussian_blur_empty_image() {
        let img = RgbaImage::new(0, 0);
        assert_eq!(gaussian_blur(&img, 5).dimensions(), (0, 0));
    }

    #[test]
    fn test_over_transparent_source_keeps_dst() {
        let dst = Rgba([12, 34, 56, 78]);
        assert_eq!(over(Rgba([255, 0, 0, 0]), dst), dst);
    }

    #[test]
    fn test_over_opaque_source_replaces_dst() {
        let src = Rgba([1, 2, 3, 255]);
        assert_eq!(over(src, Rgba([200, 200, 200, 255])), src);
    }

    #[test]
    fn test_over_onto_transparent_keeps_src() {
        let src = Rgba([100, 150, 200, 40]);
        assert_eq!(over(src, Rgba([0, 0, 0, 0])), src);
    }

    #[test]
    fn test_over_half_black_on_white() {
        // 255 * (1 - 128/255) = 127; blending truncates the alpha sum to 254
        let out = over(Rgba([0, 0, 0, 128]), Rgba([255, 255, 255, 255]));
        assert_eq!(out, Rgba([127, 127, 127, 254]));
    }

    #[test]
    fn test_over_translucent_layers() {
        let out = over(Rgba([0, 0, 0, 40]), Rgba([200, 200, 200, 100]));
        assert_eq!(out, Rgba([135, 135, 135, 124]));
    }

    #[test]
    fn test_composite_over_layers() {
        let dst = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let mut src = RgbaImage::new(4, 4);
        src.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let out = composite_over(dst, &src);

        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(3, 3), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    #[should_panic(expected = "must share dimensions")]
    fn test_composite_over_size_mismatch() {
        composite_over(RgbaImage::new(2, 2), &RgbaImage::new(3, 3));
    }
}
