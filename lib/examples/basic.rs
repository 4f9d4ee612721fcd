/// Basic example: Stylize a synthetic logo as a CRT phosphor image
///
/// This draws a dark ring on a transparent canvas and runs it through both palettes
use image::{Rgba, RgbaImage};
use phosphor_rendr::{Palette, PhosphorConfig, process_image};

fn main() {
    println!("Phosphor Renderer - Basic Example");
    println!("=================================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::new(width, height);

    // Dark ring with a light center, everything else transparent
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if (dist - radius).abs() < 6.0 {
                img.put_pixel(x, y, Rgba([20, 20, 20, 255]));
            } else if dist < radius {
                img.put_pixel(x, y, Rgba([200, 200, 200, 160]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);
    img.save("basic_input.png").expect("Failed to save input");
    println!("✓ Saved input to:  basic_input.png");

    for palette in Palette::ALL {
        let config = PhosphorConfig {
            palette,
            scale: 2.0,
            ..Default::default()
        };

        let output = process_image(img.clone(), &config).expect("Invalid configuration");
        let path = format!("basic_output_{}.png", palette);
        output.save(&path).expect("Failed to save output");

        let (out_w, out_h) = output.dimensions();
        println!("✓ Saved {} ({}x{}) to: {}", palette, out_w, out_h, path);
    }

    println!("\nCRT stylization complete!");
}
