/// Basic example: Convert a synthetic grayscale image to ASCII art
///
/// This draws a horizontal gradient with a bright circle and a dark ring,
/// then prints the rendering at a few widths
use asciify::{AsciiConfig, Palette, process_image};
use image::{GrayImage, Luma};

fn main() {
    println!("asciify - Basic Example");
    println!("=======================\n");

    let width = 320;
    let height = 240;
    let mut img = GrayImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 70.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            let value = if dist < radius {
                255
            } else if (dist - radius).abs() < 8.0 {
                0
            } else {
                (x * 255 / (width - 1)) as u8
            };
            img.put_pixel(x, y, Luma([value]));
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    for columns in [40, 80] {
        let config = AsciiConfig::with_width(columns);
        match process_image(&img, &config) {
            Ok(art) => {
                println!("--- {} columns ---", columns);
                print!("{art}");
                println!();
            }
            Err(e) => eprintln!("Conversion failed: {e}"),
        }
    }

    // Inverted ramp for light terminal backgrounds
    let config = AsciiConfig {
        palette: Palette::new(" .-,:;+*?%S#@").expect("static palette is valid"),
        ..AsciiConfig::with_width(60)
    };
    match process_image(&img, &config) {
        Ok(art) => {
            println!("--- 60 columns, inverted palette ---");
            print!("{art}");
        }
        Err(e) => eprintln!("Conversion failed: {e}"),
    }
}
