//! Procedural placeholder icons: a radial gradient drawn as concentric
//! filled circles, orange at the rim fading to red at the center.

use crate::{
    config::{IconConfig, Palette},
    error::IconError,
    icon_gen::{ensure_dir, icon_file_name, icon_path, save_png},
};
use image::{Rgb, Rgba, RgbaImage};
use std::path::PathBuf;

/// Draw one placeholder per size of `config` and save them all.
pub fn generate_placeholder_icons(config: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
    ensure_dir(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for size in config.sizes.iter() {
        let icon = draw_placeholder(size, &config.palette);
        let output_path = icon_path(&config.output_dir, size);
        save_png(&icon, &output_path)?;
        println!("✓ Generated: {}", icon_file_name(size));
        written.push(output_path);
    }

    Ok(written)
}

/// Render a `size`×`size` placeholder.
///
/// Circles go from the largest radius down in steps of two, each one painted
/// over the previous, so every pixel ends up with the color of the smallest
/// circle covering it. Pixels outside the outer circle stay transparent.
pub fn draw_placeholder(size: u32, palette: &Palette) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let center = size / 2;
    let max_radius = size / 2;

    for radius in (1..=max_radius).rev().step_by(2) {
        let ratio = radius as f64 / max_radius as f64;
        fill_circle(&mut canvas, center, radius, circle_color(palette, ratio));
    }

    canvas
}

/// Color of the circle at `ratio` = radius / max radius.
pub fn circle_color(palette: &Palette, ratio: f64) -> Rgba<u8> {
    let Rgb(inner) = palette.inner;
    let Rgb(outer) = palette.outer;
    let mix = |i: usize| (outer[i] as f64 * ratio + inner[i] as f64 * (1.0 - ratio)) as u8;
    Rgba([mix(0), mix(1), mix(2), 255])
}

fn fill_circle(canvas: &mut RgbaImage, center: u32, radius: u32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let r = radius as i64;
    let c = center as i64;

    let y_range = (c - r).max(0)..=(c + r).min(height as i64 - 1);
    for y in y_range {
        let dy = y - c;
        for x in (c - r).max(0)..=(c + r).min(width as i64 - 1) {
            let dx = x - c;
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Radius of the last circle drawn for `size`, the one covering the center.
pub fn innermost_radius(size: u32) -> Option<u32> {
    let max_radius = size / 2;
    (1..=max_radius).rev().step_by(2).last()
}
