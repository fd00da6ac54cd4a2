//! Resize a source image into the configured icon set.

use crate::{
    config::IconConfig,
    error::IconError,
    icon_gen::{ensure_dir, icon_file_name, icon_path, report_written, save_png},
    manifest,
};
use image::{imageops::FilterType, DynamicImage};
use std::path::{Path, PathBuf};

/// Outcome of a successful resize run.
#[derive(Debug, Clone)]
pub struct Resized {
    /// Width and height of the source before resizing.
    pub source_dimensions: (u32, u32),
    /// Written icon files, in size-set order.
    pub written: Vec<PathBuf>,
}

/// Resize `source` into every size of `config` and report the outcome on
/// stdout. Returns `false` if any step failed; files written before the
/// failure are left in place.
pub fn create_pwa_icons(source: &Path, config: &IconConfig) -> bool {
    match resize_icons(source, config) {
        Ok(resized) => {
            report_written(&resized.written, "icons", &config.output_dir);
            true
        }
        Err(err) => {
            println!("❌ Error: {err}");
            false
        }
    }
}

/// Resize `source` into every size of `config`.
///
/// Stops at the first failure. Sizes after the failing one are not attempted.
pub fn resize_icons(source: &Path, config: &IconConfig) -> Result<Resized, IconError> {
    ensure_dir(&config.output_dir)?;

    let image = load_image(source)?;
    let source_dimensions = (image.width(), image.height());
    println!("✓ Opened image: {}", source.display());
    println!(
        "  Original size: {}x{}",
        source_dimensions.0, source_dimensions.1
    );

    let largest = config.sizes.largest();
    if source_dimensions.0.min(source_dimensions.1) < largest {
        println!("  Note: source is smaller than {largest}x{largest}, larger icons will be upscaled");
    }

    let mut written = Vec::with_capacity(config.sizes.len());
    for size in config.sizes.iter() {
        let resized = image
            .resize_exact(size, size, FilterType::Lanczos3)
            .into_rgba8();
        let output_path = icon_path(&config.output_dir, size);
        save_png(&resized, &output_path)?;
        println!("✓ Generated: {}", icon_file_name(size));
        written.push(output_path);
    }

    if config.write_manifest {
        manifest::write_manifest(&config.output_dir, &config.sizes)?;
    }

    Ok(Resized {
        source_dimensions,
        written,
    })
}

/// Open and decode `path`, normalising the pixels to 8-bit RGBA.
///
/// Sources without an alpha channel get a fully opaque one.
pub fn load_image(path: &Path) -> Result<DynamicImage, IconError> {
    let source = image::open(path).map_err(|err| IconError::open(path, err))?;

    match source {
        DynamicImage::ImageRgba8(_) => Ok(source),
        other => {
            log::debug!(
                "Converting {} from {:?} to RGBA8",
                path.display(),
                other.color()
            );
            Ok(DynamicImage::ImageRgba8(other.into_rgba8()))
        }
    }
}
