use crate::{
    config::IconConfig,
    error::IconError,
    manifest, placeholder, resize,
};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Which generator a run ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Icons were resized from the given source image.
    Resized { success: bool },
    /// A source was given but does not exist, placeholders were drawn instead.
    FallbackPlaceholder,
    /// No source was given.
    Placeholder,
}

/// Pick a generator for `source` and run it against `config`.
///
/// A failing resize is reported and returned as `Mode::Resized { success: false }`.
/// Placeholder failures are returned as errors since there is nothing left to
/// fall back to.
pub fn generate_icons(source: Option<&Path>, config: &IconConfig) -> Result<Mode, IconError> {
    println!("🔥 PWA Icon Generator\n");
    log::debug!("Output directory: {}", config.output_dir.display());

    match source {
        Some(path) if path.exists() => {
            let success = resize::create_pwa_icons(path, config);
            Ok(Mode::Resized { success })
        }
        Some(path) => {
            println!("❌ File not found: {}", path.display());
            println!("💡 Creating placeholder icons...");
            run_placeholder(config)?;
            Ok(Mode::FallbackPlaceholder)
        }
        None => {
            println!("💡 No source image given, creating placeholder icons...");
            run_placeholder(config)?;
            println!("\n📝 To use a custom icon:");
            println!("   pwa-icons path/to/your/icon.png");
            Ok(Mode::Placeholder)
        }
    }
}

fn run_placeholder(config: &IconConfig) -> Result<(), IconError> {
    let written = placeholder::generate_placeholder_icons(config)?;
    if config.write_manifest {
        manifest::write_manifest(&config.output_dir, &config.sizes)?;
    }
    report_written(&written, "placeholder icons", &config.output_dir);
    Ok(())
}

/// Print the summary line of a finished run.
pub(crate) fn report_written(written: &[PathBuf], what: &str, output_dir: &Path) {
    println!("\n✅ Generated {} {what}!", written.len());
    println!("📁 Output directory: {}", output_dir.display());
}

/// `icon-<size>x<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(icon_file_name(size))
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    create_dir_all(dir).map_err(|err| IconError::io(dir, err))
}

/// Write an RGBA buffer as a best-compression PNG, replacing any existing file.
pub(crate) fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|err| IconError::io(path, err))?;
    let mut out = BufWriter::new(file);
    write_png(image.as_raw(), &mut out, image.width(), image.height())
        .map_err(|err| IconError::encode(path, err))?;
    out.flush().map_err(|err| IconError::io(path, err))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)
}
