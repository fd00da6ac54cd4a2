use image::{io::Reader as ImageReader, ColorType};
use pwa_icons::{config::default_output_dir, icon_gen::icon_path, PWA_SIZES};
use std::path::PathBuf;

fn main() {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_output_dir);

    println!("Checking icons in: {}", dir.display());

    let mut ok = 0;
    for size in PWA_SIZES {
        let path = icon_path(&dir, size);
        let decoded = ImageReader::open(&path).map(|reader| reader.decode());

        match decoded {
            Ok(Ok(img)) if img.width() == size && img.height() == size => {
                if img.color() == ColorType::Rgba8 {
                    println!("  ✓ {}", path.display());
                    ok += 1;
                } else {
                    println!("  ⚠ {} is {:?}, expected Rgba8", path.display(), img.color());
                }
            }
            Ok(Ok(img)) => println!(
                "  ⚠ {} is {}x{}, expected {size}x{size}",
                path.display(),
                img.width(),
                img.height()
            ),
            Ok(Err(err)) => println!("  ❌ {}: {err}", path.display()),
            Err(err) => println!("  ❌ {}: {err}", path.display()),
        }
    }

    println!("\n{ok} out of {} icons are valid", PWA_SIZES.len());
    if ok != PWA_SIZES.len() {
        std::process::exit(1);
    }
}
