use anyhow::{Context, Result};
use clap::Parser;
use image::Rgb;
use pwa_icons::{
    config::{default_output_dir, parse_color},
    generate_icons, IconConfig, Palette, SizeSet,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icons",
    about = "Generate the PNG icons of a web app manifest from a source image, or draw placeholders"
)]
struct Args {
    /// Path to the source image. Placeholder icons are drawn when omitted or missing.
    #[clap(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Output directory. Defaults to public/icons in the project root.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Icon sizes to generate instead of the standard manifest set.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,

    /// Center color of the placeholder gradient (CSS color format)
    #[clap(long, value_parser = parse_color, default_value = "#dc2626")]
    inner_color: Rgb<u8>,

    /// Rim color of the placeholder gradient (CSS color format)
    #[clap(long, value_parser = parse_color, default_value = "#ff4500")]
    outer_color: Rgb<u8>,

    /// Also write manifest-icons.json listing the generated icons
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sizes = match args.sizes {
        Some(sizes) => SizeSet::new(sizes).context("Invalid --sizes")?,
        None => SizeSet::default(),
    };
    let config = IconConfig::new(args.output.unwrap_or_else(default_output_dir))
        .with_sizes(sizes)
        .with_palette(Palette {
            inner: args.inner_color,
            outer: args.outer_color,
        })
        .with_manifest(args.manifest);

    let mode = generate_icons(args.source.as_deref(), &config)
        .context("Icon generation failed")?;
    log::debug!("Finished in mode {mode:?}");

    Ok(())
}
