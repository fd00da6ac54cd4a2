use crate::error::IconError;
use image::Rgb;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Square icon sizes referenced by a typical web app manifest.
pub const PWA_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Ordered set of square pixel sizes to produce.
///
/// Never empty, never contains zero, never contains the same size twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSet(Vec<u32>);

impl SizeSet {
    pub fn new(sizes: Vec<u32>) -> Result<Self, IconError> {
        if sizes.is_empty() {
            return Err(IconError::InvalidSizes(
                "at least one size is required".to_string(),
            ));
        }
        if sizes.contains(&0) {
            return Err(IconError::InvalidSizes(
                "sizes must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = sizes.iter().find(|&&size| !seen.insert(size)) {
            return Err(IconError::InvalidSizes(format!(
                "size {dup} is listed more than once"
            )));
        }

        Ok(SizeSet(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn largest(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SizeSet {
    fn default() -> Self {
        SizeSet(PWA_SIZES.to_vec())
    }
}

/// Inner (center) and outer (rim) colors of the placeholder gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub inner: Rgb<u8>,
    pub outer: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            inner: Rgb([220, 38, 38]),
            outer: Rgb([255, 69, 0]),
        }
    }
}

/// Parse a CSS color string (`#dc2626`, `rgb(255, 69, 0)`, `orangered`, ...).
pub fn parse_color(color: &str) -> Result<Rgb<u8>, IconError> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
            ])
        })
        .map_err(|_| IconError::InvalidColor(color.to_string()))
}

/// Everything one generator run needs.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub sizes: SizeSet,
    pub palette: Palette,
    /// Also write `manifest-icons.json` next to the icons.
    pub write_manifest: bool,
}

impl IconConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        IconConfig {
            output_dir: output_dir.into(),
            sizes: SizeSet::default(),
            palette: Palette::default(),
            write_manifest: false,
        }
    }

    pub fn with_sizes(mut self, sizes: SizeSet) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }
}

/// `public/icons` under the project root.
pub fn default_output_dir() -> PathBuf {
    output_dir_for(Path::new(env!("CARGO_MANIFEST_DIR")))
}

pub fn output_dir_for(project_root: &Path) -> PathBuf {
    project_root.join("public").join("icons")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_set_is_the_pwa_set() {
        let sizes = SizeSet::default();
        assert_eq!(sizes.as_slice(), &PWA_SIZES);
        assert_eq!(sizes.largest(), 512);
    }

    #[test]
    fn rejects_empty_zero_and_duplicate_sizes() {
        assert!(matches!(
            SizeSet::new(vec![]),
            Err(IconError::InvalidSizes(_))
        ));
        assert!(matches!(
            SizeSet::new(vec![48, 0]),
            Err(IconError::InvalidSizes(_))
        ));
        assert!(matches!(
            SizeSet::new(vec![48, 96, 48]),
            Err(IconError::InvalidSizes(_))
        ));
    }

    #[test]
    fn keeps_the_given_order() {
        let sizes = SizeSet::new(vec![96, 48, 192]).unwrap();
        assert_eq!(sizes.iter().collect::<Vec<_>>(), vec![96, 48, 192]);
        assert_eq!(sizes.largest(), 192);
    }

    #[test]
    fn parses_css_colors() {
        assert_eq!(parse_color("#dc2626").unwrap(), Rgb([220, 38, 38]));
        assert_eq!(parse_color("#ff4500").unwrap(), Rgb([255, 69, 0]));
        assert!(matches!(
            parse_color("not-a-color"),
            Err(IconError::InvalidColor(_))
        ));
    }

    #[test]
    fn output_dir_is_public_icons_under_the_root() {
        assert_eq!(
            output_dir_for(Path::new("/srv/app")),
            PathBuf::from("/srv/app/public/icons")
        );
        assert!(default_output_dir().ends_with("public/icons"));
    }
}
