//! Web app manifest `icons` fragment
//!
//! The structures mirror the `icons` member of the Web App Manifest so the
//! generated file can be pasted into (or merged with) `manifest.json`.

use crate::{
    config::SizeSet,
    error::IconError,
    icon_gen::icon_file_name,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File written next to the icons.
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// URL path the icons are served from (`public/icons` of the web root).
pub const ICONS_URL_PREFIX: &str = "/icons";

/// Root structure of the fragment
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestIcons {
    pub icons: Vec<IconEntry>,
}

/// A single entry of the manifest `icons` array
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IconEntry {
    /// URL of the icon, relative to the site root (e.g. "/icons/icon-72x72.png")
    pub src: String,

    /// Space separated dimensions (e.g. "72x72")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Intended usage ("any", "maskable", "monochrome")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconEntry {
    pub fn png(size: u32) -> Self {
        Self {
            src: format!("{ICONS_URL_PREFIX}/{}", icon_file_name(size)),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: Some("any".to_string()),
        }
    }
}

impl ManifestIcons {
    /// One entry per size, in size-set order.
    pub fn for_sizes(sizes: &SizeSet) -> Self {
        Self {
            icons: sizes.iter().map(IconEntry::png).collect(),
        }
    }
}

/// Write `manifest-icons.json` for `sizes` into `out_dir`.
pub fn write_manifest(out_dir: &Path, sizes: &SizeSet) -> Result<PathBuf, IconError> {
    let manifest = ManifestIcons::for_sizes(sizes);
    let path = out_dir.join(MANIFEST_FILE_NAME);

    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|err| IconError::io(&path, err.into()))?;
    std::fs::write(&path, json).map_err(|err| IconError::io(&path, err))?;

    println!("✓ Generated: {MANIFEST_FILE_NAME}");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_manifest_field_names() {
        let json = serde_json::to_value(IconEntry::png(192)).unwrap();
        assert_eq!(json["src"], "/icons/icon-192x192.png");
        assert_eq!(json["sizes"], "192x192");
        assert_eq!(json["type"], "image/png");
        assert_eq!(json["purpose"], "any");
    }

    #[test]
    fn purpose_is_omitted_when_unset() {
        let mut entry = IconEntry::png(72);
        entry.purpose = None;
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.get("purpose").is_none());
    }

    #[test]
    fn entries_follow_size_order() {
        let manifest = ManifestIcons::for_sizes(&SizeSet::default());
        let sizes: Vec<_> = manifest.icons.iter().map(|i| i.sizes.as_str()).collect();
        assert_eq!(
            sizes,
            [
                "72x72", "96x96", "128x128", "144x144", "152x152", "192x192", "384x384",
                "512x512"
            ]
        );
    }
}
