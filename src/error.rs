//! Error type shared by both icon generators.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to decode source image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid size set: {0}")]
    InvalidSizes(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl IconError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map a failure from `image::open`. Missing or unreadable files surface
    /// as filesystem errors, everything else as a decode error.
    pub(crate) fn open(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => IconError::io(path, source),
            source => IconError::Decode {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub(crate) fn encode(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => IconError::io(path, source),
            source => IconError::Encode {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Filesystem failures may go away on a second attempt; a source that
    /// does not decode or a bad size set will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, IconError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_from_image_open_are_filesystem_errors() {
        let err = IconError::open(
            Path::new("missing.png"),
            image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone")),
        );
        assert!(matches!(err, IconError::Io { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn invalid_sizes_are_not_retryable() {
        let err = IconError::InvalidSizes("empty".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Invalid size set: empty");
    }
}
