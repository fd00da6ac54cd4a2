//! Generate the PNG icon set a web app manifest refers to, either by resizing
//! a source image or by drawing a gradient placeholder.

pub mod config;
pub mod error;
pub mod icon_gen;
pub mod manifest;
pub mod placeholder;
pub mod resize;

pub use config::{IconConfig, Palette, SizeSet, PWA_SIZES};
pub use error::IconError;
pub use icon_gen::{generate_icons, Mode};
