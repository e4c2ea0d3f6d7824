//! # Pick Colors
//!
//! The color math behind an image color picker.
//!
//! Given an opaque 8-bit sRGB sample this crate provides:
//! - Conversions to HSL, CIE XYZ, CMYK, CIE LAB, CIE LUV and HWB
//! - Display strings in CSS/ICC-style notation for each format
//! - Tint and shade ramps plus a perceptual lightness classifier
//!
//! Everything is pure and synchronous; image decoding, clipboard access and
//! rendering belong to the caller.
//!
//! ## Example
//!
//! ```rust
//! use pick_colors::{analyze_color, RgbColor};
//!
//! let formats = analyze_color(RgbColor::new(230, 126, 34));
//! assert_eq!(formats.display.hex, "#E67E22");
//! assert_eq!(formats.display.hsl, "hsl(28, 80%, 52%)");
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod color;

pub use color::{
    perceptual_lightness, shade, tint, AllFormats, Cmyk, ColorConverter, ColorVariation,
    FormattedColors, HexCase, Hsl, Hwb, Lab, Luv, PreciseHsl, RgbColor, VariationGenerator, Xyz,
};
pub use config::PickerConfig;
pub use error::{PickerError, Result};

/// Pixel coordinates of a sample taken from an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// The color the user currently has selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedColor {
    /// Channel values
    pub color: RgbColor,
    /// Hexadecimal color representation
    pub hex: String,
    /// CSS `rgb(R, G, B)` representation
    pub rgb: String,
    /// Where the sample was taken, if it came from an image
    pub position: Option<Position>,
}

impl SelectedColor {
    /// Build the selection for a color, formatting hex per `case`
    pub fn new(color: RgbColor, position: Option<Position>, case: HexCase) -> Self {
        Self {
            color,
            hex: color.to_hex_with_case(case),
            rgb: color.to_rgb_string(),
            position,
        }
    }

    /// Build the selection from an RGBA pixel read out of an image
    ///
    /// Fully transparent pixels carry no color and yield `None`.
    pub fn from_rgba(rgba: [u8; 4], position: Position, case: HexCase) -> Option<Self> {
        let [r, g, b, a] = rgba;
        if a == 0 {
            log::debug!("ignoring transparent sample at ({}, {})", position.x, position.y);
            return None;
        }
        Some(Self::new(RgbColor::new(r, g, b), Some(position), case))
    }

    /// Build the selection from a hex value produced by the wheel picker
    ///
    /// The hex string is kept as the picker wrote it, letter case included;
    /// only a missing `#` is added.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let color = RgbColor::from_hex(hex)?;
        let hex = hex.trim();
        let hex = if hex.starts_with('#') {
            hex.to_string()
        } else {
            format!("#{}", hex)
        };

        Ok(Self {
            color,
            hex,
            rgb: color.to_rgb_string(),
            position: None,
        })
    }

    /// All color-space representations of the selection
    pub fn formats(&self) -> AllFormats {
        analyze_color(self.color)
    }

    /// Tint/shade ramp of the selection
    pub fn variations(&self, generator: &VariationGenerator) -> Vec<ColorVariation> {
        generator.variations(self.color)
    }
}

/// Convert a sampled color to every supported format
///
/// This is the main entry point for callers that only need display values.
pub fn analyze_color(rgb: RgbColor) -> AllFormats {
    ColorConverter::new().to_all_formats(rgb)
}
