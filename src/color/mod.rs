//! Color conversion and variation module
//!
//! This module holds the sRGB value type, conversions to the picker's
//! color spaces, and tint/shade ramp generation.

pub mod rgb;
pub mod conversion;
pub mod variation;

pub use rgb::{HexCase, RgbColor};
pub use conversion::{
    AllFormats, Cmyk, ColorConverter, FormattedColors, Hsl, Hwb, Lab, Luv, PreciseHsl, Xyz,
};
pub use variation::{perceptual_lightness, shade, tint, ColorVariation, VariationGenerator};
