//! 8-bit sRGB color value and its hex/CSS notations

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::srgb;
use crate::{PickerError, Result};

/// Letter case used when formatting hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `#E67E22`
    #[default]
    Upper,
    /// `#e67e22`
    Lower,
}

/// An opaque 8-bit sRGB color, the input to every conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wider integers, clamping each channel to [0, 255]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |v: i32| {
            if !(0..=255).contains(&v) {
                log::warn!("channel value {} clamped to [0, 255]", v);
            }
            v.clamp(0, 255) as u8
        };
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Channels normalized to [0, 1]
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Gamma-decoded (linear light) channels in [0, 1]
    pub fn linearized(&self) -> [f64; 3] {
        self.normalized().map(decode_gamma)
    }

    /// Parse a `#RRGGBB` or `RRGGBB` string (case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(PickerError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        // from_str_radix would accept a leading '+'
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PickerError::invalid_hex(hex, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| PickerError::invalid_hex(hex, format!("invalid {} channel: {}", name, e)))
        };

        Ok(Self::new(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Hex string in the given letter case, e.g. `#E67E22`
    pub fn to_hex_with_case(&self, case: HexCase) -> String {
        match case {
            HexCase::Upper => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            HexCase::Lower => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }

    /// Uppercase hex string, e.g. `#E67E22`
    pub fn to_hex(&self) -> String {
        self.to_hex_with_case(HexCase::Upper)
    }

    /// CSS functional notation, e.g. `rgb(230, 126, 34)`
    pub fn to_rgb_string(&self) -> String {
        self.to_string()
    }
}

/// sRGB electro-optical transfer: encoded [0, 1] to linear [0, 1]
pub(crate) fn decode_gamma(c: f64) -> f64 {
    if c > srgb::GAMMA_THRESHOLD {
        ((c + srgb::GAMMA_OFFSET) / srgb::GAMMA_DIVISOR).powf(srgb::GAMMA_EXPONENT)
    } else {
        c / srgb::LINEAR_DIVISOR
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(rgb: RgbColor) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}
