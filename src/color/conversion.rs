//! Color space conversion utilities
//!
//! Converts an 8-bit sRGB color into the representations shown by the picker:
//! - HSL and HWB (cylindrical sRGB)
//! - CIE XYZ (D65, 2° observer)
//! - CIE L*a*b* and CIE L*u*v* (D65 reference white)
//! - CMYK (naive subtractive)
//!
//! LAB and LUV are always derived from full-precision XYZ. Only the values
//! handed back to callers are rounded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::rgb::RgbColor;
use crate::constants::{cie, srgb, D65_WHITE_POINT_XYZ};

/// HSL with integer degrees and percentages, as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: u16,
    /// Saturation percent, [0, 100]
    pub s: u8,
    /// Lightness percent, [0, 100]
    pub l: u8,
}

/// Unrounded HSL, kept for exact inversion back to RGB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreciseHsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, [0, 1]
    pub s: f64,
    /// Lightness, [0, 1]
    pub l: f64,
}

/// CIE XYZ tristimulus values scaled so the D65 white has Y = 100
///
/// Fields hold full precision; [`Xyz::rounded`] and `Display` give the
/// two-decimal values shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CMYK percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// CIE L*a*b*, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIE L*u*v*, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// Hue, whiteness, blackness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hwb {
    /// Hue in degrees, identical to [`Hsl::h`]
    pub h: u16,
    /// Whiteness percent
    pub w: u8,
    /// Blackness percent
    pub b: u8,
}

/// Display strings for every supported notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedColors {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub xyz: String,
    pub cmyk: String,
    pub lab: String,
    pub luv: String,
    pub hwb: String,
}

impl FormattedColors {
    /// Label/value pairs in the order the info panel lists them
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("HEX", self.hex.as_str()),
            ("RGB", self.rgb.as_str()),
            ("HSL", self.hsl.as_str()),
            ("XYZ", self.xyz.as_str()),
            ("CMYK", self.cmyk.as_str()),
            ("LAB", self.lab.as_str()),
            ("LUV", self.luv.as_str()),
            ("HWB", self.hwb.as_str()),
        ]
    }
}

/// Every representation of one sampled color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllFormats {
    pub rgb: RgbColor,
    pub hsl: Hsl,
    /// Rounded to two decimals
    pub xyz: Xyz,
    pub cmyk: Cmyk,
    pub lab: Lab,
    pub luv: Luv,
    pub hwb: Hwb,
    pub display: FormattedColors,
}

/// Stateless converter from 8-bit sRGB to the picker's color spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConverter {
    /// Reference white for LAB and LUV (always D65)
    white_point: [f64; 3],
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a new color converter with D65 as reference white
    pub fn new() -> Self {
        Self {
            white_point: D65_WHITE_POINT_XYZ,
        }
    }

    /// Reference white in XYZ (Y = 100)
    pub fn white_point(&self) -> [f64; 3] {
        self.white_point
    }

    /// Convert RGB to HSL with integer degrees and percentages
    ///
    /// Grays (including black and white) have hue and saturation 0.
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit sRGB color
    ///
    /// # Returns
    ///
    /// HSL with hue in [0, 360) and saturation/lightness in [0, 100]
    pub fn to_hsl(&self, rgb: RgbColor) -> Hsl {
        self.to_hsl_precise(rgb).rounded()
    }

    /// Convert RGB to unrounded HSL
    pub fn to_hsl_precise(&self, rgb: RgbColor) -> PreciseHsl {
        let [r, g, b] = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return PreciseHsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sextant = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        PreciseHsl {
            h: sextant * 60.0,
            s,
            l,
        }
    }

    /// Convert RGB to CIE XYZ
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit sRGB color
    ///
    /// # Returns
    ///
    /// Full-precision XYZ under D65, scaled so the white has Y = 100. Use
    /// [`Xyz::rounded`] for display values.
    pub fn to_xyz(&self, rgb: RgbColor) -> Xyz {
        let linear = rgb.linearized();
        let [x, y, z] = srgb::TO_XYZ.map(|row| {
            row.iter()
                .zip(linear)
                .map(|(coefficient, channel)| coefficient * channel)
                .sum::<f64>()
                * 100.0
        });
        Xyz { x, y, z }
    }

    /// Convert RGB to CMYK percentages
    ///
    /// Pure black is reported as `cmyk(0%, 0%, 0%, 100%)`.
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit sRGB color
    ///
    /// # Returns
    ///
    /// Cyan, magenta, yellow and key as integer percentages
    pub fn to_cmyk(&self, rgb: RgbColor) -> Cmyk {
        let [r, g, b] = rgb.normalized();
        let k = 1.0 - r.max(g).max(b);

        let ink = |channel: f64| {
            if k >= 1.0 {
                0.0
            } else {
                (1.0 - channel - k) / (1.0 - k)
            }
        };

        Cmyk {
            c: percent(ink(r)),
            m: percent(ink(g)),
            y: percent(ink(b)),
            k: percent(k),
        }
    }

    /// Convert RGB to CIE L*a*b* via full-precision XYZ
    pub fn to_lab(&self, rgb: RgbColor) -> Lab {
        self.xyz_to_lab(self.to_xyz(rgb))
    }

    /// Convert XYZ to CIE L*a*b* against the converter's reference white
    ///
    /// # Arguments
    ///
    /// * `xyz` - Full-precision XYZ (Y of white = 100)
    ///
    /// # Returns
    ///
    /// Lab color rounded to two decimals
    pub fn xyz_to_lab(&self, xyz: Xyz) -> Lab {
        let [xn, yn, zn] = self.white_point;
        let fx = lab_f(xyz.x / xn);
        let fy = lab_f(xyz.y / yn);
        let fz = lab_f(xyz.z / zn);

        Lab {
            l: round_to(116.0 * fy - 16.0, 2),
            a: round_to(500.0 * (fx - fy), 2),
            b: round_to(200.0 * (fy - fz), 2),
        }
    }

    /// Convert RGB to CIE L*u*v* via full-precision XYZ
    pub fn to_luv(&self, rgb: RgbColor) -> Luv {
        self.xyz_to_luv(self.to_xyz(rgb))
    }

    /// Convert XYZ to CIE L*u*v* against the converter's reference white
    ///
    /// Black has no chromaticity; u′ and v′ fall back to 0 there.
    ///
    /// # Arguments
    ///
    /// * `xyz` - Full-precision XYZ (Y of white = 100)
    ///
    /// # Returns
    ///
    /// Luv color rounded to two decimals
    pub fn xyz_to_luv(&self, xyz: Xyz) -> Luv {
        let [xn, yn, zn] = self.white_point;
        let (u_prime, v_prime) = uv_chromaticity(xyz.x, xyz.y, xyz.z);
        let (un_prime, vn_prime) = uv_chromaticity(xn, yn, zn);

        let yr = xyz.y / yn;
        let l = if yr > cie::EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            cie::KAPPA * yr
        };

        Luv {
            l: round_to(l, 2),
            u: round_to(13.0 * l * (u_prime - un_prime), 2),
            v: round_to(13.0 * l * (v_prime - vn_prime), 2),
        }
    }

    /// Convert RGB to HWB; the hue is the HSL hue of the same color
    pub fn to_hwb(&self, rgb: RgbColor) -> Hwb {
        let [r, g, b] = rgb.normalized();
        Hwb {
            h: self.to_hsl(rgb).h,
            w: percent(r.min(g).min(b)),
            b: percent(1.0 - r.max(g).max(b)),
        }
    }

    /// Compute every representation plus its display string
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit sRGB color
    ///
    /// # Returns
    ///
    /// `AllFormats` with rounded values and strings such as
    /// `hsl(28, 80%, 52%)` or `lab(63.23, 34.38, 62.51)`
    pub fn to_all_formats(&self, rgb: RgbColor) -> AllFormats {
        let hsl = self.to_hsl(rgb);
        let xyz = self.to_xyz(rgb);
        let cmyk = self.to_cmyk(rgb);
        let lab = self.xyz_to_lab(xyz);
        let luv = self.xyz_to_luv(xyz);
        let hwb = self.to_hwb(rgb);
        let xyz = xyz.rounded();

        log::trace!("converted {} to all formats", rgb);

        AllFormats {
            rgb,
            hsl,
            xyz,
            cmyk,
            lab,
            luv,
            hwb,
            display: FormattedColors {
                hex: rgb.to_hex(),
                rgb: rgb.to_string(),
                hsl: hsl.to_string(),
                xyz: xyz.to_string(),
                cmyk: cmyk.to_string(),
                lab: lab.to_string(),
                luv: luv.to_string(),
                hwb: hwb.to_string(),
            },
        }
    }
}

impl PreciseHsl {
    /// Round to whole degrees and percentages; a hue of 360 wraps to 0
    pub fn rounded(&self) -> Hsl {
        Hsl {
            h: (self.h.round() as u16) % 360,
            s: percent(self.s),
            l: percent(self.l),
        }
    }

    /// Standard HSL to RGB inverse
    pub fn to_rgb(&self) -> RgbColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h_prime = self.h.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = self.l - chroma / 2.0;

        let (r, g, b) = match h_prime as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbColor::new(channel(r), channel(g), channel(b))
    }
}

impl Hsl {
    /// Convert back to RGB; exact only up to the integer quantization
    pub fn to_rgb(&self) -> RgbColor {
        PreciseHsl {
            h: f64::from(self.h),
            s: f64::from(self.s) / 100.0,
            l: f64::from(self.l) / 100.0,
        }
        .to_rgb()
    }
}

impl Xyz {
    /// Values rounded to two decimals
    pub fn rounded(&self) -> Xyz {
        Xyz {
            x: round_to(self.x, 2),
            y: round_to(self.y, 2),
            z: round_to(self.z, 2),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(f, "xyz({}, {}, {})", r.x, r.y, r.z)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab({}, {}, {})", self.l, self.a, self.b)
    }
}

impl fmt::Display for Luv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "luv({}, {}, {})", self.l, self.u, self.v)
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hwb({}, {}%, {}%)", self.h, self.w, self.b)
    }
}

/// CIE cube-root-or-linear companding used by L*a*b*
fn lab_f(t: f64) -> f64 {
    if t > cie::EPSILON {
        t.cbrt()
    } else {
        cie::LINEAR_COEFFICIENT * t + cie::LINEAR_OFFSET
    }
}

/// CIE 1976 u′, v′ chromaticity; (0, 0) when X + 15Y + 3Z is zero
fn uv_chromaticity(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denominator, 9.0 * y / denominator)
    }
}

/// Fraction in [0, 1] to a rounded integer percent
fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Round to `places` decimals; negative zero is normalized to zero
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}
