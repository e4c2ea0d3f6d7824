//! Tint and shade generation
//!
//! Builds the swatch ramps shown under a picked color: white at 0%, the
//! color itself at 50%, black at 100%. One-sided ramps anchored at the
//! original color are available as well, plus a perceptual lightness
//! classifier.

use serde::{Deserialize, Serialize};

use crate::color::rgb::{HexCase, RgbColor};
use crate::constants::{srgb, variations};
use crate::{PickerError, Result};

/// One swatch of a tint/shade ramp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariation {
    /// Position in the ramp, rounded to a whole percent
    pub percentage: u8,
    pub rgb: RgbColor,
    pub hex: String,
}

impl ColorVariation {
    fn new(percentage: f64, rgb: RgbColor, case: HexCase) -> Self {
        Self {
            percentage: percentage.round() as u8,
            rgb,
            hex: rgb.to_hex_with_case(case),
        }
    }

    /// CSS functional notation of the swatch color
    pub fn rgb_string(&self) -> String {
        self.rgb.to_string()
    }
}

/// Generator for tint/shade ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariationGenerator {
    steps: usize,
    hex_case: HexCase,
}

impl Default for VariationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl VariationGenerator {
    /// Create a generator producing the default 11-step ramp
    ///
    /// Swatch hex strings are lowercase unless [`Self::with_hex_case`] says
    /// otherwise.
    pub fn new() -> Self {
        Self {
            steps: variations::DEFAULT_STEPS,
            hex_case: HexCase::Lower,
        }
    }

    /// Create a generator with a custom step count
    ///
    /// # Errors
    ///
    /// Returns `PickerError::InvalidParameter` if `steps` is below 2, since a
    /// ramp needs both endpoints.
    pub fn with_steps(steps: usize) -> Result<Self> {
        if steps < 2 {
            return Err(PickerError::invalid_parameter("steps", steps));
        }
        Ok(Self {
            steps,
            ..Self::new()
        })
    }

    /// Use the given letter case for swatch hex strings
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Full white → color → black ramp using the configured step count
    pub fn variations(&self, rgb: RgbColor) -> Vec<ColorVariation> {
        self.generate_variations(rgb, self.steps)
    }

    /// Light-side ramp using the configured step count
    pub fn tints(&self, rgb: RgbColor) -> Vec<ColorVariation> {
        self.generate_tints(rgb, self.steps)
    }

    /// Dark-side ramp using the configured step count
    pub fn shades(&self, rgb: RgbColor) -> Vec<ColorVariation> {
        self.generate_shades(rgb, self.steps)
    }

    /// White-to-black ramp with `steps` evenly spaced percentages
    ///
    /// Percentage 0 is white and 100 is black. For odd `steps` the middle
    /// entry is the original color, untouched. Entries below 50% are tints
    /// with factor (50 − pct)/50, entries above are shades with factor
    /// (pct − 50)/50.
    ///
    /// `steps == 0` yields an empty ramp and `steps == 1` a single entry
    /// holding the original color at 50%.
    pub fn generate_variations(&self, rgb: RgbColor, steps: usize) -> Vec<ColorVariation> {
        if steps < 2 {
            log::debug!("degenerate ramp requested ({} steps) for {}", steps, rgb);
            return (0..steps)
                .map(|_| ColorVariation::new(variations::MIDPOINT_PERCENT, rgb, self.hex_case))
                .collect();
        }

        let last = steps - 1;
        let mid = variations::MIDPOINT_PERCENT;
        (0..steps)
            .map(|i| {
                let percentage = step_percentage(i, last);
                let color = if i == 0 {
                    RgbColor::WHITE
                } else if i == last {
                    RgbColor::BLACK
                } else if 2 * i == last {
                    rgb
                } else if percentage < mid {
                    tint(rgb, (mid - percentage) / mid)
                } else {
                    shade(rgb, (percentage - mid) / mid)
                };
                ColorVariation::new(percentage, color, self.hex_case)
            })
            .collect()
    }

    /// Ramp from the original color (0%) to white (100%)
    pub fn generate_tints(&self, rgb: RgbColor, steps: usize) -> Vec<ColorVariation> {
        self.one_sided(rgb, steps, tint)
    }

    /// Ramp from the original color (0%) to black (100%)
    pub fn generate_shades(&self, rgb: RgbColor, steps: usize) -> Vec<ColorVariation> {
        self.one_sided(rgb, steps, shade)
    }

    fn one_sided(
        &self,
        rgb: RgbColor,
        steps: usize,
        blend: fn(RgbColor, f64) -> RgbColor,
    ) -> Vec<ColorVariation> {
        if steps < 2 {
            log::debug!("degenerate one-sided ramp requested ({} steps) for {}", steps, rgb);
            return (0..steps)
                .map(|_| ColorVariation::new(0.0, rgb, self.hex_case))
                .collect();
        }

        let last = steps - 1;
        (0..steps)
            .map(|i| {
                let percentage = step_percentage(i, last);
                let color = if i == 0 { rgb } else { blend(rgb, percentage / 100.0) };
                ColorVariation::new(percentage, color, self.hex_case)
            })
            .collect()
    }
}

fn step_percentage(index: usize, last: usize) -> f64 {
    index as f64 / last as f64 * 100.0
}

/// Blend toward white; `factor` 0 keeps the color, 1 gives white
pub fn tint(rgb: RgbColor, factor: f64) -> RgbColor {
    let blend = |c: u8| {
        let c = f64::from(c);
        (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
    };
    RgbColor::new(blend(rgb.r), blend(rgb.g), blend(rgb.b))
}

/// Blend toward black; `factor` 0 keeps the color, 1 gives black
pub fn shade(rgb: RgbColor, factor: f64) -> RgbColor {
    let blend = |c: u8| (f64::from(c) * (1.0 - factor)).round().clamp(0.0, 255.0) as u8;
    RgbColor::new(blend(rgb.r), blend(rgb.g), blend(rgb.b))
}

/// [`tint`] with the factor validated against [0, 1]
pub fn checked_tint(rgb: RgbColor, factor: f64) -> Result<RgbColor> {
    validate_factor(factor)?;
    Ok(tint(rgb, factor))
}

/// [`shade`] with the factor validated against [0, 1]
pub fn checked_shade(rgb: RgbColor, factor: f64) -> Result<RgbColor> {
    validate_factor(factor)?;
    Ok(shade(rgb, factor))
}

fn validate_factor(factor: f64) -> Result<()> {
    if (0.0..=1.0).contains(&factor) {
        Ok(())
    } else {
        Err(PickerError::invalid_parameter("factor", factor))
    }
}

/// How dark a color looks: 0 for white, 100 for black
///
/// Based on relative luminance of the gamma-decoded channels. Informational
/// only.
pub fn perceptual_lightness(rgb: RgbColor) -> u8 {
    let luminance: f64 = rgb
        .linearized()
        .iter()
        .zip(srgb::LUMINANCE_WEIGHTS)
        .map(|(channel, weight)| channel * weight)
        .sum();
    ((1.0 - luminance) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE: RgbColor = RgbColor::new(230, 126, 34);

    #[test]
    fn test_tint_endpoints() {
        assert_eq!(tint(ORANGE, 0.0), ORANGE);
        assert_eq!(tint(ORANGE, 1.0), RgbColor::WHITE);
    }

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(ORANGE, 0.0), ORANGE);
        assert_eq!(shade(ORANGE, 1.0), RgbColor::BLACK);
    }

    #[test]
    fn test_tint_and_shade_halfway() {
        assert_eq!(tint(RgbColor::new(0, 100, 255), 0.5), RgbColor::new(128, 178, 255));
        assert_eq!(shade(RgbColor::new(0, 100, 255), 0.5), RgbColor::new(0, 50, 128));
    }

    #[test]
    fn test_checked_blends_reject_out_of_range() {
        assert!(checked_tint(ORANGE, 1.5).is_err());
        assert!(checked_shade(ORANGE, -0.1).is_err());
        assert!(checked_shade(ORANGE, f64::NAN).is_err());
        assert_eq!(checked_tint(ORANGE, 1.0).unwrap(), RgbColor::WHITE);
    }

    #[test]
    fn test_default_ramp() {
        let ramp = VariationGenerator::new().variations(ORANGE);
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[0].rgb, RgbColor::WHITE);
        assert_eq!(ramp[5].rgb, ORANGE);
        assert_eq!(ramp[5].hex, "#e67e22");
        assert_eq!(ramp[10].rgb, RgbColor::BLACK);

        let percentages: Vec<u8> = ramp.iter().map(|v| v.percentage).collect();
        assert_eq!(percentages, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_ramp_is_monotonic_in_lightness() {
        let ramp = VariationGenerator::new().variations(ORANGE);
        for pair in ramp.windows(2) {
            assert!(perceptual_lightness(pair[0].rgb) <= perceptual_lightness(pair[1].rgb));
        }
    }

    #[test]
    fn test_ramp_intermediate_values() {
        let ramp = VariationGenerator::new().variations(ORANGE);
        // 40% is a tint with factor 0.2, 60% a shade with factor 0.2
        assert_eq!(ramp[4].rgb, tint(ORANGE, 0.2));
        assert_eq!(ramp[6].rgb, shade(ORANGE, 0.2));
    }

    #[test]
    fn test_even_steps_have_no_exact_midpoint() {
        let ramp = VariationGenerator::new().generate_variations(ORANGE, 4);
        let percentages: Vec<u8> = ramp.iter().map(|v| v.percentage).collect();
        assert_eq!(percentages, vec![0, 33, 67, 100]);
        assert!(ramp.iter().all(|v| v.rgb != ORANGE));
    }

    #[test]
    fn test_degenerate_steps() {
        let generator = VariationGenerator::new();
        assert!(generator.generate_variations(ORANGE, 0).is_empty());

        let single = generator.generate_variations(ORANGE, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].percentage, 50);
        assert_eq!(single[0].rgb, ORANGE);

        assert_eq!(generator.generate_tints(ORANGE, 1)[0].rgb, ORANGE);
    }

    #[test]
    fn test_with_steps_validation() {
        assert!(VariationGenerator::with_steps(1).is_err());
        let generator = VariationGenerator::with_steps(5).unwrap();
        assert_eq!(generator.steps(), 5);
        assert_eq!(generator.variations(ORANGE)[2].rgb, ORANGE);
    }

    #[test]
    fn test_tints_and_shades() {
        let generator = VariationGenerator::new();
        let tints = generator.generate_tints(ORANGE, 5);
        assert_eq!(tints[0].rgb, ORANGE);
        assert_eq!(tints[2].rgb, tint(ORANGE, 0.5));
        assert_eq!(tints[4].rgb, RgbColor::WHITE);

        let shades = generator.shades(ORANGE);
        assert_eq!(shades.len(), 11);
        assert_eq!(shades[0].rgb, ORANGE);
        assert_eq!(shades[10].rgb, RgbColor::BLACK);
        assert_eq!(shades[3].percentage, 30);
    }

    #[test]
    fn test_swatch_hex_is_lowercase_by_default() {
        let ramp = VariationGenerator::new().variations(ORANGE);
        assert_eq!(ramp[0].hex, "#ffffff");
        assert_eq!(ramp[5].hex, "#e67e22");
        assert!(ramp.iter().all(|v| v.hex == v.hex.to_lowercase()));
        assert_eq!(ramp[5].rgb_string(), "rgb(230, 126, 34)");

        let tints = VariationGenerator::new().generate_tints(ORANGE, 3);
        assert_eq!(tints[0].hex, "#e67e22");
    }

    #[test]
    fn test_uppercase_hex_on_request() {
        let generator = VariationGenerator::new().with_hex_case(HexCase::Upper);
        assert_eq!(generator.variations(ORANGE)[5].hex, "#E67E22");
    }

    #[test]
    fn test_perceptual_lightness() {
        assert_eq!(perceptual_lightness(RgbColor::WHITE), 0);
        assert_eq!(perceptual_lightness(RgbColor::BLACK), 100);
        // Green carries most of the luminance
        let green = perceptual_lightness(RgbColor::new(0, 255, 0));
        let blue = perceptual_lightness(RgbColor::new(0, 0, 255));
        assert!(green < blue);
        assert_eq!(perceptual_lightness(RgbColor::new(128, 128, 128)), 78);
    }
}
