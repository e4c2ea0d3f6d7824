//! Configuration for the picker core.
//!
//! Only presentation choices are configurable; the colorimetry itself is
//! fixed to sRGB and D65.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use pick_colors::PickerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PickerConfig::from_json_file(Path::new("picker.json"))?;
//!
//! // Or use defaults
//! let config = PickerConfig::default();
//! # Ok::<(), pick_colors::PickerError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{HexCase, RgbColor, VariationGenerator};
use crate::constants::variations;
use crate::{PickerError, Position, Result, SelectedColor};

/// Presentation settings for sampled colors and their ramps.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Number of swatches in the white-to-black ramp (at least 2)
    pub variation_steps: usize,

    /// Letter case of the hex string of a color sampled from an image
    pub sample_hex_case: HexCase,

    /// Letter case of the hex strings of tint/shade swatches
    pub swatch_hex_case: HexCase,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            variation_steps: variations::DEFAULT_STEPS,
            sample_hex_case: HexCase::Upper,
            swatch_hex_case: HexCase::Lower,
        }
    }
}

impl PickerConfig {
    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.variation_steps < 2 {
            return Err(PickerError::invalid_parameter(
                "variation_steps",
                self.variation_steps,
            ));
        }
        Ok(())
    }

    /// Build a variation generator from these settings
    pub fn generator(&self) -> Result<VariationGenerator> {
        Ok(VariationGenerator::with_steps(self.variation_steps)?
            .with_hex_case(self.swatch_hex_case))
    }

    /// Build the selection for an RGBA pixel sampled from an image
    ///
    /// Returns `None` for fully transparent pixels.
    pub fn sample(&self, rgba: [u8; 4], position: Position) -> Option<SelectedColor> {
        SelectedColor::from_rgba(rgba, position, self.sample_hex_case)
    }

    /// Build the selection for an already opaque color
    pub fn select(&self, color: RgbColor, position: Option<Position>) -> SelectedColor {
        SelectedColor::new(color, position, self.sample_hex_case)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PickerError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded picker config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PickerError::config("Invalid picker configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::config("Failed to serialize picker configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PickerError::config(format!("Failed to write {}", path.display()), e)
        })?;
        log::debug!("saved picker config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.variation_steps, 11);
        assert_eq!(config.sample_hex_case, HexCase::Upper);
        assert_eq!(config.swatch_hex_case, HexCase::Lower);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PickerConfig::from_json_str(r#"{ "sample_hex_case": "lower" }"#).unwrap();
        assert_eq!(config.variation_steps, 11);
        assert_eq!(config.sample_hex_case, HexCase::Lower);
        assert_eq!(config.swatch_hex_case, HexCase::Lower);
    }

    #[test]
    fn test_invalid_steps_rejected() {
        let err = PickerConfig::from_json_str(r#"{ "variation_steps": 1 }"#).unwrap_err();
        assert!(matches!(err, PickerError::InvalidParameter { .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = PickerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PickerError::ConfigError { .. }));
    }

    #[test]
    fn test_generator_from_config() {
        let config = PickerConfig {
            variation_steps: 21,
            sample_hex_case: HexCase::Upper,
            swatch_hex_case: HexCase::Upper,
        };
        let generator = config.generator().unwrap();
        assert_eq!(generator.steps(), 21);
        assert_eq!(generator.variations(RgbColor::new(230, 126, 34))[10].hex, "#E67E22");
    }

    #[test]
    fn test_default_cases_for_sample_and_swatches() {
        let config = PickerConfig::default();
        let orange = RgbColor::new(230, 126, 34);

        let selected = config.sample([230, 126, 34, 255], Position { x: 3, y: 7 }).unwrap();
        assert_eq!(selected.hex, "#E67E22");
        assert_eq!(config.select(orange, None).hex, "#E67E22");

        let ramp = selected.variations(&config.generator().unwrap());
        assert_eq!(ramp[5].hex, "#e67e22");
        assert!(ramp[5].hex.eq_ignore_ascii_case(&selected.hex));
    }
}
