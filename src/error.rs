//! Error types for the pick_colors library

use thiserror::Error;

/// Result type alias for pick_colors operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors raised at the input boundary of the picker core.
///
/// Color conversions themselves are total and never fail; these variants
/// cover parsing user-supplied values, checked parameter entry points and
/// configuration persistence.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Hex color string could not be parsed
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or decoded
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PickerError {
    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Bad user input can be corrected and retried; a broken configuration
    /// file cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PickerError::InvalidHex { .. } | PickerError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PickerError::InvalidHex { input, .. } => {
                format!("'{}' is not a valid color. Use the #RRGGBB format.", input)
            }
            PickerError::InvalidParameter { parameter, .. } => {
                format!("The value for '{}' is out of range.", parameter)
            }
            PickerError::ConfigError { .. } => {
                "Could not load picker settings. Default settings will be used.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_display() {
        let err = PickerError::invalid_hex("#GG0000", "invalid red channel");
        assert_eq!(
            err.to_string(),
            "Invalid hex color '#GG0000': invalid red channel"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PickerError::invalid_parameter("steps", 1);
        assert_eq!(err.to_string(), "Invalid parameter: steps = 1");
        assert!(err.user_message().contains("steps"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PickerError::config("Failed to read picker.json", io);
        assert!(!err.is_recoverable());
        assert!(std::error::Error::source(&err).is_some());
    }
}
