//! Colorimetric constants and reference values
//!
//! Every conversion in [`crate::color`] reads its fixed numbers from here so
//! the white point, transfer function and CIE piecewise thresholds stay
//! consistent between XYZ, LAB, LUV and the lightness classifier.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. This is the standard reference for digital
/// images and computer displays.
pub mod d65 {
    /// D65 white point in CIE XYZ, scaled so that Y = 100
    pub const WHITE_POINT_XYZ: [f64; 3] = [95.047, 100.0, 108.883];

    /// D65 chromaticity coordinates
    pub const CHROMATICITY_X: f64 = 0.31271;
    pub const CHROMATICITY_Y: f64 = 0.32902;
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function and primaries
pub mod srgb {
    /// Encoded values at or below this threshold use the linear segment
    pub const GAMMA_THRESHOLD: f64 = 0.04045;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and divisor of the power-law segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_DIVISOR: f64 = 1.055;

    /// Exponent of the power-law segment
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Linear sRGB to CIE XYZ (D65, 2° observer), row-major
    pub const TO_XYZ: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];

    /// Rec. 709 luminance weights
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
}

/// CIE piecewise lightness function parameters
pub mod cie {
    /// Ratio below which the linear branch applies
    pub const EPSILON: f64 = 0.008856;

    /// Slope of the linear branch of f(t) in LAB
    pub const LINEAR_COEFFICIENT: f64 = 7.787;

    /// Offset of the linear branch of f(t) in LAB
    pub const LINEAR_OFFSET: f64 = 16.0 / 116.0;

    /// Linear branch of L* used by LUV (L = KAPPA * Y/Yn)
    pub const KAPPA: f64 = 903.3;
}

/// Tint and shade ramp defaults
pub mod variations {
    /// Number of swatches in the default white-to-black ramp
    pub const DEFAULT_STEPS: usize = 11;

    /// Percentage at which the ramp shows the unmodified color
    pub const MIDPOINT_PERCENT: f64 = 50.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_constants() {
        assert!((d65::WHITE_POINT_XYZ[0] - 95.047).abs() < 1e-9);
        assert!((d65::WHITE_POINT_XYZ[1] - 100.0).abs() < 1e-9);
        assert!((d65::WHITE_POINT_XYZ[2] - 108.883).abs() < 1e-9);
    }

    #[test]
    fn test_white_point_matches_chromaticity() {
        let [x, y, z] = d65::WHITE_POINT_XYZ;
        let sum = x + y + z;
        assert!((x / sum - d65::CHROMATICITY_X).abs() < 1e-3);
        assert!((y / sum - d65::CHROMATICITY_Y).abs() < 1e-3);
    }

    #[test]
    fn test_matrix_maps_white_to_white_point() {
        // Rows of the sRGB matrix sum to the D65 white point (Y = 1)
        for (row, white) in srgb::TO_XYZ.iter().zip(D65_WHITE_POINT_XYZ) {
            let sum: f64 = row.iter().sum();
            assert!((sum * 100.0 - white).abs() < 0.01);
        }
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum: f64 = srgb::LUMINANCE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
