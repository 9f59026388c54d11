//! Per-gamut luminance.
//!
//! Luminance here is a fixed weighted sum of gamma-domain R, G, B, the same
//! quantity the gain encoder compares between the SDR and HDR renditions.

use gainmap_core::{Color, ColorGamut};

/// sRGB / BT.709 luma weights (BT.601 coefficients).
pub const SRGB_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Display-P3 luma weights.
pub const P3_WEIGHTS: [f32; 3] = [0.22897, 0.69174, 0.07929];

/// BT.2100 luma weights.
pub const BT2100_WEIGHTS: [f32; 3] = [0.2627, 0.6780, 0.0593];

/// Luminance function signature.
pub type LuminanceFn = fn(Color) -> f32;

/// sRGB luminance.
///
/// ```rust
/// use gainmap_core::Color;
/// use gainmap_primaries::srgb_luminance;
///
/// assert!((srgb_luminance(Color::ONE) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn srgb_luminance(e: Color) -> f32 {
    e.dot(SRGB_WEIGHTS)
}

/// Display-P3 luminance.
#[inline]
pub fn p3_luminance(e: Color) -> f32 {
    e.dot(P3_WEIGHTS)
}

/// BT.2100 luminance.
#[inline]
pub fn bt2100_luminance(e: Color) -> f32 {
    e.dot(BT2100_WEIGHTS)
}

/// Luminance function for `gamut`.
///
/// `None` for [`ColorGamut::Unspecified`].
pub fn luminance_fn(gamut: ColorGamut) -> Option<LuminanceFn> {
    match gamut {
        ColorGamut::Bt709 => Some(srgb_luminance),
        ColorGamut::DisplayP3 => Some(p3_luminance),
        ColorGamut::Bt2100 => Some(bt2100_luminance),
        ColorGamut::Unspecified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_one() {
        for w in [SRGB_WEIGHTS, P3_WEIGHTS, BT2100_WEIGHTS] {
            assert_abs_diff_eq!(w.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_single_channel() {
        assert_eq!(srgb_luminance(Color::new(1.0, 0.0, 0.0)), 0.299);
        assert_eq!(p3_luminance(Color::new(0.0, 1.0, 0.0)), 0.69174);
        assert_eq!(bt2100_luminance(Color::new(0.0, 0.0, 1.0)), 0.0593);
    }

    #[test]
    fn test_lookup() {
        let c = Color::new(0.3, 0.6, 0.9);
        assert_eq!(luminance_fn(ColorGamut::Bt709).unwrap()(c), srgb_luminance(c));
        assert_eq!(luminance_fn(ColorGamut::DisplayP3).unwrap()(c), p3_luminance(c));
        assert_eq!(luminance_fn(ColorGamut::Bt2100).unwrap()(c), bt2100_luminance(c));
        assert!(luminance_fn(ColorGamut::Unspecified).is_none());
    }
}
