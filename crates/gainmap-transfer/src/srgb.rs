//! sRGB transfer function.
//!
//! Piecewise: a linear segment near black and a 2.4 power curve above it.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use gainmap_core::Color;

/// sRGB inverse OETF: gamma-encoded [0, 1] to linear [0, 1].
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use gainmap_transfer::srgb::inv_oetf;
///
/// let linear = inv_oetf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn inv_oetf(e_gamma: f32) -> f32 {
    if e_gamma <= 0.04045 {
        e_gamma / 12.92
    } else {
        ((e_gamma + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: linear [0, 1] to gamma-encoded [0, 1].
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(e: f32) -> f32 {
    if e <= 0.0031308 {
        e * 12.92
    } else {
        1.055 * e.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies [`inv_oetf`] per channel.
#[inline]
pub fn inv_oetf_color(e_gamma: Color) -> Color {
    e_gamma.map(inv_oetf)
}

/// Applies [`oetf`] per channel.
#[inline]
pub fn oetf_color(e: Color) -> Color {
    e.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = oetf(inv_oetf(v));
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(inv_oetf(0.0), 0.0);
        assert!((inv_oetf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(inv_oetf(0.04045), 0.04045 / 12.92);
    }

    #[test]
    fn test_segments_meet() {
        let below = inv_oetf(0.04045);
        let above = inv_oetf(0.04046);
        assert!(above > below);
        assert!((above - below).abs() < 1e-5);
    }

    #[test]
    fn test_color_is_per_channel() {
        let c = inv_oetf_color(Color::new(0.0, 0.5, 1.0));
        assert_eq!(c, Color::new(inv_oetf(0.0), inv_oetf(0.5), inv_oetf(1.0)));
    }
}
