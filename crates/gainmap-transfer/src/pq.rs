//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 10000] cd/m2 (nits)
//!
//! # Two inverses
//!
//! [`eotf`] is the exact ST 2084 inverse of [`oetf`]. [`inv_oetf`] is the
//! closed form used by the gain map decode path: a constant divided by
//! `log2(E' * 10000)`. It does not invert [`oetf`]; decoded output depends
//! on it as-is, so it stays separate.
//!
//! # Reference
//!
//! SMPTE ST 2084:2014

use gainmap_core::Color;

/// Maximum luminance in cd/m2 (nits).
pub const L_MAX: f32 = 10000.0;

// PQ constants from SMPTE ST 2084
const M1: f32 = 2610.0 / 16384.0;
const M2: f32 = 2523.0 / 4096.0 * 128.0;
const C1: f32 = 3424.0 / 4096.0;
const C2: f32 = 2413.0 / 4096.0 * 32.0;
const C3: f32 = 2392.0 / 4096.0 * 32.0;

/// Numerator of [`inv_oetf`].
///
/// `log2(-(M1^(1/M2) - C1) / (C3 * M1^(1/M2) - C2))`, folded at compile time.
pub const INV_OETF_COEF: f32 = -2.075_457_2;

/// PQ OETF: absolute luminance (cd/m2) to PQ signal.
///
/// Negative input is clamped to 0.
///
/// # Formula
///
/// ```text
/// Y  = L / 10000
/// E' = ((C1 + C2 * Y^M1) / (1 + C3 * Y^M1))^M2
/// ```
///
/// # Example
///
/// ```rust
/// use gainmap_transfer::pq::oetf;
///
/// // Reference white (100 nits)
/// let signal = oetf(100.0);
/// assert!((signal - 0.508).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(e: f32) -> f32 {
    let e = e.max(0.0);
    let yp = (e / L_MAX).powf(M1);
    ((C1 + C2 * yp) / (1.0 + C3 * yp)).powf(M2)
}

/// Gain map decode-path PQ inverse.
///
/// `INV_OETF_COEF / log2(E' * 10000)`. Not the inverse of [`oetf`]; see the
/// module docs.
#[inline]
pub fn inv_oetf(e_gamma: f32) -> f32 {
    INV_OETF_COEF / (e_gamma * L_MAX).log2()
}

/// PQ EOTF: PQ signal to absolute luminance (cd/m2).
///
/// Exact inverse of [`oetf`].
///
/// ```rust
/// use gainmap_transfer::pq::{eotf, oetf};
///
/// let nits = eotf(oetf(203.0));
/// assert!((nits - 203.0).abs() < 0.1);
/// ```
#[inline]
pub fn eotf(e_gamma: f32) -> f32 {
    if e_gamma <= 0.0 {
        return 0.0;
    }

    let vp = e_gamma.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;

    L_MAX * (num / den).powf(1.0 / M1)
}

/// Applies [`oetf`] per channel.
#[inline]
pub fn oetf_color(e: Color) -> Color {
    e.map(oetf)
}

/// Applies [`inv_oetf`] per channel.
#[inline]
pub fn inv_oetf_color(e_gamma: Color) -> Color {
    e_gamma.map(inv_oetf)
}

/// Applies [`eotf`] per channel.
#[inline]
pub fn eotf_color(e_gamma: Color) -> Color {
    e_gamma.map(eotf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inv_oetf_coef_matches_derivation() {
        let p = M1.powf(1.0 / M2);
        let derived = (-(p - C1) / (C3 * p - C2)).log2();
        assert_abs_diff_eq!(INV_OETF_COEF, derived, epsilon = 1e-4);
    }

    #[test]
    fn test_roundtrip_unit_range() {
        for i in 0..=100 {
            let l = i as f32 / 100.0;
            let decoded = eotf(oetf(l));
            assert!(
                (l - decoded).abs() < l * 0.001 + 0.001,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_roundtrip_nits() {
        for &l in &[0.1, 1.0, 10.0, 100.0, 203.0, 1000.0, 4000.0, 10000.0] {
            let decoded = eotf(oetf(l));
            assert!((l - decoded).abs() < l * 0.001, "l={}, decoded={}", l, decoded);
        }
    }

    #[test]
    fn test_negative_clamped() {
        assert_eq!(oetf(-5.0), oetf(0.0));
    }

    #[test]
    fn test_boundaries() {
        assert!((oetf(L_MAX) - 1.0).abs() < 1e-5);
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - L_MAX).abs() < 1.0);
    }

    #[test]
    fn test_inv_oetf_closed_form() {
        // log2(0.1 * 10000) = log2(1000)
        let expected = INV_OETF_COEF / 1000.0f32.log2();
        assert_eq!(inv_oetf(0.1), expected);
        assert_eq!(inv_oetf_color(Color::splat(0.1)), Color::splat(expected));
    }
}
