//! Hybrid Log-Gamma (HLG) transfer function.
//!
//! Square-root curve for shadows, logarithmic curve for highlights.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 1] (scene-referred, relative)
//!
//! # Reference
//!
//! ITU-R BT.2100-2

use gainmap_core::Color;

// HLG constants
const A: f32 = 0.17883277;
const B: f32 = 0.28466892; // 1 - 4*A
const C: f32 = 0.55991073; // 0.5 - A*ln(4*A)

/// HLG OETF: linear scene light to HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = A * ln(12*E - B) + C
/// ```
///
/// # Example
///
/// ```rust
/// use gainmap_transfer::hlg::oetf;
///
/// assert_eq!(oetf(1.0 / 12.0), 0.5);
/// ```
#[inline]
pub fn oetf(e: f32) -> f32 {
    if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: HLG signal to linear scene light.
///
/// # Formula
///
/// ```text
/// if E' <= 0.5:
///     E = E'^2 / 3
/// else:
///     E = (exp((E' - C) / A) + B) / 12
/// ```
#[inline]
pub fn inv_oetf(e_gamma: f32) -> f32 {
    if e_gamma <= 0.5 {
        e_gamma * e_gamma / 3.0
    } else {
        (((e_gamma - C) / A).exp() + B) / 12.0
    }
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
