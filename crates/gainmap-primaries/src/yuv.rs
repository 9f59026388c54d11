//! RGB <-> YUV conversions in the gamma domain.
//!
//! # sRGB
//!
//! Full-range BT.601 coefficients, as used by JPEG.
//!
//! # BT.2100
//!
//! Forward: `Y` from the BT.2100 luma weights, `U = (B - Y) / Cb`,
//! `V = (R - Y) / Cr`. Inverse, solving the forward equations:
//!
//! ```text
//! R = Y + Cr * V
//! B = Y + Cb * U
//! G = (Y - Kr * R - Kb * B) / Kg
//!   = Y - (Kb * Cb / Kg) * U - (Kr * Cr / Kg) * V
//! ```
//!
//! The `Y` coefficient of `G` is `(1 - Kr - Kb) / Kg = 1`.

use gainmap_core::Color;

use crate::luminance::{bt2100_luminance, srgb_luminance, BT2100_WEIGHTS};

const SRGB_R_CR: f32 = 1.402;
const SRGB_G_CB: f32 = 0.34414;
const SRGB_G_CR: f32 = 0.71414;
const SRGB_B_CB: f32 = 1.772;

const SRGB_U: [f32; 3] = [-0.1687, -0.3313, 0.5];
const SRGB_V: [f32; 3] = [0.5, -0.4187, -0.0813];

const BT2100_CB: f32 = 1.8814;
const BT2100_CR: f32 = 1.4746;
const BT2100_G_CB: f32 = BT2100_WEIGHTS[2] * BT2100_CB / BT2100_WEIGHTS[1];
const BT2100_G_CR: f32 = BT2100_WEIGHTS[0] * BT2100_CR / BT2100_WEIGHTS[1];

/// sRGB gamma RGB to YUV.
#[inline]
pub fn srgb_rgb_to_yuv(e_gamma: Color) -> Color {
    Color::yuv(
        srgb_luminance(e_gamma),
        e_gamma.dot(SRGB_U),
        e_gamma.dot(SRGB_V),
    )
}

/// sRGB gamma YUV to RGB.
#[inline]
pub fn srgb_yuv_to_rgb(e_gamma: Color) -> Color {
    Color::new(
        e_gamma.y() + SRGB_R_CR * e_gamma.v(),
        e_gamma.y() - SRGB_G_CB * e_gamma.u() - SRGB_G_CR * e_gamma.v(),
        e_gamma.y() + SRGB_B_CB * e_gamma.u(),
    )
}

/// BT.2100 gamma RGB to YUV.
#[inline]
pub fn bt2100_rgb_to_yuv(e_gamma: Color) -> Color {
    let y_gamma = bt2100_luminance(e_gamma);
    Color::yuv(
        y_gamma,
        (e_gamma.b - y_gamma) / BT2100_CB,
        (e_gamma.r - y_gamma) / BT2100_CR,
    )
}

/// BT.2100 gamma YUV to RGB.
#[inline]
pub fn bt2100_yuv_to_rgb(e_gamma: Color) -> Color {
    Color::new(
        e_gamma.y() + BT2100_CR * e_gamma.v(),
        e_gamma.y() - BT2100_G_CB * e_gamma.u() - BT2100_G_CR * e_gamma.v(),
        e_gamma.y() + BT2100_CB * e_gamma.u(),
    )
}
