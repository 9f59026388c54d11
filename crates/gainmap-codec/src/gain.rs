//! Gain encode and apply.
//!
//! A gain byte stores `log2(y_hdr / y_sdr) / log2(hdr_ratio)` mapped from
//! `[-1, 1]` onto `[0, 255]`. Applying it multiplies the SDR value by
//! `hdr_ratio ^ gain`, computed in the log domain.
//!
//! # Example
//!
//! ```rust
//! use gainmap_codec::gain::{apply_gain_scalar, byte_to_gain, encode_gain};
//!
//! let byte = encode_gain(0.25, 0.5, 4.0);
//! assert_eq!(byte, 191);
//!
//! let hdr = apply_gain_scalar(0.25, byte_to_gain(byte), 4.0);
//! assert!((hdr - 0.5).abs() < 0.01);
//! ```

use gainmap_core::Color;

const HALF_RANGE: f32 = 127.5;

/// Normalized gain in `[-1, 1]` to a map byte.
///
/// Truncates toward zero. Out-of-range and NaN inputs saturate to 0 or 255.
#[inline]
pub fn gain_to_byte(gain: f32) -> u8 {
    (gain * HALF_RANGE + HALF_RANGE) as u8
}

/// Map byte to normalized gain in `[-1, 1]`.
#[inline]
pub fn byte_to_gain(byte: u8) -> f32 {
    (byte as f32 - HALF_RANGE) / HALF_RANGE
}

/// Encode the gain between an SDR and an HDR luminance as a map byte.
///
/// An SDR luminance of 0 (or below) counts as ratio 1. The ratio is clamped
/// to `[-hdr_ratio, hdr_ratio]` before taking its log, so a zero HDR
/// luminance gives `log2(0) = -inf` and saturates to byte 0.
#[inline]
pub fn encode_gain(y_sdr: f32, y_hdr: f32, hdr_ratio: f32) -> u8 {
    encode_gain_log2(y_sdr, y_hdr, hdr_ratio, hdr_ratio.log2())
}

/// [`encode_gain`] with `log2(hdr_ratio)` precomputed.
#[inline]
pub(crate) fn encode_gain_log2(y_sdr: f32, y_hdr: f32, hdr_ratio: f32, log2_ratio: f32) -> u8 {
    let mut ratio = if y_sdr > 0.0 { y_hdr / y_sdr } else { 1.0 };

    if ratio < -hdr_ratio {
        ratio = -hdr_ratio;
    }
    if ratio > hdr_ratio {
        ratio = hdr_ratio;
    }

    gain_to_byte(ratio.log2() / log2_ratio)
}

/// Apply a normalized gain to one linear channel.
#[inline]
pub fn apply_gain_scalar(e: f32, gain: f32, hdr_ratio: f32) -> f32 {
    apply_gain_log2(e, gain, hdr_ratio.log2())
}

#[inline]
pub(crate) fn apply_gain_log2(e: f32, gain: f32, log2_ratio: f32) -> f32 {
    (e.log2() + gain * log2_ratio).exp2()
}

/// Apply a normalized gain to each channel of a linear color.
///
/// Zero channels stay zero. Negative channels produce NaN, as the math is
/// done in the log domain.
#[inline]
pub fn apply_gain(e: Color, gain: f32, hdr_ratio: f32) -> Color {
    let log2_ratio = hdr_ratio.log2();
    e.map(|c| apply_gain_log2(c, gain, log2_ratio))
}
