//! # gainmap-primaries
//!
//! Gamut-dependent color math for gain map encode and decode.
//!
//! - [`luminance`] - Per-gamut weighted luma of gamma-domain RGB
//! - [`yuv`] - sRGB (BT.601 coefficients) and BT.2100 RGB <-> YUV
//! - [`gamut`] - Fixed BT.709 / Display-P3 / BT.2100 conversion matrices and
//!   the (SDR gamut, HDR gamut) transform lookup
//! - [`chromaticity`] - Primaries as CIE xy and matrices derived from them
//!
//! # Usage
//!
//! ```rust
//! use gainmap_core::{Color, ColorGamut};
//! use gainmap_primaries::{gamut_to_gamut_transform, luminance_fn};
//!
//! let to_sdr = gamut_to_gamut_transform(ColorGamut::Bt709, ColorGamut::Bt2100)
//!     .expect("both gamuts specified");
//! let luma = luminance_fn(ColorGamut::Bt709).unwrap();
//!
//! let y = luma(to_sdr(Color::new(0.2, 0.4, 0.1)));
//! ```
//!
//! # Dependencies
//!
//! - [`gainmap-core`] - `Color`, `ColorGamut`
//! - [`gainmap-math`] - `Mat3`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod gamut;
pub mod luminance;
pub mod yuv;

pub use gamut::{gamut_to_gamut_transform, identity_conversion, ColorTransformFn};
pub use luminance::{bt2100_luminance, luminance_fn, p3_luminance, srgb_luminance, LuminanceFn};
pub use yuv::{bt2100_rgb_to_yuv, bt2100_yuv_to_rgb, srgb_rgb_to_yuv, srgb_yuv_to_rgb};
