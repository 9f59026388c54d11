//! # gainmap-math
//!
//! Math utilities for gain map and color processing.
//!
//! - [`Mat3`] - 3x3 matrices for gamut conversions
//! - Interpolation helpers ([`lerp`], [`clamp_index`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * color
//! ```
//!
//! Inversion goes through [`glam`].
//!
//! # Usage
//!
//! ```rust
//! use gainmap_core::Color;
//! use gainmap_math::Mat3;
//!
//! let bt709_to_p3 = Mat3::from_rows([
//!     [0.82254, 0.17755, 0.00006],
//!     [0.03312, 0.96684, -0.00001],
//!     [0.01706, 0.07240, 0.91049],
//! ]);
//!
//! let p3 = bt709_to_p3 * Color::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `gainmap-primaries` - Gamut conversion matrices
//! - `gainmap-codec` - Gain map sampling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;

pub use interp::*;
pub use mat3::*;
