//! # gainmap-core
//!
//! Core types for HDR gain map (recovery map) math.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`Color`] - Three-channel float triple, read as RGB or YUV by context
//! - [`ColorGamut`] - BT.709, Display-P3, BT.2100 or unspecified primaries
//! - [`Yuv420Image`], [`P010Image`] - Borrowed views of raw planar buffers
//! - [`GainMapImage`] - Borrowed view of a single-channel gain map
//! - [`Error`] - Descriptor validation failures
//!
//! ## Crate Structure
//!
//! ```text
//! gainmap-core (this crate)
//!    ^
//!    |
//!    +-- gainmap-math (Mat3, interpolation)
//!    +-- gainmap-transfer (sRGB, HLG, PQ)
//!    +-- gainmap-primaries (luminance, YUV, gamut matrices)
//!    +-- gainmap-codec (gain encode/decode, samplers, packing)
//! ```
//!
//! ## Ownership
//!
//! None of the buffer types own pixel memory. The surrounding codec
//! allocates and frees image and map storage; this workspace only borrows it.
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize [`ColorGamut`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod gamut;
pub mod image;

pub use color::Color;
pub use error::{Error, Result};
pub use gamut::ColorGamut;
pub use image::{GainMapImage, P010Image, PixelFormat, Yuv420Image};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gainmap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::gamut::ColorGamut;
    pub use crate::image::{GainMapImage, P010Image, PixelFormat, Yuv420Image};
}
