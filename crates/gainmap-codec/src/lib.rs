//! # gainmap-codec
//!
//! Per-pixel math for encoding and decoding HDR gain maps.
//!
//! A gain map stores, at reduced resolution, how much brighter the HDR
//! rendition of an image is than its SDR base. This crate holds the pieces a
//! codec calls for every map sample:
//!
//! - **Gain** - encode an SDR/HDR luminance pair to a byte, apply a gain back
//! - **Map sampling** - legacy and bilinear reconstruction of the map
//! - **Samplers** - box-averaged YUV420 and P010 reads
//! - **Packing** - RGBA 10-10-10-2 output
//! - **Config** - [`CodecConfig`] and the resolved [`GainMapCodec`]
//!
//! Transfer curves, luminance, YUV conversion and gamut matrices come from
//! the sub-crates re-exported below.
//!
//! # Architecture
//!
//! ```text
//!                  gainmap-codec
//!                        |
//!        +---------------+---------------+
//!        |                               |
//! gainmap-transfer              gainmap-primaries
//!        |                               |
//!        |                         gainmap-math
//!        |                               |
//!        +---------------+---------------+
//!                        |
//!                   gainmap-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gainmap_codec::prelude::*;
//!
//! let codec = GainMapCodec::new(CodecConfig::default())?;
//!
//! // Encode: one map byte from a pair of linear colors
//! let sdr = Color::new(0.2, 0.2, 0.2);
//! let hdr = codec.hdr_to_sdr_gamut(Color::new(0.5, 0.5, 0.5));
//! let byte = codec.encode_gain(codec.luminance(sdr), codec.luminance(hdr));
//!
//! // Decode: apply it back and pack for display
//! let restored = codec.apply_gain(sdr, byte_to_gain(byte));
//! let out = pack_rgba1010102(srgb::oetf_color(restored / codec.hdr_ratio()));
//! assert_eq!(out >> 30, 3);
//! # Ok::<(), CodecError>(())
//! ```
//!
//! # Non-owning
//!
//! Nothing here allocates or frees pixel storage. Buffers are borrowed
//! through the descriptor types in `gainmap-core`.
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize [`CodecConfig`] and the enums it holds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod codec;
mod config;
mod error;
pub mod gain;
pub mod map;
pub mod pack;
pub mod sampler;

pub use codec::GainMapCodec;
pub use config::{CodecConfig, DEFAULT_HDR_RATIO, DEFAULT_MAP_SCALE_FACTOR};
pub use error::{CodecError, CodecResult};
pub use gain::{apply_gain, apply_gain_scalar, byte_to_gain, encode_gain, gain_to_byte};
pub use map::{MapFilter, sample_map, sample_map_bilinear};
pub use pack::pack_rgba1010102;
pub use sampler::{ImageSource, p010_pixel, sample_p010, sample_yuv420, yuv420_pixel};

pub use gainmap_core::{Color, ColorGamut, GainMapImage, P010Image, PixelFormat, Yuv420Image};
pub use gainmap_primaries::gamut_to_gamut_transform;
pub use gainmap_transfer::HdrTransfer;

// Re-export sub-crates for convenience
pub use gainmap_math as math;
pub use gainmap_primaries as primaries;
pub use gainmap_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        CodecConfig, CodecError, CodecResult, GainMapCodec, ImageSource, MapFilter,
    };

    pub use crate::{
        apply_gain, byte_to_gain, encode_gain, pack_rgba1010102, sample_map,
        sample_map_bilinear, sample_p010, sample_yuv420,
    };

    pub use gainmap_core::{Color, ColorGamut, GainMapImage, P010Image, PixelFormat, Yuv420Image};

    // Transfer curves
    pub use gainmap_transfer::{HdrTransfer, hlg, pq, srgb};

    // Gamut and luminance
    pub use gainmap_primaries::{
        bt2100_rgb_to_yuv, bt2100_yuv_to_rgb, gamut_to_gamut_transform, luminance_fn,
        srgb_rgb_to_yuv, srgb_yuv_to_rgb,
    };
}
