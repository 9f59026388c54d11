//! Error types for codec configuration.
//!
//! The per-pixel functions in this crate are infallible. Errors come only
//! from validating a [`CodecConfig`](crate::CodecConfig) or wrapping buffer
//! descriptors.

use gainmap_core::ColorGamut;
use thiserror::Error;

/// Codec error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Buffer descriptor or scale factor rejected.
    #[error(transparent)]
    Core(#[from] gainmap_core::Error),

    /// HDR ratio is not finite or not above 1.
    #[error("invalid hdr ratio: {0} (must be finite and > 1)")]
    InvalidHdrRatio(f32),

    /// No transform between the configured gamuts.
    #[error("unsupported gamut conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// HDR rendition gamut.
        from: ColorGamut,
        /// SDR rendition gamut.
        to: ColorGamut,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
