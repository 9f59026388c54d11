//! Error types for gainmap-core.
//!
//! Per-pixel math never fails. The only fallible operations in this crate
//! are the constructors of the buffer descriptors in [`crate::image`], which
//! check dimensions and slice lengths once so the hot sampling paths don't
//! have to.
//!
//! # Usage
//!
//! ```rust
//! use gainmap_core::{Error, GainMapImage};
//!
//! let err = GainMapImage::new(4, 4, &[0u8; 8]).unwrap_err();
//! assert!(matches!(err, Error::BufferTooSmall { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating image or map descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },

    /// Backing slice is shorter than the declared layout requires.
    ///
    /// Lengths are in samples of the buffer's element type (bytes for
    /// YUV420 and gain maps, 16-bit words for P010).
    #[error("{format} buffer too small: need {expected} samples, got {actual}")]
    BufferTooSmall {
        /// Layout name
        format: &'static str,
        /// Samples required by the declared dimensions
        expected: usize,
        /// Samples actually provided
        actual: usize,
    },

    /// Map scale factor of zero.
    #[error("invalid map scale factor: {0}")]
    InvalidScaleFactor(usize),
}
