//! Codec configuration.
//!
//! The per-image choices that the per-pixel functions take as arguments,
//! gathered in one place and validated once.
//!
//! # Example
//!
//! ```rust
//! use gainmap_codec::{CodecConfig, ColorGamut, HdrTransfer, MapFilter};
//!
//! let config = CodecConfig::new(8.0)
//!     .with_gamuts(ColorGamut::DisplayP3, ColorGamut::Bt2100)
//!     .with_hdr_transfer(HdrTransfer::Pq)
//!     .with_map_filter(MapFilter::Bilinear);
//! assert!(config.validate().is_ok());
//! ```

use gainmap_core::ColorGamut;
use gainmap_primaries::gamut_to_gamut_transform;
use gainmap_transfer::HdrTransfer;
use tracing::debug;

use crate::error::{CodecError, CodecResult};
use crate::map::MapFilter;

/// Default HDR-to-SDR peak ratio.
pub const DEFAULT_HDR_RATIO: f32 = 4.0;

/// Default downscale between image and gain map.
pub const DEFAULT_MAP_SCALE_FACTOR: usize = 4;

/// Per-image codec settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Peak HDR luminance over SDR luminance. Must be finite and above 1.
    pub hdr_ratio: f32,
    /// Image pixels per gain map sample along each axis.
    pub map_scale_factor: usize,
    /// Gamut of the SDR rendition.
    pub sdr_gamut: ColorGamut,
    /// Gamut of the HDR rendition.
    pub hdr_gamut: ColorGamut,
    /// Transfer curve of the HDR rendition.
    pub hdr_transfer: HdrTransfer,
    /// Filter used when sampling the map on decode.
    pub map_filter: MapFilter,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hdr_ratio: DEFAULT_HDR_RATIO,
            map_scale_factor: DEFAULT_MAP_SCALE_FACTOR,
            sdr_gamut: ColorGamut::Bt709,
            hdr_gamut: ColorGamut::Bt2100,
            hdr_transfer: HdrTransfer::Hlg,
            map_filter: MapFilter::Legacy,
        }
    }
}

impl CodecConfig {
    /// Defaults with the given HDR ratio.
    pub fn new(hdr_ratio: f32) -> Self {
        Self {
            hdr_ratio,
            ..Self::default()
        }
    }

    /// Set the map scale factor.
    pub fn with_map_scale_factor(mut self, map_scale_factor: usize) -> Self {
        self.map_scale_factor = map_scale_factor;
        self
    }

    /// Set the SDR and HDR gamuts.
    pub fn with_gamuts(mut self, sdr_gamut: ColorGamut, hdr_gamut: ColorGamut) -> Self {
        self.sdr_gamut = sdr_gamut;
        self.hdr_gamut = hdr_gamut;
        self
    }

    /// Set the HDR transfer curve.
    pub fn with_hdr_transfer(mut self, hdr_transfer: HdrTransfer) -> Self {
        self.hdr_transfer = hdr_transfer;
        self
    }

    /// Set the map sampling filter.
    pub fn with_map_filter(mut self, map_filter: MapFilter) -> Self {
        self.map_filter = map_filter;
        self
    }

    /// Check the settings can drive the per-pixel math.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidHdrRatio`] if the ratio is not finite or not above 1
    /// - [`CodecError::Core`] wrapping `InvalidScaleFactor` for a zero scale
    /// - [`CodecError::UnsupportedConversion`] if either gamut is unspecified
    pub fn validate(&self) -> CodecResult<()> {
        if !self.hdr_ratio.is_finite() || self.hdr_ratio <= 1.0 {
            debug!(hdr_ratio = self.hdr_ratio, "rejecting hdr ratio");
            return Err(CodecError::InvalidHdrRatio(self.hdr_ratio));
        }
        if self.map_scale_factor == 0 {
            debug!("rejecting zero map scale factor");
            return Err(gainmap_core::Error::InvalidScaleFactor(self.map_scale_factor).into());
        }
        if gamut_to_gamut_transform(self.sdr_gamut, self.hdr_gamut).is_none() {
            debug!(sdr = %self.sdr_gamut, hdr = %self.hdr_gamut, "rejecting gamut pair");
            return Err(CodecError::UnsupportedConversion {
                from: self.hdr_gamut,
                to: self.sdr_gamut,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CodecConfig::default();
        assert_eq!(config.hdr_ratio, 4.0);
        assert_eq!(config.map_scale_factor, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = CodecConfig::new(2.5)
            .with_map_scale_factor(8)
            .with_gamuts(ColorGamut::DisplayP3, ColorGamut::DisplayP3)
            .with_hdr_transfer(HdrTransfer::Pq)
            .with_map_filter(MapFilter::Bilinear);
        assert_eq!(config.hdr_ratio, 2.5);
        assert_eq!(config.map_scale_factor, 8);
        assert_eq!(config.sdr_gamut, ColorGamut::DisplayP3);
        assert_eq!(config.hdr_transfer, HdrTransfer::Pq);
        assert_eq!(config.map_filter, MapFilter::Bilinear);
    }

    #[test]
    fn test_rejects_bad_ratio() {
        for r in [1.0, 0.5, -4.0, f32::NAN, f32::INFINITY] {
            let err = CodecConfig::new(r).validate().unwrap_err();
            assert!(matches!(err, CodecError::InvalidHdrRatio(_)));
        }
    }

    #[test]
    fn test_rejects_zero_scale() {
        let err = CodecConfig::default()
            .with_map_scale_factor(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::Core(gainmap_core::Error::InvalidScaleFactor(0))
        );
    }

    #[test]
    fn test_rejects_unspecified_gamut() {
        let err = CodecConfig::default()
            .with_gamuts(ColorGamut::Bt709, ColorGamut::Unspecified)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedConversion {
                from: ColorGamut::Unspecified,
                to: ColorGamut::Bt709,
            }
        );
    }
}
