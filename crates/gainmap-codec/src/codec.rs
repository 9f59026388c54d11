//! Per-image resolved codec.
//!
//! [`GainMapCodec`] validates a [`CodecConfig`] and resolves everything that
//! depends only on it: the gamut transform, the luminance function, the HDR
//! transfer curve and `log2(hdr_ratio)`. Per-pixel calls then run without any
//! lookups.
//!
//! # Example
//!
//! ```rust
//! use gainmap_codec::{CodecConfig, Color, GainMapCodec};
//!
//! let codec = GainMapCodec::new(CodecConfig::default())?;
//!
//! let byte = codec.encode_gain(0.25, 0.5);
//! let hdr = codec.apply_gain(Color::splat(0.25), gainmap_codec::byte_to_gain(byte));
//! assert!((hdr.g - 0.5).abs() < 0.01);
//! # Ok::<(), gainmap_codec::CodecError>(())
//! ```

use gainmap_core::{Color, GainMapImage};
use gainmap_primaries::{ColorTransformFn, LuminanceFn, gamut_to_gamut_transform, luminance_fn};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::gain::{apply_gain_log2, encode_gain_log2};
use crate::sampler::ImageSource;

/// Gain map math bound to one validated configuration.
#[derive(Clone, Copy, Debug)]
pub struct GainMapCodec {
    config: CodecConfig,
    log2_hdr_ratio: f32,
    hdr_to_sdr: ColorTransformFn,
    luminance: LuminanceFn,
}

impl GainMapCodec {
    /// Validate `config` and resolve its per-image functions.
    ///
    /// # Errors
    ///
    /// Whatever [`CodecConfig::validate`] rejects.
    pub fn new(config: CodecConfig) -> CodecResult<Self> {
        config.validate()?;

        let unsupported = || CodecError::UnsupportedConversion {
            from: config.hdr_gamut,
            to: config.sdr_gamut,
        };
        let hdr_to_sdr =
            gamut_to_gamut_transform(config.sdr_gamut, config.hdr_gamut).ok_or_else(unsupported)?;
        let luminance = luminance_fn(config.sdr_gamut).ok_or_else(unsupported)?;

        debug!(
            hdr_ratio = config.hdr_ratio,
            map_scale_factor = config.map_scale_factor,
            sdr = %config.sdr_gamut,
            hdr = %config.hdr_gamut,
            transfer = config.hdr_transfer.name(),
            filter = ?config.map_filter,
            "gain map codec ready"
        );

        Ok(Self {
            config,
            log2_hdr_ratio: config.hdr_ratio.log2(),
            hdr_to_sdr,
            luminance,
        })
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Peak HDR to SDR ratio.
    #[inline]
    pub fn hdr_ratio(&self) -> f32 {
        self.config.hdr_ratio
    }

    /// Image pixels per map sample along each axis.
    #[inline]
    pub fn map_scale_factor(&self) -> usize {
        self.config.map_scale_factor
    }

    /// Gain map size for a `width` x `height` image.
    ///
    /// Integer division; trailing pixels that do not fill a block are not
    /// covered by the map.
    #[inline]
    pub fn map_dimensions(&self, width: usize, height: usize) -> (usize, usize) {
        let s = self.config.map_scale_factor;
        (width / s, height / s)
    }

    /// Bring a linear HDR-gamut color into the SDR gamut.
    #[inline]
    pub fn hdr_to_sdr_gamut(&self, e: Color) -> Color {
        (self.hdr_to_sdr)(e)
    }

    /// Luminance in the SDR gamut.
    #[inline]
    pub fn luminance(&self, e: Color) -> f32 {
        (self.luminance)(e)
    }

    /// HDR transfer, encoded to linear.
    #[inline]
    pub fn hdr_inv_oetf(&self, e_gamma: Color) -> Color {
        self.config.hdr_transfer.inv_oetf(e_gamma)
    }

    /// HDR transfer, linear to encoded.
    #[inline]
    pub fn hdr_oetf(&self, e: Color) -> Color {
        self.config.hdr_transfer.oetf(e)
    }

    /// Map byte for an SDR / HDR luminance pair.
    #[inline]
    pub fn encode_gain(&self, y_sdr: f32, y_hdr: f32) -> u8 {
        encode_gain_log2(y_sdr, y_hdr, self.config.hdr_ratio, self.log2_hdr_ratio)
    }

    /// Apply a normalized gain to a linear color.
    #[inline]
    pub fn apply_gain(&self, e: Color, gain: f32) -> Color {
        let log2_ratio = self.log2_hdr_ratio;
        e.map(|c| apply_gain_log2(c, gain, log2_ratio))
    }

    /// Gain at image coordinate `(x, y)` using the configured filter.
    #[inline]
    pub fn sample_map(&self, map: &GainMapImage<'_>, x: usize, y: usize) -> f32 {
        self.config
            .map_filter
            .sample(map, self.config.map_scale_factor, x, y)
    }

    /// Box-averaged YUV of `source` for map coordinate `(x, y)`.
    #[inline]
    pub fn sample_source(&self, source: &ImageSource<'_>, x: usize, y: usize) -> Color {
        source.sample(self.config.map_scale_factor, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gain::{apply_gain, encode_gain};
    use crate::map::MapFilter;
    use gainmap_core::ColorGamut;
    use gainmap_primaries::gamut::bt2100_to_bt709;
    use gainmap_primaries::srgb_luminance;
    use gainmap_transfer::HdrTransfer;

    #[test]
    fn test_new_rejects_invalid() {
        assert!(GainMapCodec::new(CodecConfig::new(1.0)).is_err());
        let config = CodecConfig::default().with_gamuts(ColorGamut::Unspecified, ColorGamut::Bt709);
        assert!(matches!(
            GainMapCodec::new(config),
            Err(CodecError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_resolved_functions() {
        let codec = GainMapCodec::new(CodecConfig::default()).unwrap();
        let c = Color::new(0.2, 0.4, 0.6);
        assert_eq!(codec.hdr_to_sdr_gamut(c), bt2100_to_bt709(c));
        assert_eq!(codec.luminance(c), srgb_luminance(c));
        assert_eq!(codec.hdr_inv_oetf(c), HdrTransfer::Hlg.inv_oetf(c));
    }

    #[test]
    fn test_matches_free_functions() {
        let codec = GainMapCodec::new(CodecConfig::new(6.0)).unwrap();
        for (sdr, hdr) in [(0.1, 0.3), (0.5, 0.5), (0.8, 0.2), (0.0, 1.0)] {
            assert_eq!(codec.encode_gain(sdr, hdr), encode_gain(sdr, hdr, 6.0));
        }
        let c = Color::new(0.1, 0.2, 0.3);
        assert_eq!(codec.apply_gain(c, 0.4), apply_gain(c, 0.4, 6.0));
    }

    #[test]
    fn test_map_dimensions() {
        let codec = GainMapCodec::new(CodecConfig::default()).unwrap();
        assert_eq!(codec.map_dimensions(1920, 1080), (480, 270));
        assert_eq!(codec.map_dimensions(10, 7), (2, 1));
    }

    #[test]
    fn test_sample_map_uses_filter() {
        let data: Vec<u8> = (0..6).map(|i| (i * 40) as u8).collect();
        let map = GainMapImage::new(3, 2, &data).unwrap();
        let legacy = GainMapCodec::new(CodecConfig::default().with_map_scale_factor(2)).unwrap();
        let bilinear = GainMapCodec::new(
            CodecConfig::default()
                .with_map_scale_factor(2)
                .with_map_filter(MapFilter::Bilinear),
        )
        .unwrap();

        assert_eq!(legacy.sample_map(&map, 3, 1), crate::map::sample_map(&map, 2, 3, 1));
        assert_eq!(
            bilinear.sample_map(&map, 3, 1),
            crate::map::sample_map_bilinear(&map, 2, 3, 1)
        );
    }
}
