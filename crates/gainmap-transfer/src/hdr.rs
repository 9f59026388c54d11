//! HDR transfer selection.

use gainmap_core::Color;

use crate::{hlg, pq};

/// Transfer curve of the HDR rendition.
///
/// Chosen once per image so per-pixel code calls a fixed curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HdrTransfer {
    /// Hybrid Log-Gamma.
    #[default]
    Hlg,
    /// Perceptual Quantizer.
    Pq,
}

impl HdrTransfer {
    /// Curve name.
    pub const fn name(self) -> &'static str {
        match self {
            HdrTransfer::Hlg => "HLG",
            HdrTransfer::Pq => "PQ",
        }
    }

    /// Scalar OETF for this curve.
    #[inline]
    pub fn oetf_fn(self) -> fn(f32) -> f32 {
        match self {
            HdrTransfer::Hlg => hlg::oetf,
            HdrTransfer::Pq => pq::oetf,
        }
    }

    /// Scalar inverse OETF for this curve.
    #[inline]
    pub fn inv_oetf_fn(self) -> fn(f32) -> f32 {
        match self {
            HdrTransfer::Hlg => hlg::inv_oetf,
            HdrTransfer::Pq => pq::inv_oetf,
        }
    }

    /// Linear to encoded, per channel.
    #[inline]
    pub fn oetf(self, e: Color) -> Color {
        e.map(self.oetf_fn())
    }

    /// Encoded to linear, per channel.
    #[inline]
    pub fn inv_oetf(self, e_gamma: Color) -> Color {
        e_gamma.map(self.inv_oetf_fn())
    }
}
