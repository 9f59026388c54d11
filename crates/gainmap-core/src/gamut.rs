//! Color gamut identifiers.
//!
//! A [`ColorGamut`] names the RGB primaries an image was encoded with. It
//! selects the luminance weights and the gamut conversion matrix used by
//! `gainmap-primaries`. [`ColorGamut::Unspecified`] has no weights and no
//! conversions; lookups keyed on it come back empty.
//!
//! # Supported Gamuts
//!
//! | Gamut | Primaries | Typical use |
//! |-------|-----------|-------------|
//! | [`Bt709`](ColorGamut::Bt709) | ITU-R BT.709 / sRGB | SDR base images |
//! | [`DisplayP3`](ColorGamut::DisplayP3) | DCI-P3, D65 white | Wide-gamut SDR |
//! | [`Bt2100`](ColorGamut::Bt2100) | ITU-R BT.2100 / BT.2020 | HDR (HLG, PQ) |

use std::fmt;
use std::str::FromStr;

/// RGB primaries of an image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColorGamut {
    /// ITU-R BT.709 (sRGB) primaries.
    Bt709,
    /// Display-P3 primaries.
    DisplayP3,
    /// ITU-R BT.2100 primaries.
    Bt2100,
    /// Unknown primaries; no conversion is available.
    #[default]
    Unspecified,
}

impl ColorGamut {
    /// Every gamut that has a defined conversion, in table order.
    pub const ALL_SPECIFIED: [ColorGamut; 3] =
        [ColorGamut::Bt709, ColorGamut::DisplayP3, ColorGamut::Bt2100];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorGamut::Bt709 => "BT.709",
            ColorGamut::DisplayP3 => "Display-P3",
            ColorGamut::Bt2100 => "BT.2100",
            ColorGamut::Unspecified => "Unspecified",
        }
    }

    /// Returns false only for [`ColorGamut::Unspecified`].
    #[inline]
    pub const fn is_specified(self) -> bool {
        !matches!(self, ColorGamut::Unspecified)
    }

    /// Row/column of this gamut in a 3x3 lookup table.
    ///
    /// `None` for [`ColorGamut::Unspecified`].
    #[inline]
    pub const fn table_index(self) -> Option<usize> {
        match self {
            ColorGamut::Bt709 => Some(0),
            ColorGamut::DisplayP3 => Some(1),
            ColorGamut::Bt2100 => Some(2),
            ColorGamut::Unspecified => None,
        }
    }
}

impl fmt::Display for ColorGamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorGamut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['.', '_'], "-").as_str() {
            "bt709" | "bt-709" | "srgb" | "rec709" => Ok(ColorGamut::Bt709),
            "p3" | "display-p3" | "displayp3" => Ok(ColorGamut::DisplayP3),
            "bt2100" | "bt-2100" | "bt2020" | "bt-2020" | "rec2020" => Ok(ColorGamut::Bt2100),
            "unspecified" => Ok(ColorGamut::Unspecified),
            other => Err(format!("unknown color gamut: {other}")),
        }
    }
}
