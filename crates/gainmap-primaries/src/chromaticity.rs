//! Chromaticity definitions and derived RGB-to-RGB matrices.
//!
//! The fixed matrices in [`crate::gamut`] are what the codec uses. This
//! module derives the same conversions from CIE xy primaries so they can be
//! checked, and so callers can build conversions at full f32 precision.
//!
//! # Algorithm
//!
//! 1. Convert xy chromaticities to XYZ (with Y=1)
//! 2. Solve for per-primary scale factors so RGB (1,1,1) maps to the white point
//! 3. `RGB_src -> XYZ -> RGB_dst`

use gainmap_core::{Color, ColorGamut};
use gainmap_math::Mat3;

/// RGB primaries and white point as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub r: (f32, f32),
    /// Green primary (x, y)
    pub g: (f32, f32),
    /// Blue primary (x, y)
    pub b: (f32, f32),
    /// White point (x, y)
    pub w: (f32, f32),
}

/// D65 white point chromaticity.
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

/// BT.709 / sRGB primaries.
pub const BT709: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
};

/// Display-P3 primaries (DCI-P3 with a D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
};

/// BT.2100 primaries (same as BT.2020).
pub const BT2100: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
};

impl Primaries {
    /// Primaries of `gamut`, `None` for [`ColorGamut::Unspecified`].
    pub const fn for_gamut(gamut: ColorGamut) -> Option<Self> {
        match gamut {
            ColorGamut::Bt709 => Some(BT709),
            ColorGamut::DisplayP3 => Some(DISPLAY_P3),
            ColorGamut::Bt2100 => Some(BT2100),
            ColorGamut::Unspecified => None,
        }
    }
}

fn xy_to_xyz((x, y): (f32, f32)) -> [f32; 3] {
    if y.abs() < 1e-10 {
        [0.0; 3]
    } else {
        [x / y, 1.0, (1.0 - x - y) / y]
    }
}

/// RGB to XYZ matrix for a set of primaries.
///
/// ```rust
/// use gainmap_core::Color;
/// use gainmap_primaries::chromaticity::{rgb_to_xyz_matrix, BT709};
///
/// let white = rgb_to_xyz_matrix(&BT709) * Color::ONE;
/// assert!((white.g - 1.0).abs() < 1e-3);
/// ```
pub fn rgb_to_xyz_matrix(p: &Primaries) -> Mat3 {
    let r = xy_to_xyz(p.r);
    let g = xy_to_xyz(p.g);
    let b = xy_to_xyz(p.b);
    let w = Color::from_array(xy_to_xyz(p.w));

    let m = Mat3::from_cols([r, g, b]);
    let s = m.inverse().unwrap_or(Mat3::IDENTITY) * w;

    let scale = |col: [f32; 3], k: f32| col.map(|v| v * k);
    Mat3::from_cols([scale(r, s.r), scale(g, s.g), scale(b, s.b)])
}

/// XYZ to RGB matrix; inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(p: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(p).inverse().unwrap_or(Mat3::IDENTITY)
}

/// Matrix converting linear RGB in `src` primaries to `dst` primaries.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}

/// Derived conversion between two gamuts.
///
/// `None` if either side is unspecified.
pub fn derived_conversion(src: ColorGamut, dst: ColorGamut) -> Option<Mat3> {
    let src = Primaries::for_gamut(src)?;
    let dst = Primaries::for_gamut(dst)?;
    Some(rgb_to_rgb_matrix(&src, &dst))
}
