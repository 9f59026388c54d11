//! Fixed gamut conversion matrices and the transform lookup.
//!
//! Six 3x3 matrices convert linear RGB between BT.709, Display-P3 and
//! BT.2100 primaries (D65 throughout, no chromatic adaptation). Each pair
//! was fitted independently, so `A_TO_B * B_TO_A` is identity only to about
//! 1e-4.
//!
//! [`gamut_to_gamut_transform`] picks the matrix that brings HDR-gamut
//! colors into the SDR gamut, so luminance of both renditions is measured
//! against the same primaries.

use gainmap_core::{Color, ColorGamut};
use gainmap_math::Mat3;

/// Color transform signature.
pub type ColorTransformFn = fn(Color) -> Color;

/// BT.709 to Display-P3.
pub const BT709_TO_P3: Mat3 = Mat3::from_rows([
    [0.82254, 0.17755, 0.00006],
    [0.03312, 0.96684, -0.00001],
    [0.01706, 0.07240, 0.91049],
]);

/// BT.709 to BT.2100.
pub const BT709_TO_BT2100: Mat3 = Mat3::from_rows([
    [0.62740, 0.32930, 0.04332],
    [0.06904, 0.91958, 0.01138],
    [0.01636, 0.08799, 0.89555],
]);

/// Display-P3 to BT.709.
pub const P3_TO_BT709: Mat3 = Mat3::from_rows([
    [1.22482, -0.22490, -0.00007],
    [-0.04196, 1.04199, 0.00001],
    [-0.01961, -0.07865, 1.09831],
]);

/// Display-P3 to BT.2100.
pub const P3_TO_BT2100: Mat3 = Mat3::from_rows([
    [0.75378, 0.19862, 0.04754],
    [0.04576, 0.94177, 0.01250],
    [-0.00121, 0.01757, 0.98359],
]);

/// BT.2100 to BT.709.
pub const BT2100_TO_BT709: Mat3 = Mat3::from_rows([
    [1.66045, -0.58764, -0.07286],
    [-0.12445, 1.13282, -0.00837],
    [-0.01811, -0.10057, 1.11878],
]);

/// BT.2100 to Display-P3.
pub const BT2100_TO_P3: Mat3 = Mat3::from_rows([
    [1.34369, -0.28223, -0.06135],
    [-0.06533, 1.07580, -0.01051],
    [0.00283, -0.01957, 1.01679],
]);

/// Returns `e` unchanged.
#[inline]
pub fn identity_conversion(e: Color) -> Color {
    e
}

/// BT.709 to Display-P3.
#[inline]
pub fn bt709_to_p3(e: Color) -> Color {
    BT709_TO_P3 * e
}

/// BT.709 to BT.2100.
#[inline]
pub fn bt709_to_bt2100(e: Color) -> Color {
    BT709_TO_BT2100 * e
}

/// Display-P3 to BT.709.
#[inline]
pub fn p3_to_bt709(e: Color) -> Color {
    P3_TO_BT709 * e
}

/// Display-P3 to BT.2100.
#[inline]
pub fn p3_to_bt2100(e: Color) -> Color {
    P3_TO_BT2100 * e
}

/// BT.2100 to BT.709.
#[inline]
pub fn bt2100_to_bt709(e: Color) -> Color {
    BT2100_TO_BT709 * e
}

/// BT.2100 to Display-P3.
#[inline]
pub fn bt2100_to_p3(e: Color) -> Color {
    BT2100_TO_P3 * e
}

/// Conversions indexed `[destination][source]` by [`ColorGamut::table_index`].
static CONVERSIONS: [[ColorTransformFn; 3]; 3] = [
    // -> BT.709
    [identity_conversion, p3_to_bt709, bt2100_to_bt709],
    // -> Display-P3
    [bt709_to_p3, identity_conversion, bt2100_to_p3],
    // -> BT.2100
    [bt709_to_bt2100, p3_to_bt2100, identity_conversion],
];

/// Transform from `hdr_gamut` colors into `sdr_gamut`.
///
/// Returns `None` when either side is [`ColorGamut::Unspecified`]; there is
/// no implicit identity fallback. Matching gamuts return
/// [`identity_conversion`].
///
/// # Example
///
/// ```rust
/// use gainmap_core::{Color, ColorGamut};
/// use gainmap_primaries::gamut_to_gamut_transform;
///
/// let f = gamut_to_gamut_transform(ColorGamut::DisplayP3, ColorGamut::DisplayP3).unwrap();
/// let c = Color::new(0.1, 0.2, 0.3);
/// assert_eq!(f(c), c);
///
/// assert!(gamut_to_gamut_transform(ColorGamut::Bt709, ColorGamut::Unspecified).is_none());
/// ```
pub fn gamut_to_gamut_transform(
    sdr_gamut: ColorGamut,
    hdr_gamut: ColorGamut,
) -> Option<ColorTransformFn> {
    match (sdr_gamut.table_index(), hdr_gamut.table_index()) {
        (Some(dst), Some(src)) => Some(CONVERSIONS[dst][src]),
        _ => {
            tracing::trace!(%sdr_gamut, %hdr_gamut, "no gamut transform available");
            None
        }
    }
}
