//! Output packing.

use gainmap_core::Color;

const TEN_BITS: u32 = 0x3ff;
const OPAQUE_ALPHA: u32 = 0x3 << 30;

/// Pack gamma-encoded RGB into RGBA 10-10-10-2.
///
/// R occupies bits 0-9, G bits 10-19, B bits 20-29 and alpha (always 3) bits
/// 30-31. Each channel is scaled by 1023 and truncated. Callers clamp to
/// `[0, 1]` first; out-of-range values wrap through the 10-bit mask.
///
/// ```rust
/// use gainmap_core::Color;
/// use gainmap_codec::pack_rgba1010102;
///
/// assert_eq!(pack_rgba1010102(Color::new(1.0, 0.0, 1.0)), 0xFFF0_03FF);
/// ```
#[inline]
pub fn pack_rgba1010102(e_gamma: Color) -> u32 {
    (TEN_BITS & (e_gamma.r * 1023.0) as u32)
        | ((TEN_BITS & (e_gamma.g * 1023.0) as u32) << 10)
        | ((TEN_BITS & (e_gamma.b * 1023.0) as u32) << 20)
        | OPAQUE_ALPHA
}
