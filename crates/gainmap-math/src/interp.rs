//! Interpolation utilities for map sampling.
//!
//! # Usage
//!
//! ```rust
//! use gainmap_math::{clamp_index, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(clamp_index(7, 4), 3);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps an index to `[0, len - 1]`.
///
/// Edge-clamp addressing for grid lookups. `len` must be non-zero.
#[inline]
pub fn clamp_index(i: usize, len: usize) -> usize {
    i.min(len - 1)
}
