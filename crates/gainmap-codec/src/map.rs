//! Gain map sampling.
//!
//! The map is stored at `1 / map_scale_factor` of the image resolution.
//! Sampling converts an image coordinate to map space and blends the four
//! surrounding map bytes, clamping at the right and bottom edges.
//!
//! Two filters are provided:
//!
//! - [`sample_map`] - the legacy weighting. Its four weights sum to 2, not 1,
//!   so a uniform map of gain `g` samples as `2g`. Kept for bit-exact decode
//!   of existing content.
//! - [`sample_map_bilinear`] - standard bilinear weights. Grid-aligned samples
//!   return the stored value.

use gainmap_core::GainMapImage;
use gainmap_math::{clamp_index, lerp};

use crate::gain::byte_to_gain;

/// Map sampling filter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MapFilter {
    /// Legacy weighting (weights sum to 2).
    #[default]
    Legacy,
    /// Standard bilinear interpolation.
    Bilinear,
}

impl MapFilter {
    /// Sample `map` at image coordinate `(x, y)` with this filter.
    #[inline]
    pub fn sample(self, map: &GainMapImage<'_>, map_scale_factor: usize, x: usize, y: usize) -> f32 {
        match self {
            MapFilter::Legacy => sample_map(map, map_scale_factor, x, y),
            MapFilter::Bilinear => sample_map_bilinear(map, map_scale_factor, x, y),
        }
    }
}

/// Neighbourhood of an image coordinate in map space.
struct Neighbours {
    /// (lower, lower)
    e1: f32,
    /// (lower x, upper y)
    e2: f32,
    /// (upper x, lower y)
    e3: f32,
    /// (upper, upper)
    e4: f32,
    x_influence: f32,
    y_influence: f32,
}

#[inline]
fn neighbours(map: &GainMapImage<'_>, map_scale_factor: usize, x: usize, y: usize) -> Neighbours {
    let scale = map_scale_factor as f32;
    let x_map = x as f32 / scale;
    let y_map = y as f32 / scale;

    let x_lower = x_map.floor() as usize;
    let y_lower = y_map.floor() as usize;
    let x_upper = clamp_index(x_lower + 1, map.width());
    let y_upper = clamp_index(y_lower + 1, map.height());
    let x_lower = clamp_index(x_lower, map.width());
    let y_lower = clamp_index(y_lower, map.height());

    // Influence is measured from the clamped lower index.
    let x_influence = x_map - x_lower as f32;
    let y_influence = y_map - y_lower as f32;

    Neighbours {
        e1: byte_to_gain(map.get(x_lower, y_lower)),
        e2: byte_to_gain(map.get(x_lower, y_upper)),
        e3: byte_to_gain(map.get(x_upper, y_lower)),
        e4: byte_to_gain(map.get(x_upper, y_upper)),
        x_influence,
        y_influence,
    }
}

/// Sample the gain at image coordinate `(x, y)` with the legacy weights.
///
/// ```text
/// e1 * (xi + yi) / 2 + e2 * (xi + 1 - yi) / 2
///   + e3 * (1 - xi + yi) / 2 + e4 * (2 - xi - yi) / 2
/// ```
///
/// The weights sum to 2. On a uniform map of gain `g` this returns `2g`.
pub fn sample_map(map: &GainMapImage<'_>, map_scale_factor: usize, x: usize, y: usize) -> f32 {
    let Neighbours {
        e1,
        e2,
        e3,
        e4,
        x_influence: xi,
        y_influence: yi,
    } = neighbours(map, map_scale_factor, x, y);

    e1 * (xi + yi) / 2.0
        + e2 * (xi + 1.0 - yi) / 2.0
        + e3 * (1.0 - xi + yi) / 2.0
        + e4 * (1.0 - xi + 1.0 - yi) / 2.0
}

/// Sample the gain at image coordinate `(x, y)` with bilinear weights.
///
/// Past the right or bottom edge the upper neighbour clamps onto the lower
/// one, so the result holds the edge value.
pub fn sample_map_bilinear(
    map: &GainMapImage<'_>,
    map_scale_factor: usize,
    x: usize,
    y: usize,
) -> f32 {
    let n = neighbours(map, map_scale_factor, x, y);
    let top = lerp(n.e1, n.e3, n.x_influence);
    let bottom = lerp(n.e2, n.e4, n.x_influence);
    lerp(top, bottom, n.y_influence)
}
