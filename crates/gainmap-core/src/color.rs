//! Three-channel color triple.
//!
//! [`Color`] carries either an (R, G, B) or a (Y, U, V) triple. Nothing in
//! the type records which; callers track the active interpretation. The YUV
//! accessors ([`Color::y`], [`Color::u`], [`Color::v`]) alias the RGB fields.
//!
//! # Usage
//!
//! ```rust
//! use gainmap_core::Color;
//!
//! let rgb = Color::new(1.0, 0.5, 0.25);
//! let sum = rgb + Color::splat(0.25);
//! let avg = sum / 2.0;
//!
//! let yuv = Color::yuv(0.5, 0.0, 0.0);
//! assert_eq!(yuv.y(), yuv.r);
//! ```

use std::ops::{Add, AddAssign, Div, Index, Mul, Sub};

/// A color triple of 32-bit floats.
///
/// All arithmetic is channel-independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    /// R channel, or Y when read as YUV
    pub r: f32,
    /// G channel, or U when read as YUV
    pub g: f32,
    /// B channel, or V when read as YUV
    pub b: f32,
}

impl Color {
    /// Black / zero triple.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// White / all-ones triple.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates an RGB triple.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a YUV triple.
    ///
    /// Stored in the same slots as R, G, B.
    #[inline]
    pub const fn yuv(y: f32, u: f32, v: f32) -> Self {
        Self::new(y, u, v)
    }

    /// Creates a triple with every channel set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Luma channel of a YUV triple.
    #[inline]
    pub const fn y(self) -> f32 {
        self.r
    }

    /// Blue-difference chroma of a YUV triple.
    #[inline]
    pub const fn u(self) -> f32 {
        self.g
    }

    /// Red-difference chroma of a YUV triple.
    #[inline]
    pub const fn v(self) -> f32 {
        self.b
    }

    /// Applies `f` to every channel.
    ///
    /// ```rust
    /// use gainmap_core::Color;
    ///
    /// let c = Color::new(1.0, 4.0, 9.0).map(f32::sqrt);
    /// assert_eq!(c, Color::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Weighted channel sum.
    #[inline]
    pub fn dot(self, weights: [f32; 3]) -> f32 {
        weights[0] * self.r + weights[1] * self.g + weights[2] * self.b
    }

    /// Returns the largest channel.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Returns true if all channels are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Index<usize> for Color {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Color index out of bounds: {}", i),
        }
    }
}

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Div<f32> for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color> for [f32; 3] {
    #[inline]
    fn from(c: Color) -> [f32; 3] {
        c.to_array()
    }
}
