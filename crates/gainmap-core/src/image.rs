//! Borrowed views of raw image and gain map buffers.
//!
//! The surrounding codec owns all pixel memory. These descriptors pair a
//! borrowed slice with its width and height and validate, once at
//! construction, that the slice is long enough for every index the samplers
//! can produce. Accessors return raw integer samples; normalization to
//! floating point lives in `gainmap-codec`.
//!
//! # Layouts
//!
//! ```text
//! YUV420 (8-bit planar, I420 order)
//!   [0, w*h)                 Y plane, row-major
//!   [w*h, w*h*5/4)           U plane, (w/2) x (h/2)
//!   [w*h*5/4, w*h*3/2)       V plane, (w/2) x (h/2)
//!
//! P010 (16-bit words, 10 significant bits in the high bits)
//!   [0, w*h)                 Y plane, row-major
//!   [w*h, w*h*3/2)           interleaved U,V pairs, (w/2) x (h/2)
//!
//! Gain map (8-bit, single channel)
//!   [0, w*h)                 row-major
//! ```
//!
//! Chroma for pixel (x, y) lives at `x/2 + (y/2) * (w/2)` in chroma units.

use crate::error::{Error, Result};

/// Pixel layout of a source image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Planar 8-bit YUV 4:2:0, full range.
    Yuv420,
    /// Semi-planar 16-bit YUV 4:2:0, narrow range, 10 bits left-aligned.
    P010,
}

impl PixelFormat {
    /// Short layout name.
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Yuv420 => "YUV420",
            PixelFormat::P010 => "P010",
        }
    }
}

/// Checks dimensions and returns the luma sample count.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(n) if n > 0 => Ok(n),
        _ => {
            tracing::debug!(width, height, "rejecting buffer with invalid dimensions");
            Err(Error::InvalidDimensions { width, height })
        }
    }
}

/// Largest chroma index any in-bounds pixel maps to.
#[inline]
fn max_chroma_index(width: usize, height: usize) -> usize {
    (width - 1) / 2 + ((height - 1) / 2) * (width / 2)
}

fn check_len(format: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        tracing::debug!(format, expected, actual, "rejecting undersized buffer");
        return Err(Error::BufferTooSmall {
            format,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Borrowed planar 8-bit YUV 4:2:0 image.
///
/// # Example
///
/// ```rust
/// use gainmap_core::Yuv420Image;
///
/// let data = vec![128u8; 4 * 2 * 3 / 2];
/// let img = Yuv420Image::new(4, 2, &data).unwrap();
/// assert_eq!(img.luma(3, 1), 128);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Yuv420Image<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Yuv420Image<'a> {
    /// Wraps `data` as a `width` x `height` YUV420 image.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let expected = count * 5 / 4 + max_chroma_index(width, height) + 1;
        check_len(PixelFormat::Yuv420.name(), expected, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw luma sample at (x, y).
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        self.data[x + y * self.width]
    }

    /// Raw (U, V) samples covering (x, y).
    #[inline]
    pub fn chroma(&self, x: usize, y: usize) -> (u8, u8) {
        let count = self.width * self.height;
        let idx = x / 2 + (y / 2) * (self.width / 2);
        (self.data[count + idx], self.data[count * 5 / 4 + idx])
    }
}

/// Borrowed P010 image.
///
/// Samples are 16-bit words holding a 10-bit value in bits 6..16.
#[derive(Copy, Clone, Debug)]
pub struct P010Image<'a> {
    width: usize,
    height: usize,
    data: &'a [u16],
}

impl<'a> P010Image<'a> {
    /// Wraps `data` as a `width` x `height` P010 image.
    pub fn new(width: usize, height: usize, data: &'a [u16]) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let expected = count + max_chroma_index(width, height) * 2 + 2;
        check_len(PixelFormat::P010.name(), expected, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// 10-bit luma sample at (x, y).
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> u16 {
        self.data[x + y * self.width] >> 6
    }

    /// 10-bit (U, V) samples covering (x, y).
    #[inline]
    pub fn chroma(&self, x: usize, y: usize) -> (u16, u16) {
        let count = self.width * self.height;
        let idx = x / 2 + (y / 2) * (self.width / 2);
        (
            self.data[count + idx * 2] >> 6,
            self.data[count + idx * 2 + 1] >> 6,
        )
    }
}

/// Borrowed single-channel gain map.
#[derive(Copy, Clone, Debug)]
pub struct GainMapImage<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> GainMapImage<'a> {
    /// Wraps `data` as a `width` x `height` gain map.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let count = pixel_count(width, height)?;
        check_len("gain map", count, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Map width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Stored byte at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[x + y * self.width]
    }
}
