//! Image samplers.
//!
//! Decode one pixel of a YUV420 or P010 buffer to a normalized YUV triple, and
//! box-average a `map_scale_factor` x `map_scale_factor` block of them down to
//! a single gain map sample.
//!
//! # Normalization
//!
//! | Format | Y | U, V |
//! |--------|---|------|
//! | YUV420 | `Y / 255` | `(C - 128) / 255` |
//! | P010   | `Y / 940` | `(C - 64) / 940 - 0.5` |
//!
//! P010 samples are shifted right by 6 before normalizing. The P010 chroma
//! offset is the legacy formula and does not center exactly on zero.

use gainmap_core::{Color, P010Image, PixelFormat, Yuv420Image};

/// Normalized YUV of one YUV420 pixel.
#[inline]
pub fn yuv420_pixel(image: &Yuv420Image<'_>, x: usize, y: usize) -> Color {
    let luma = image.luma(x, y) as f32;
    let (u, v) = image.chroma(x, y);
    Color::yuv(
        luma / 255.0,
        (u as f32 - 128.0) / 255.0,
        (v as f32 - 128.0) / 255.0,
    )
}

/// Normalized YUV of one P010 pixel.
#[inline]
pub fn p010_pixel(image: &P010Image<'_>, x: usize, y: usize) -> Color {
    let luma = image.luma(x, y) as f32;
    let (u, v) = image.chroma(x, y);
    Color::yuv(
        luma / 940.0,
        (u as f32 - 64.0) / 940.0 - 0.5,
        (v as f32 - 64.0) / 940.0 - 0.5,
    )
}

/// Mean of the `scale` x `scale` block whose top-left is `(x * scale, y * scale)`.
#[inline]
fn box_average(scale: usize, x: usize, y: usize, pixel: impl Fn(usize, usize) -> Color) -> Color {
    let mut sum = Color::ZERO;
    for dy in 0..scale {
        for dx in 0..scale {
            sum += pixel(x * scale + dx, y * scale + dy);
        }
    }
    sum / (scale * scale) as f32
}

/// Box-averaged YUV420 sample for map coordinate `(x, y)`.
///
/// The whole block must lie inside the image.
pub fn sample_yuv420(image: &Yuv420Image<'_>, map_scale_factor: usize, x: usize, y: usize) -> Color {
    box_average(map_scale_factor, x, y, |px, py| yuv420_pixel(image, px, py))
}

/// Box-averaged P010 sample for map coordinate `(x, y)`.
///
/// The whole block must lie inside the image.
pub fn sample_p010(image: &P010Image<'_>, map_scale_factor: usize, x: usize, y: usize) -> Color {
    box_average(map_scale_factor, x, y, |px, py| p010_pixel(image, px, py))
}

/// Either supported source buffer.
///
/// Matching happens once per map sample; the inner loop runs on the concrete
/// format.
#[derive(Copy, Clone, Debug)]
pub enum ImageSource<'a> {
    /// 8-bit YUV420 (typically the SDR rendition).
    Yuv420(Yuv420Image<'a>),
    /// 10-bit P010 (typically the HDR rendition).
    P010(P010Image<'a>),
}

impl<'a> ImageSource<'a> {
    /// Pixel format of the wrapped buffer.
    pub fn format(&self) -> PixelFormat {
        match self {
            ImageSource::Yuv420(_) => PixelFormat::Yuv420,
            ImageSource::P010(_) => PixelFormat::P010,
        }
    }

    /// Image width.
    pub fn width(&self) -> usize {
        match self {
            ImageSource::Yuv420(img) => img.width(),
            ImageSource::P010(img) => img.width(),
        }
    }

    /// Image height.
    pub fn height(&self) -> usize {
        match self {
            ImageSource::Yuv420(img) => img.height(),
            ImageSource::P010(img) => img.height(),
        }
    }

    /// Normalized YUV at image coordinate `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        match self {
            ImageSource::Yuv420(img) => yuv420_pixel(img, x, y),
            ImageSource::P010(img) => p010_pixel(img, x, y),
        }
    }

    /// Box-averaged YUV for map coordinate `(x, y)`.
    #[inline]
    pub fn sample(&self, map_scale_factor: usize, x: usize, y: usize) -> Color {
        match self {
            ImageSource::Yuv420(img) => sample_yuv420(img, map_scale_factor, x, y),
            ImageSource::P010(img) => sample_p010(img, map_scale_factor, x, y),
        }
    }
}

impl<'a> From<Yuv420Image<'a>> for ImageSource<'a> {
    fn from(img: Yuv420Image<'a>) -> Self {
        ImageSource::Yuv420(img)
    }
}

impl<'a> From<P010Image<'a>> for ImageSource<'a> {
    fn from(img: P010Image<'a>) -> Self {
        ImageSource::P010(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// 4x4 YUV420 with luma = 16 * y + 4 * x, U = 128, V = 128 + chroma index.
    fn yuv420_buffer() -> Vec<u8> {
        let mut data: Vec<u8> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (16 * y + 4 * x) as u8))
            .collect();
        data.extend_from_slice(&[128; 4]);
        data.extend_from_slice(&[128, 129, 130, 131]);
        data
    }

    fn p010_buffer(y: u16, u: u16, v: u16) -> Vec<u16> {
        // 2x2: four luma samples then one interleaved UV pair
        vec![y << 6, y << 6, y << 6, y << 6, u << 6, v << 6]
    }

    #[test]
    fn test_yuv420_pixel_normalization() {
        let data = yuv420_buffer();
        let img = Yuv420Image::new(4, 4, &data).unwrap();

        let c = yuv420_pixel(&img, 1, 2);
        assert_abs_diff_eq!(c.y(), 36.0 / 255.0, epsilon = 1e-7);
        assert_eq!(c.u(), 0.0);
        assert_abs_diff_eq!(c.v(), 2.0 / 255.0, epsilon = 1e-7);
    }

    #[test]
    fn test_p010_pixel_normalization() {
        let data = p010_buffer(940, 64, 534);
        let img = P010Image::new(2, 2, &data).unwrap();

        let c = p010_pixel(&img, 1, 1);
        assert_eq!(c.y(), 1.0);
        assert_eq!(c.u(), -0.5);
        assert_abs_diff_eq!(c.v(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_average_yuv420() {
        let data = yuv420_buffer();
        let img = Yuv420Image::new(4, 4, &data).unwrap();

        // Block (2..4, 2..4): luma 40, 44, 56, 60
        let c = sample_yuv420(&img, 2, 1, 1);
        assert_abs_diff_eq!(c.y(), 50.0 / 255.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.v(), 3.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_scale_one_is_pixel() {
        let data = yuv420_buffer();
        let img = Yuv420Image::new(4, 4, &data).unwrap();
        for (x, y) in [(0, 0), (3, 1), (2, 3)] {
            assert_eq!(sample_yuv420(&img, 1, x, y), yuv420_pixel(&img, x, y));
        }
    }

    #[test]
    fn test_box_average_uniform_p010() {
        let data = p010_buffer(470, 300, 300);
        let img = P010Image::new(2, 2, &data).unwrap();
        let c = sample_p010(&img, 2, 0, 0);
        let p = p010_pixel(&img, 0, 0);
        assert_abs_diff_eq!(c.y(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(c.u(), p.u(), epsilon = 1e-6);
        assert_abs_diff_eq!(c.v(), p.v(), epsilon = 1e-6);
    }

    #[test]
    fn test_source_dispatch() {
        let yuv = yuv420_buffer();
        let p010 = p010_buffer(100, 200, 300);
        let a = ImageSource::from(Yuv420Image::new(4, 4, &yuv).unwrap());
        let b = ImageSource::from(P010Image::new(2, 2, &p010).unwrap());

        assert_eq!(a.format(), PixelFormat::Yuv420);
        assert_eq!(b.format(), PixelFormat::P010);
        assert_eq!((a.width(), a.height()), (4, 4));
        assert_eq!((b.width(), b.height()), (2, 2));

        if let ImageSource::Yuv420(img) = &a {
            assert_eq!(a.sample(2, 0, 1), sample_yuv420(img, 2, 0, 1));
            assert_eq!(a.pixel(3, 3), yuv420_pixel(img, 3, 3));
        }
        if let ImageSource::P010(img) = &b {
            assert_eq!(b.sample(2, 0, 0), sample_p010(img, 2, 0, 0));
        }
    }
}
