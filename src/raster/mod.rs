//! # Raster Sources
//!
//! A raster source describes a monochrome bitmap ready for the printer:
//!
//! - width and height in pixels
//! - packed bits, row-major, 8 horizontal pixels per byte, MSB = leftmost
//! - each row is `ceil(width / 8)` bytes, so the data is
//!   `height × ceil(width / 8)` bytes long
//!
//! [`Printer::raster`](crate::printer::Printer::raster) reads a source
//! through the [`Raster`] trait and copies the bits verbatim. It does not
//! check the length; [`RasterImage::validate`] is there for callers who
//! want to.
//!
//! ```
//! use recibo::raster::{Raster, RasterImage};
//!
//! // 10 pixels wide needs 2 bytes per row
//! let image = RasterImage::new(10, 2, vec![0xFF, 0xC0, 0x00, 0x00]);
//! assert_eq!(image.width_bytes(), 2);
//! assert!(image.validate().is_ok());
//! ```

pub mod dither;

use image::{DynamicImage, GrayImage, imageops::FilterType};

use crate::error::ReciboError;
pub use dither::Dither;

/// Read-only view of a packed monochrome bitmap.
pub trait Raster {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Packed bitmap bytes
    fn data(&self) -> &[u8];

    /// Bytes per row: `ceil(width / 8)`
    ///
    /// This, not the pixel width, is what the `GS v 0` header carries.
    fn width_bytes(&self) -> u16 {
        self.width().div_ceil(8)
    }
}

/// An owned, immutable bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap already-packed bits. The length is trusted.
    pub fn new(width: u16, height: u16, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert a grayscale image, one dot per pixel.
    pub fn from_gray(image: &GrayImage, dither: Dither) -> Result<Self, ReciboError> {
        let width = dimension(image.width())?;
        let height = dimension(image.height())?;

        let mut data = Vec::with_capacity(width.div_ceil(8) as usize * height as usize);
        let mut row = Vec::with_capacity(width as usize);
        for y in 0..image.height() {
            row.clear();
            for x in 0..image.width() {
                let luma = image.get_pixel(x, y).0[0];
                row.push(dither.is_black(x as usize, y as usize, luma));
            }
            data.extend(dither::pack_row(&row));
        }

        Ok(Self::new(width, height, data))
    }

    /// Convert any decoded image, scaling it down to `max_width` dots if it
    /// is wider. Transparent pixels print as white.
    pub fn from_image(
        image: &DynamicImage,
        max_width: u16,
        dither: Dither,
    ) -> Result<Self, ReciboError> {
        let rgba = image.to_luma_alpha8();
        let mut gray = GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [luma, alpha] = rgba.get_pixel(x, y).0;
            let ink = (255 - luma as u32) * alpha as u32 / 255;
            image::Luma([255 - ink as u8])
        });

        let max_width = max_width as u32;
        if max_width > 0 && gray.width() > max_width {
            let height = (gray.height() as u64 * max_width as u64 / gray.width() as u64).max(1);
            gray = image::imageops::resize(&gray, max_width, height as u32, FilterType::Triangle);
        }

        Self::from_gray(&gray, dither)
    }

    /// Check the `height × ceil(width / 8)` length contract.
    pub fn validate(&self) -> Result<(), ReciboError> {
        let expected = self.width_bytes() as usize * self.height as usize;
        if self.data.len() != expected {
            return Err(ReciboError::Image(format!(
                "raster data is {} bytes, expected {} ({} bytes x {} rows)",
                self.data.len(),
                expected,
                self.width_bytes(),
                self.height
            )));
        }
        Ok(())
    }
}

impl Raster for RasterImage {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

fn dimension(value: u32) -> Result<u16, ReciboError> {
    u16::try_from(value)
        .map_err(|_| ReciboError::Image(format!("dimension {} exceeds 65535 dots", value)))
}
