//! Image loading and foreground pixel extraction.
//!
//! A graphed function is expected to be drawn in any non-white color on a
//! white background. [`PixelMap`] decodes such an image into an 8-bit
//! grayscale intensity buffer, and [`PixelMap::foreground`] returns the
//! (row, column) indices of every pixel that differs from the background.
//!
//! Color images are converted to luma during decoding, so "differs from
//! white" means the converted intensity is not 255.

use std::path::Path;

use crate::error::{Error, Result};

/// Intensity of a pure-white background pixel.
pub const BACKGROUND: u8 = 255;

/// A decoded grayscale image, stored row-major.
#[derive(Debug, Clone)]
pub struct PixelMap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelMap {
    /// Decode the image at `path` into a grayscale pixel map.
    ///
    /// Any raster format supported by the `image` crate is accepted;
    /// color input is converted to luma.
    ///
    /// # Errors
    /// Returns [`Error::Image`] if the file is unreadable or the format is
    /// unsupported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let luma = image::open(path)?.to_luma8();
        let (width, height) = luma.dimensions();
        log::debug!("decoded image: {width}x{height}");
        Ok(Self {
            width,
            height,
            data: luma.into_raw(),
        })
    }

    /// Wrap an existing row-major grayscale buffer.
    ///
    /// # Errors
    /// Returns [`Error::BadDimensions`] if the buffer length does not equal
    /// `width * height`.
    pub fn from_luma(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return Err(Error::BadDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at (row, col). Row 0 is the top of the image.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.data[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Returns the (rows, cols) index lists of every non-background pixel.
    ///
    /// Indices are emitted in row-major scan order. An all-white image
    /// yields two empty vectors; downstream stages treat that as a
    /// degenerate empty curve rather than an error.
    #[must_use]
    pub fn foreground(&self) -> (Vec<usize>, Vec<usize>) {
        let width = self.width as usize;
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        for (i, &value) in self.data.iter().enumerate() {
            if value != BACKGROUND {
                rows.push(i / width);
                cols.push(i % width);
            }
        }
        log::debug!("foreground pixels: {}", rows.len());
        (rows, cols)
    }
}
