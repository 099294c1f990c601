//! Core pixel buffer.
//!
//! A [`PixelBuffer`] is a flat, row-major grid of [`Color`] values addressed by
//! `y * width + x`. Its length is fixed at construction; only the contents change.

use crate::color::Color;
use crate::error::{Error, Result};

/// Row-major grid of packed colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// `width * height` colors, row-major.
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer with every pixel set to [`Color::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use opencad::framebuffer::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(800, 600).unwrap();
    /// assert_eq!(buf.width(), 800);
    /// assert_eq!(buf.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pixels = vec![Color::default(); (width as usize) * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// All pixels, row-major, mutable. The slice cannot change the buffer length.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Get a row of pixels.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [Color]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        Some(&mut self.pixels[start..end])
    }

    /// Whether `(x, y)` addresses a cell of this buffer.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.pixel_index(x, y)])
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds, including negative ones.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let idx = self.pixel_index(x as u32, y as u32);
        self.pixels[idx] = color;
    }

    /// Fill rows `y_start..=y_end` of column `x`. Caller guarantees the range is in bounds.
    #[inline]
    pub(crate) fn fill_column_span(&mut self, x: u32, y_start: u32, y_end: u32, color: Color) {
        let stride = self.width as usize;
        let start = self.pixel_index(x, y_start);
        let end = self.pixel_index(x, y_end);
        for idx in (start..=end).step_by(stride) {
            self.pixels[idx] = color;
        }
    }

    /// Fill columns `x_start..=x_end` of row `y`. Caller guarantees the range is in bounds.
    #[inline]
    pub(crate) fn fill_row_span(&mut self, y: u32, x_start: u32, x_end: u32, color: Color) {
        let start = self.pixel_index(x_start, y);
        let end = self.pixel_index(x_end, y);
        self.pixels[start..=end].fill(color);
    }

    /// Calculate the index for a pixel coordinate.
    #[inline]
    const fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buf = PixelBuffer::new(100, 50).unwrap();
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 50);
        assert_eq!(buf.pixel_count(), 5000);
        assert_eq!(buf.pixels().len(), 5000);
        assert!(buf.pixels().iter().all(|&c| c == Color::default()));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(PixelBuffer::new(0, 100).is_err());
        assert!(PixelBuffer::new(100, 0).is_err());
        assert!(PixelBuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_from_pixels() {
        let buf = PixelBuffer::from_pixels(2, 2, vec![Color::RED; 4]).unwrap();
        assert_eq!(buf.get_pixel(1, 1), Some(Color::RED));

        let err = PixelBuffer::from_pixels(2, 2, vec![Color::RED; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(PixelBuffer::from_pixels(0, 2, Vec::new()).is_err());
    }

    #[test]
    fn test_fill() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.fill(Color::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(buf.get_pixel(x, y), Some(Color::RED));
            }
        }
    }

    #[test]
    fn test_row_major_layout() {
        let mut buf = PixelBuffer::new(4, 3).unwrap();
        buf.set_pixel(3, 1, Color::BLUE);
        assert_eq!(buf.pixels()[4 + 3], Color::BLUE);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();

        buf.set_pixel(5, 5, Color::BLUE);
        assert_eq!(buf.get_pixel(5, 5), Some(Color::BLUE));

        // Out of bounds
        assert_eq!(buf.get_pixel(100, 100), None);
        buf.set_pixel(-1, 5, Color::RED);
        buf.set_pixel(10, 5, Color::RED);
        assert!(buf.pixels().iter().all(|&c| c != Color::RED));
    }

    #[test]
    fn test_contains() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert!(buf.contains(0, 0));
        assert!(buf.contains(2, 1));
        assert!(!buf.contains(3, 1));
        assert!(!buf.contains(2, 2));
        assert!(!buf.contains(-1, 0));
    }

    #[test]
    fn test_row_access() {
        let mut buf = PixelBuffer::new(10, 5).unwrap();
        buf.fill(Color::BLACK);

        if let Some(row) = buf.row_mut(2) {
            row.fill(Color::RED);
        }

        assert_eq!(buf.get_pixel(5, 2), Some(Color::RED));
        assert_eq!(buf.get_pixel(5, 1), Some(Color::BLACK));
        assert_eq!(buf.row(2).unwrap().len(), 10);
        assert!(buf.row(5).is_none());
    }

    #[test]
    fn test_spans() {
        let mut buf = PixelBuffer::new(5, 5).unwrap();
        buf.fill_column_span(2, 1, 3, Color::GREEN);
        buf.fill_row_span(4, 0, 4, Color::BLUE);

        assert_eq!(buf.get_pixel(2, 0), Some(Color::default()));
        assert_eq!(buf.get_pixel(2, 1), Some(Color::GREEN));
        assert_eq!(buf.get_pixel(2, 3), Some(Color::GREEN));
        assert_eq!(buf.get_pixel(0, 4), Some(Color::BLUE));
        assert_eq!(buf.get_pixel(4, 4), Some(Color::BLUE));
    }
}
