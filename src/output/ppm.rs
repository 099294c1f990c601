//! Binary PPM (`P6`) output and input.
//!
//! Layout: the ASCII header `P6\n<width> <height> 255\n`, then `width * height`
//! `[R, G, B]` triples in row-major order. Alpha is not stored.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Maximum channel value written to and accepted from the header.
pub const MAX_VALUE: u16 = 255;

/// Serialize `buf` to `path` as binary PPM.
///
/// Any existing file is truncated. On failure the file may be left partially written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or a write or flush fails;
/// [`Error::raw_os_error`] gives the OS code.
pub fn save_to_file<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> Result<()> {
    PpmEncoder::write_to_file(buf, path)
}

/// PPM encoder for pixel buffer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a pixel buffer to a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation, a write, or the final flush fails.
    pub fn write_to_file<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        Self::write_to(buf, &mut writer)?;
        // Surface buffered write errors instead of losing them on drop
        writer.flush()?;

        debug!(
            path = %path.display(),
            width = buf.width(),
            height = buf.height(),
            "wrote ppm"
        );
        Ok(())
    }

    /// Write the PPM stream to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write>(buf: &PixelBuffer, writer: &mut W) -> Result<()> {
        write!(writer, "P6\n{} {} {MAX_VALUE}\n", buf.width(), buf.height())?;

        let width = buf.width() as usize;
        let mut bytes = Vec::with_capacity(width * 3);
        for row in buf.pixels().chunks_exact(width) {
            bytes.clear();
            for color in row {
                bytes.extend_from_slice(&color.to_rgb());
            }
            writer.write_all(&bytes)?;
        }

        Ok(())
    }

    /// Encode a pixel buffer to PPM bytes.
    ///
    /// # Errors
    ///
    /// Never fails in practice; writing to a `Vec` is infallible.
    pub fn to_bytes(buf: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(32 + buf.pixel_count() * 3);
        Self::write_to(buf, &mut bytes)?;
        Ok(bytes)
    }
}

/// PPM decoder, the inverse of [`PpmEncoder`].
pub struct PpmDecoder;

impl PpmDecoder {
    /// Read a binary PPM file into a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid 8-bit `P6` image.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse binary PPM bytes. Every decoded pixel is opaque.
    ///
    /// Header tokens may be separated by any ASCII whitespace and `#` comments.
    /// Bytes past the pixel data are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPpm`] for a bad magic, malformed header, a max value
    /// other than 255, or a pixel payload of the wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
        let mut header = HeaderReader { bytes, pos: 0 };

        let magic = header.token()?;
        if magic != b"P6" {
            return Err(Error::InvalidPpm(format!(
                "bad magic {:?}",
                String::from_utf8_lossy(magic)
            )));
        }
        let width = header.number("width")?;
        let height = header.number("height")?;
        let max_value = header.number("max value")?;
        if max_value != u32::from(MAX_VALUE) {
            return Err(Error::InvalidPpm(format!(
                "unsupported max value {max_value}"
            )));
        }
        // Exactly one whitespace byte separates the header from the raster
        header.expect_whitespace()?;

        let data = &bytes[header.pos..];
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| Error::InvalidPpm("dimensions too large".into()))?;
        if data.len() != expected {
            return Err(Error::InvalidPpm(format!(
                "expected {expected} pixel bytes, found {}",
                data.len()
            )));
        }

        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Color::rgb(rgb[0], rgb[1], rgb[2]))
            .collect();
        PixelBuffer::from_pixels(width, height, pixels)
    }
}

/// Cursor over the ASCII header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b == b'#' {
                while self.bytes.get(self.pos).is_some_and(|&b| b != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8]> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(Error::InvalidPpm("truncated header".into()));
        }
        Ok(&self.bytes[start..self.pos])
    }

    fn number(&mut self, what: &str) -> Result<u32> {
        let token = self.token()?;
        // Plain decimal digits only, no sign
        token
            .iter()
            .all(u8::is_ascii_digit)
            .then_some(token)
            .and_then(|digits| std::str::from_utf8(digits).ok())
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                Error::InvalidPpm(format!(
                    "bad {what} {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    fn expect_whitespace(&mut self) -> Result<()> {
        match self.bytes.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(Error::InvalidPpm("missing raster separator".into())),
        }
    }
}
