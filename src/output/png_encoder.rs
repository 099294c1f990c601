//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Pixels are written as 8-bit RGB,
//! dropping alpha the same way the PPM writer does.

use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// PNG encoder for pixel buffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a pixel buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        Self::encode(buf, &mut writer)?;
        writer.flush()?;

        debug!(
            path = %path.display(),
            width = buf.width(),
            height = buf.height(),
            "wrote png"
        );
        Ok(())
    }

    /// Encode a pixel buffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(buf: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Self::encode(buf, &mut bytes)?;
        Ok(bytes)
    }

    fn encode<W: Write>(buf: &PixelBuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, buf.width(), buf.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let rgb: Vec<u8> = buf.pixels().iter().flat_map(|c| c.to_rgb()).collect();

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgb)?;
        writer.finish()?;

        Ok(())
    }
}
