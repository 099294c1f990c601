//! Error types for opencad operations.
//!
//! Drawing never fails; only buffer construction and file I/O produce errors.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in opencad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (open, write or flush of an output file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a pixel buffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel data does not match the declared dimensions.
    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied pixel data.
        actual: usize,
    },

    /// Malformed PPM stream.
    #[error("Invalid PPM data: {0}")]
    InvalidPpm(String),
}

impl Error {
    /// The OS error code behind an I/O failure, if there is one.
    ///
    /// PNG encoding failures that wrap an I/O error report its code too.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io(err) => err.raw_os_error(),
            Self::PngEncoding(png::EncodingError::IoError(err)) => err.raw_os_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = Error::BufferSizeMismatch {
            expected: 16,
            actual: 15,
        };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn test_raw_os_error() {
        let err = Error::from(io::Error::from_raw_os_error(2));
        assert_eq!(err.raw_os_error(), Some(2));

        let err = Error::InvalidPpm("bad magic".into());
        assert_eq!(err.raw_os_error(), None);
    }
}
