//! # OpenCAD
//!
//! Minimal rasterization library: draw into an in-memory grid of packed colors and
//! save it as a binary PPM image.
//!
//! ## Quick Start
//!
//! ```rust
//! use opencad::prelude::*;
//!
//! let mut buf = PixelBuffer::new(4, 4)?;
//! fill(&mut buf, Color::from_u32(0xFF20_2020));
//! fill_rect(&mut buf, 1, 1, 2, 2, Color::from_u32(0xFF20_20FF));
//! fill_circle(&mut buf, 0, 0, 1, Color::WHITE);
//! draw_line(&mut buf, 0, 3, 3, 0, Color::BLUE);
//!
//! let bytes = PpmEncoder::to_bytes(&buf)?;
//! assert!(bytes.starts_with(b"P6\n4 4 255\n"));
//! # Ok::<(), opencad::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Every drawing primitive is total: out-of-range cells are clipped, never an error.
//! - Only file output is fallible; failures carry the underlying OS error.
//! - There is no blending; alpha is stored with each color but not written.
//!
//! ## Feature Flags
//!
//! - `cli` (default): builds the `opencad-demo` binary

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Packed RGBA color.
pub mod color;

/// Row-major pixel buffer.
pub mod framebuffer;

/// Shape parameters (points, lines, rectangles, circles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PPM, PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for opencad operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use opencad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Circle, Line, Point, Rect};
    pub use crate::output::{save_to_file, PngEncoder, PpmDecoder, PpmEncoder};
    pub use crate::render::{draw_line, fill, fill_circle, fill_rect, Drawable};
}
