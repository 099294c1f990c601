//! Rasterization of solid primitives.
//!
//! # Algorithms
//!
//! - **Rectangle / disk fill**: per-cell membership over the shape's bounding box,
//!   intersected with the buffer.
//! - **Span-filled line**: slope-intercept form with truncating integer division,
//!   one vertical span per column so steep segments stay connected.

mod primitives;

pub use primitives::{draw_line, fill, fill_circle, fill_rect, Drawable};
