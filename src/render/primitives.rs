//! Primitive rendering functions.
//!
//! Every primitive is total: any coordinates, extent or radius are accepted and
//! cells outside the buffer are skipped. Arithmetic runs in `i64`, so no `i32`
//! input can overflow an intermediate.

use std::ops::RangeInclusive;

use crate::color::Color;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Circle, Line, Point, Rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a pixel buffer.
    fn draw(&self, buf: &mut PixelBuffer, color: Color);
}

/// Intersect `lo..=hi` with `0..len`, returning `None` when nothing is left.
#[inline]
fn clip(lo: i64, hi: i64, len: u32) -> Option<RangeInclusive<u32>> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(len) - 1);
    (lo <= hi).then(|| (lo as u32)..=(hi as u32))
}

// ============================================================================
// Fill
// ============================================================================

/// Set every cell of the buffer to `color`.
pub fn fill(buf: &mut PixelBuffer, color: Color) {
    buf.fill(color);
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Fill the cells `(x0 + dx, y0 + dy)` for `0 <= dx < width`, `0 <= dy < height`.
///
/// Cells outside the buffer are skipped; a rectangle entirely outside is a no-op.
pub fn fill_rect(buf: &mut PixelBuffer, x0: i32, y0: i32, width: u32, height: u32, color: Color) {
    if Rect::new(x0, y0, width, height).is_empty() {
        return;
    }

    let (x0, y0) = (i64::from(x0), i64::from(y0));
    let Some(cols) = clip(x0, x0 + i64::from(width) - 1, buf.width()) else {
        return;
    };
    let Some(rows) = clip(y0, y0 + i64::from(height) - 1, buf.height()) else {
        return;
    };

    for y in rows {
        buf.fill_row_span(y, *cols.start(), *cols.end(), color);
    }
}

impl Drawable for Rect {
    fn draw(&self, buf: &mut PixelBuffer, color: Color) {
        fill_rect(buf, self.x, self.y, self.width, self.height, color);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Fill the solid disk `dx² + dy² <= r²` around `(cx, cy)`.
///
/// A zero radius fills the center cell only; a negative radius is a no-op.
pub fn fill_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }

    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let r2 = r * r;
    let Some(cols) = clip(cx - r, cx + r, buf.width()) else {
        return;
    };
    let Some(rows) = clip(cy - r, cy + r, buf.height()) else {
        return;
    };

    for y in rows {
        let dy = i64::from(y) - cy;
        for x in cols.clone() {
            let dx = i64::from(x) - cx;
            if dx * dx + dy * dy <= r2 {
                buf.set_pixel(i64::from(x), i64::from(y), color);
            }
        }
    }
}

impl Drawable for Circle {
    fn draw(&self, buf: &mut PixelBuffer, color: Color) {
        fill_circle(buf, self.center.x, self.center.y, self.radius, color);
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line by filling one vertical span per column.
///
/// With `dx = x2 - x1` and `dy = y2 - y1`, the line is `y = dy*x/dx + c` where
/// `c = y1 - dy*x1/dx`, every division truncating toward zero. Column `x` gets rows
/// `dy*x/dx + c ..= dy*(x+1)/dx + c` (ordered), which keeps steep lines gap-free.
/// A vertical line (`x1 == x2`) fills column `x1` from `min(y1, y2)` to `max(y1, y2)`.
///
/// # Arguments
///
/// * `buf` - Target pixel buffer
/// * `x1`, `y1` - Start coordinates
/// * `x2`, `y2` - End coordinates
/// * `color` - Line color
pub fn draw_line(buf: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0 {
        let Some(col) = clip(x1, x1, buf.width()) else {
            return;
        };
        if let Some(rows) = clip(y1.min(y2), y1.max(y2), buf.height()) {
            buf.fill_column_span(*col.start(), *rows.start(), *rows.end(), color);
        }
        return;
    }

    let c = y1 - dy * x1 / dx;
    let Some(cols) = clip(x1.min(x2), x1.max(x2), buf.width()) else {
        return;
    };

    for x in cols {
        let xi = i64::from(x);
        let sy1 = dy * xi / dx + c;
        let sy2 = dy * (xi + 1) / dx + c;
        if let Some(rows) = clip(sy1.min(sy2), sy1.max(sy2), buf.height()) {
            buf.fill_column_span(x, *rows.start(), *rows.end(), color);
        }
    }
}

impl Drawable for Line {
    fn draw(&self, buf: &mut PixelBuffer, color: Color) {
        draw_line(buf, self.start.x, self.start.y, self.end.x, self.end.y, color);
    }
}

impl Drawable for Point {
    fn draw(&self, buf: &mut PixelBuffer, color: Color) {
        buf.set_pixel(i64::from(self.x), i64::from(self.y), color);
    }
}

// ============================================================================
// Tests
// ============================================================================
