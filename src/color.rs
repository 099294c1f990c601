//! Packed RGBA color.
//!
//! A [`Color`] is a single `u32` with red in byte 0, green in byte 1, blue in byte 2
//! and alpha in byte 3. Written as a hex literal that reads `0xAABBGGRR`, so
//! `0xFF2020FF` is opaque red-ish `(0xFF, 0x20, 0x20)`.
//!
//! Alpha is stored but no primitive blends with it, and the PPM writer drops it.

/// Packed 4-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Create an opaque color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Wrap a packed value.
    ///
    /// ```
    /// use opencad::color::Color;
    ///
    /// let c = Color::from_u32(0xFF20_20FF);
    /// assert_eq!(c.to_rgb(), [0xFF, 0x20, 0x20]);
    /// assert_eq!(c.a(), 0xFF);
    /// ```
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Red channel (byte 0).
    #[must_use]
    pub const fn r(self) -> u8 {
        self.to_array()[0]
    }

    /// Green channel (byte 1).
    #[must_use]
    pub const fn g(self) -> u8 {
        self.to_array()[1]
    }

    /// Blue channel (byte 2).
    #[must_use]
    pub const fn b(self) -> u8 {
        self.to_array()[2]
    }

    /// Alpha channel (byte 3).
    #[must_use]
    pub const fn a(self) -> u8 {
        self.to_array()[3]
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.to_array();
        Self::new(r, g, b, a)
    }

    /// Channels as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Create from `[r, g, b, a]`.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(arr))
    }

    /// Channels as `[r, g, b]`, alpha dropped.
    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_array();
        [r, g, b]
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        let c = Color::from_u32(0x4433_2211);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.a(), 0x44);
        assert_eq!(c.to_array(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_new_matches_packed() {
        assert_eq!(Color::new(0x20, 0x20, 0xFF, 0xFF).to_u32(), 0xFFFF_2020);
        assert_eq!(Color::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::RED.to_rgb(), [255, 0, 0]);
        assert_eq!(Color::BLUE.to_u32(), 0xFFFF_0000);
        assert_eq!(Color::TRANSPARENT.to_u32(), 0);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0);
        assert_eq!(c.to_array(), [255, 255, 255, 0]);
    }

    #[test]
    fn test_u32_conversions() {
        let c: Color = 0xFF20_2020.into();
        let back: u32 = c.into();
        assert_eq!(back, 0xFF20_2020);
        assert_eq!(Color::from_array(c.to_array()), c);
    }
}
