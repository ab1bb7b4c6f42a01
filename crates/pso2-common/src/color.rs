//! Packed color values.
//!
//! Color variant files store colors as a single `u32` with alpha in the
//! most significant byte, followed by red, green and blue.

/// RGBA color with floating-point components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from bytes (0-255 range).
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Decode a packed `0xAARRGGBB` value.
    pub fn from_packed(value: u32) -> Self {
        let [b, g, r, a] = value.to_le_bytes();
        Self::from_bytes(r, g, b, a)
    }

    /// Encode back to a packed `0xAARRGGBB` value.
    pub fn to_packed(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_le_bytes([b, g, r, a])
    }

    /// Convert to byte representation in RGBA order.
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Components in RGBA order.
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.to_bytes();
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}
