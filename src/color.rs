use crate::error::{Error, Result};
use crate::util::normalize_rgba_color;

/// Represents a color in RGBA format.
///
/// Each channel is an 8-bit unsigned integer. Hosts usually hand colors over as packed
/// `0xAARRGGBB` integers, see [`Color::from_argb`].
///
/// # Examples
///
/// ```
/// use cutcorner::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.normalize(), [1.0, 0.0, 0.0, 1.0]);
///
/// let from_host = Color::from_argb(0x80_00_00_FF);
/// assert_eq!(from_host, Color::rgba(0, 0, 255, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// A fully transparent color.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque white. This is the default stroke color.
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Creates a new color with the specified RGB values and full opacity.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Creates a new color with the specified RGBA values.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Unpacks a `0xAARRGGBB` color integer.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self([r, g, b, a])
    }

    /// Packs the color into a `0xAARRGGBB` integer.
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    ///
    /// ```
    /// use cutcorner::Color;
    ///
    /// assert_eq!(Color::from_hex("#00000000").unwrap(), Color::TRANSPARENT);
    /// assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
    /// assert!(Color::from_hex("ff8000").is_err());
    /// ```
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(value.to_string());
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | packed)),
            8 => Ok(Self::from_argb(packed)),
            _ => Err(invalid()),
        }
    }

    /// Normalizes the color values to the range [0.0, 1.0].
    pub fn normalize(&self) -> [f32; 4] {
        normalize_rgba_color(&self.0)
    }

    /// Returns the color as an array of 4 `u8` values.
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }

    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_round_trips_through_packed_integer() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_argb(), 0x7812_3456);
        assert_eq!(Color::from_argb(0x7812_3456), color);
    }

    #[test]
    fn from_hex_defaults_missing_alpha_to_opaque() {
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#+1234567").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn transparent_only_looks_at_alpha() {
        assert!(Color::rgba(255, 255, 255, 0).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
