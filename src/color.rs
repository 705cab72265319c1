//! This module defines the [`Color`] trait that every color representation in hueshift implements,
//! alongside [`RGBColor`], the 8-bit sRGB triple that they all convert through. Palettes are built by
//! doing math in one space (usually HSL) and reading the result back out as RGB, so the rules for
//! getting *into* RGB matter: every channel is rounded to the nearest integer, with halves rounding
//! up, and clamped between 0 and 255, independently of the others.

use std::fmt;
use std::str::FromStr;

use crate::bound::Bound;
use crate::coord::Coord;
pub use crate::hex::RGBParseError;
use crate::hex::parse_hex;

/// Rounds to the nearest integer, sending halves towards positive infinity (so -2.5 becomes -2, not
/// -3). This is how every rounding step in a palette behaves.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// A trait that includes any color representation that can be converted to and from an sRGB triple.
/// Because every implementor round-trips through [`RGBColor`], converting between two arbitrary
/// spaces is always possible with [`Color::convert`].
pub trait Color: Sized {
    /// Builds this color from an RGB triple.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Gives back the closest RGB triple to this color.
    fn to_rgb(&self) -> RGBColor;

    /// Converts this color into any other `Color` by going through RGB.
    ///
    /// # Example
    /// ```
    /// # use hueshift::prelude::*;
    /// # use hueshift::colors::HSLColor;
    /// let orange = RGBColor::from_hex("#ff8000");
    /// let hsl: HSLColor = orange.convert();
    /// assert_eq!(hsl.h, 30.);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }

    /// The lowercase `#rrggbb` form of this color.
    fn to_hex(&self) -> String {
        self.to_rgb().to_string()
    }
}

/// A color in the sRGB space with 8 bits per channel. This is what hex colors describe directly.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Builds a color from floating-point channels on the 0-255 scale, rounding and clamping each one:
    /// out-of-range values saturate rather than wrap, and NaN becomes 0.
    ///
    /// # Example
    /// ```
    /// # use hueshift::prelude::*;
    /// assert_eq!(RGBColor::from_channels(-10., 300., 128.).to_string(), "#00ff80");
    /// ```
    pub fn from_channels(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor::from(Coord { x: r, y: g, z: b })
    }

    /// Unpacks a 24-bit `0xRRGGBB` value. Anything above bit 23 is ignored.
    pub fn from_packed(packed: u32) -> RGBColor {
        RGBColor {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Packs the channels into a 24-bit `0xRRGGBB` value.
    pub fn packed(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Reads hex color text, normalizing it first. Malformed text gives black instead of an error:
    /// use [`RGBColor::from_hex_code`] to find out what went wrong.
    pub fn from_hex(text: &str) -> RGBColor {
        parse_hex(text).unwrap_or_default()
    }

    /// Strictly parses hex color text, in either the `#rrggbb` or `#rgb` form.
    ///
    /// # Errors
    /// Returns the [`RGBParseError`] describing why the text isn't a hex color.
    pub fn from_hex_code(text: &str) -> Result<RGBColor, RGBParseError> {
        parse_hex(text)
    }
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

// `{:06x}` keeps the leading zeros that a plain `{:x}` would drop
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06x}", self.packed())
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        parse_hex(s)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        let clamped = RGBColor::clamp_coord(c);
        // clamping first keeps the casts in range; NaN survives clamping but casts to 0
        RGBColor {
            r: round_half_up(clamped.x) as u8,
            g: round_half_up(clamped.y) as u8,
            b: round_half_up(clamped.z) as u8,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(rgb: RGBColor) -> Coord {
        Coord {
            x: f64::from(rgb.r),
            y: f64::from(rgb.g),
            z: f64::from(rgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_rgb_round_trip() {
        // every value of each channel, with the other two held at something awkward
        for v in 0..=255u8 {
            for &(r, g, b) in [(v, 0, 255), (7, v, 128), (255, 1, v)].iter() {
                let hex = RGBColor::from((r, g, b)).to_string();
                assert_eq!(RGBColor::from_hex(&hex), RGBColor { r, g, b });
            }
        }
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(RGBColor::from((0, 0, 5)).to_string(), "#000005");
        assert_eq!(RGBColor::from((0, 0, 0)).to_string(), "#000000");
    }

    #[test]
    fn test_channel_clamping() {
        assert_eq!(RGBColor::from_channels(-10., 300., 128.).to_string(), "#00ff80");
        assert_eq!(RGBColor::from_channels(f64::NAN, 254.5, 0.49).to_string(), "#00ff00");
        assert_eq!(RGBColor::from_channels(12.5, -0.5, 255.4), RGBColor::from((13, 0, 255)));
    }

    #[test]
    fn test_from_hex_soft_failure() {
        assert_eq!(RGBColor::from_hex("banana"), RGBColor::default());
        assert_eq!(RGBColor::from_hex("#FFF"), RGBColor::from((255, 255, 255)));
    }

    #[test]
    fn test_from_str() {
        let rgb: RGBColor = "#11457c".parse().unwrap();
        assert_eq!(rgb, RGBColor::from((0x11, 0x45, 0x7c)));
        assert_eq!(
            "#11457".parse::<RGBColor>(),
            Err(RGBParseError::InvalidLength)
        );
    }

    #[test]
    fn test_from_hex_code() {
        assert_eq!(
            RGBColor::from_hex_code(" #0Fa "),
            Ok(RGBColor::from((0, 255, 170)))
        );
        assert_eq!(RGBColor::from_hex_code(""), Err(RGBParseError::Empty));
        assert_eq!(
            RGBColor::from_hex_code("#00ffzz"),
            Err(RGBParseError::InvalidDigits)
        );
    }

    #[test]
    fn test_packing() {
        let rgb = RGBColor::from((0x12, 0x34, 0x56));
        assert_eq!(rgb.packed(), 0x123456);
        assert_eq!(RGBColor::from_packed(0xff123456), rgb);
    }
}
