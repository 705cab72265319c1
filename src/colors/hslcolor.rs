//! This file implements HSL, the hue/saturation/lightness transformation of sRGB that web pages use.
//! HSL isn't perceptually uniform (a fully saturated yellow and a fully saturated blue at the same
//! "lightness" look nothing alike), but it's the space where palette rules are easiest to state:
//! rotating hue gives related colors, and sliding lightness gives tints and shades.
//!
//! Components are stored the way CSS writes them: hue in degrees, and saturation and lightness as
//! percentages from 0 to 100. Converting from RGB rounds hue to a whole degree and the other two to
//! one decimal place, so values read back from a hex color are always tidy. Gray has no defined hue:
//! it comes out as 0.

use crate::bound::Bound;
use crate::color::{round_half_up, Color, RGBColor};
use crate::coord::Coord;

/// Wraps any angle into the range [0, 360). Negative angles wrap forward, so -10 becomes 350. Tiny
/// negative angles that would land on 360 itself give 0.
///
/// # Example
/// ```
/// # use hueshift::colors::hslcolor::wrap_hue;
/// assert_eq!(wrap_hue(-10.), 350.);
/// assert_eq!(wrap_hue(725.), 5.);
/// ```
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h % 360.;
    let wrapped = if wrapped < 0. { wrapped + 360. } else { wrapped };
    if wrapped >= 360. {
        0.
    } else {
        wrapped
    }
}

/// Rounds to one decimal place, halves up.
fn round_tenth(x: f64) -> f64 {
    round_half_up(x * 10.) / 10.
}

/// The piecewise function that gives one RGB channel from the two HSL intermediates `p` and `q`,
/// where `t` is the hue (as a fraction of a turn) offset for that channel.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0. {
        t + 1.
    } else if t > 1. {
        t - 1.
    } else {
        t
    };
    if t < 1. / 6. {
        p + (q - p) * 6. * t
    } else if t < 1. / 2. {
        q
    } else if t < 2. / 3. {
        p + (q - p) * (2. / 3. - t) * 6.
    } else {
        p
    }
}

/// A color in the HSL space.
/// # Example
/// ```
/// # use hueshift::prelude::*;
/// # use hueshift::colors::HSLColor;
/// let lavender = HSLColor::new(245., 50., 60.);
/// assert_eq!(lavender.to_hex(), "#6e66cc");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, as an angle in degrees. Anything outside [0, 360) is wrapped when converting.
    pub h: f64,
    /// The saturation, as a percentage. Clamped to [0, 100] when converting.
    pub s: f64,
    /// The lightness, as a percentage. Clamped to [0, 100] when converting.
    pub l: f64,
}

impl HSLColor {
    /// Makes a new color from hue (degrees), saturation and lightness (percentages). No wrapping or
    /// clamping happens here: that's done when the color is converted.
    pub fn new(h: f64, s: f64, l: f64) -> HSLColor {
        HSLColor { h, s, l }
    }

    /// Reads hex color text as HSL. Malformed text is black.
    pub fn from_hex(text: &str) -> HSLColor {
        RGBColor::from_hex(text).convert()
    }
}

/// Converts HSL components directly into a hex color.
///
/// # Example
/// ```
/// # use hueshift::colors::hslcolor::hsl_to_hex;
/// assert_eq!(hsl_to_hex(120., 100., 25.), "#008000");
/// ```
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    HSLColor::new(h, s, l).to_hex()
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let r = f64::from(rgb.r) / 255.;
        let g = f64::from(rgb.g) / 255.;
        let b = f64::from(rgb.b) / 255.;

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.;

        let (hue, saturation) = if max_c == min_c {
            // gray
            (0., 0.)
        } else {
            let chroma = max_c - min_c;
            let saturation = if lightness > 0.5 {
                chroma / (2. - max_c - min_c)
            } else {
                chroma / (max_c + min_c)
            };
            // which sixth of the hue circle we're in depends on the largest channel; ties go to the
            // first channel checked, in the order r, g, b
            let sector = if max_c == r {
                (g - b) / chroma + if g < b { 6. } else { 0. }
            } else if max_c == g {
                (b - r) / chroma + 2.
            } else {
                (r - g) / chroma + 4.
            };
            (sector / 6., saturation)
        };

        HSLColor {
            // rounding can land exactly on 360
            h: wrap_hue(round_half_up(hue * 360.)),
            s: round_tenth(saturation * 100.),
            l: round_tenth(lightness * 100.),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let point = HSLColor::clamp_coord(Coord {
            x: wrap_hue(self.h),
            y: self.s,
            z: self.l,
        });
        let s = point.y / 100.;
        let l = point.z / 100.;

        if s == 0. {
            let gray = l * 255.;
            return RGBColor::from_channels(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        let hk = point.x / 360.;
        RGBColor::from_channels(
            hue_to_channel(p, q, hk + 1. / 3.) * 255.,
            hue_to_channel(p, q, hk) * 255.,
            hue_to_channel(p, q, hk - 1. / 3.) * 255.,
        )
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(hsl: HSLColor) -> Coord {
        Coord {
            x: hsl.h,
            y: hsl.s,
            z: hsl.l,
        }
    }
}
