//! This module describes the Bound trait, which allows for a description of which component values a
//! color space supports. RGB channels live between 0 and 255, for example, and HSL saturation and
//! lightness are percentages. Generating palettes pushes components around freely, so every color
//! coming out of that math gets pulled back inside these limits instead of being rejected.

use crate::color::RGBColor;
use crate::color_funcs::ColorPoint;
use crate::coord::Coord;

/// Describes a color space in which each component has explicit bounds. This only applies to colors
/// that can be embedded in 3D space, hence the use of the ColorPoint trait as a dependency.
/// # Example
/// ```
/// # use hueshift::prelude::*;
/// # use hueshift::coord::Coord;
/// let clamped = RGBColor::clamp_coord(Coord{x: -20., y: 128., z: 4000.});
/// assert_eq!(clamped, Coord{x: 0., y: 128., z: 255.});
/// ```
pub trait Bound: ColorPoint {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN components are passed through unchanged.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp(point.x, ranges[0]),
            y: clamp(point.y, ranges[1]),
            z: clamp(point.z, ranges[2]),
        }
    }
}

// implement Bound for the base color here, to avoid cluttering the color module more than it
// already is
impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (0., 255.), (0., 255.)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::hslcolor::HSLColor;
    use crate::coord::Coord;

    #[test]
    fn test_rgb_bounds() {
        let clamped = RGBColor::clamp_coord(Coord { x: 255.5, y: -0.1, z: 12. });
        assert_eq!(clamped, Coord { x: 255., y: 0., z: 12. });
    }

    #[test]
    fn test_hsl_bounds() {
        let clamped = HSLColor::clamp_coord(Coord { x: 200., y: 120., z: -5. });
        assert_eq!(clamped, Coord { x: 200., y: 100., z: 0. });
    }

    #[test]
    fn test_nan_passes_through() {
        let clamped = RGBColor::clamp_coord(Coord { x: f64::NAN, y: 1., z: 1. });
        assert!(clamped.x.is_nan());
    }
}
