//! This module contains a struct, [`Coord`], that models a 3D coordinate space and supports limited
//! math in 3 dimensions with scalars and other coordinates. Colors that can be projected into 3D
//! space (RGB channels, HSL components) use it to share interpolation and clamping code.

use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are called `x`, `y`, and `z`, and any color that converts to a
/// `Coord` maps its components onto them in the order of the letters in its name: `HSLColor` puts
/// hue on `x`, saturation on `y`, and lightness on `z`.
///
/// # Example
/// ```
/// # use hueshift::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalars only multiply on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // casting a primitive number to f64 can't fail, but a custom Scalar might
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Linear interpolation: the point a fraction `t` of the way from `self` to `other`, computed
    /// componentwise as `start + (end - start) * t`. A `t` of 0 gives back `self` exactly and a `t` of
    /// 1 gives `other`. Values outside of 0-1 extrapolate along the same line.
    ///
    /// # Example
    /// ```
    /// # use hueshift::coord::Coord;
    /// let start = Coord{x: 0., y: 100., z: 10.};
    /// let end = Coord{x: 200., y: 0., z: 10.};
    /// let quarter = start.lerp(&end, 0.25);
    /// assert_eq!(quarter, Coord{x: 50., y: 75., z: 10.});
    /// ```
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }
}
