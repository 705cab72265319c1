//! This file implements the color functions that work on colors as points in 3D space: for now,
//! interpolation and evenly-spaced gradient stops. All of these methods work on `Color` types that
//! implement `Into<Coord>` and `From<Coord>`, which makes it easy to provide them for new types.
//!
//! Interpolation happens in whatever space the color lives in. Interpolating two `RGBColor`s mixes
//! their channels, and interpolating two `HSLColor`s would sweep hue instead; the two can look very
//! different, so pick the type before calling.

use std::cmp;

use crate::color::Color;
use crate::coord::Coord;

/// A trait that indicates that the current Color can be embedded in 3D space. This also requires
/// `Copy`: there shouldn't be any necessary information outside of the coordinate data.
pub trait ColorPoint: Color + Into<Coord> + From<Coord> + Copy {
    /// Returns the color a fraction `t` of the way from `self` to `other`. 0 gives `self`, and 1
    /// gives `other`.
    fn lerp(self, other: Self, t: f64) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.lerp(&c2, t))
    }

    /// Returns `count` colors that start with this color, end with `other`, and evenly transition in
    /// between. The i-th stop sits at `i / (count - 1)`. A single stop is just `self`, and a count of
    /// 0 gives nothing at all.
    ///
    /// # Example
    /// ```rust
    /// # use hueshift::prelude::*;
    /// let start = RGBColor::from_hex("#11457c");
    /// let end = RGBColor::from_hex("#774bdc");
    /// let stops: Vec<String> = start
    ///     .gradient_stops(end, 3)
    ///     .iter()
    ///     .map(|c| c.to_string())
    ///     .collect();
    /// assert_eq!(stops, vec!["#11457c", "#4448ac", "#774bdc"]);
    /// ```
    fn gradient_stops(self, other: Self, count: usize) -> Vec<Self> {
        let span = cmp::max(1, count.saturating_sub(1)) as f64;
        (0..count)
            .map(|i| self.lerp(other, i as f64 / span))
            .collect()
    }
}

impl<T: Color + Into<Coord> + From<Coord> + Copy> ColorPoint for T {
    // nothing to do
}
