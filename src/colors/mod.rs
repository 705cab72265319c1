//! This module contains the color types other than [`RGBColor`] that implement [`Color`]. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod hslcolor;

pub use self::hslcolor::HSLColor;
