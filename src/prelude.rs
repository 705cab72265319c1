//! This module simply brings the most common hueshift functionality under a single namespace, to
//! prevent excessive imports. The prelude includes every trait in hueshift, the ubiquitous
//! [`RGBColor`] and its parse error [`RGBParseError`], and the palette entry points. The alternative
//! color spaces in the [`colors`](crate::colors) module are not included.

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor, RGBParseError};
pub use crate::color_funcs::ColorPoint;
pub use crate::palette::{generate_palette, PaletteType};
