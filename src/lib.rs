//! hueshift builds small palettes of colors that go together from a single base color. Give it a
//! hex color and a palette type (complementary, analogous, triadic, monochrome, or gradient) and it
//! hands back an ordered list of hex colors, ready to be shown as swatches or written out as CSS
//! custom properties.
//!
//! Under the hood, colors move between hex text, 8-bit RGB, and HSL. Palette rules are written in
//! HSL, where "rotate the hue" and "make it lighter" are one-number changes, and results are read
//! back out through RGB. Every step is forgiving: text that isn't a color becomes black, hues wrap,
//! and out-of-range components clamp, so generating a palette never fails.
//!
//! ```
//! use hueshift::{generate_palette, PaletteType};
//! use hueshift::css::css_variables;
//!
//! let colors = generate_palette(PaletteType::Analogous, "#336699", 5);
//! assert_eq!(colors.len(), 5);
//! assert_eq!(colors[2], "#336699");
//! println!("{}", css_variables(&colors, PaletteType::Analogous, "#336699"));
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

pub mod bound;
pub mod color;
pub mod color_funcs;
pub mod colors;
pub mod coord;
pub mod css;
pub mod hex;
pub mod palette;
pub mod prelude;

pub use crate::palette::{generate_palette, generate_palette_named, PaletteType};
