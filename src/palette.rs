//! This module turns a single base color into a palette: an ordered list of hex colors that belong
//! together. There are five recipes, each described by a [`PaletteType`]. Every recipe reads the
//! base color's HSL components once and then, for each position `i` in the palette, nudges hue or
//! lightness by an amount that depends on where `i` falls between the first and last swatch.
//! Saturation is always left alone.
//!
//! Nothing here can fail. Base colors go through [`normalize_hex`](crate::hex::normalize_hex), so
//! junk input gives a palette built on black; hues wrap; lightness clamps. A count of 1 is allowed
//! and never divides by zero, and a count of 0 gives an empty palette. Callers that take counts from
//! users should still clamp them, see [`clamp_count`](crate::css::clamp_count).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::color::{round_half_up, Color, RGBColor};
use crate::color_funcs::ColorPoint;
use crate::colors::hslcolor::{wrap_hue, HSLColor};

/// Clamps `x` into `[min, max]`.
fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

/// The base color of a palette, in HSL.
fn base_hsl(base_hex: &str) -> HSLColor {
    RGBColor::from_hex(base_hex).convert()
}

/// One of the named palette recipes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// Sweeps from the base color to its complement, on the other side of the hue circle.
    #[default]
    Complementary,
    /// Neighbors of the base hue, 30 degrees either way.
    Analogous,
    /// The base hue and the two hues 120 degrees away from it, in turn.
    Triadic,
    /// The base hue from near-black to near-white.
    Monochrome,
    /// Evenly spaced RGB stops from the base color to a nearby partner color.
    Gradient,
}

impl PaletteType {
    /// Every palette type, in the order they're usually presented.
    pub const ALL: [PaletteType; 5] = [
        PaletteType::Complementary,
        PaletteType::Analogous,
        PaletteType::Triadic,
        PaletteType::Monochrome,
        PaletteType::Gradient,
    ];

    /// Looks a palette type up by name, ignoring case and surrounding whitespace. Unknown names get
    /// [`PaletteType::Complementary`].
    ///
    /// # Example
    /// ```
    /// # use hueshift::PaletteType;
    /// assert_eq!(PaletteType::from_name(" Triadic"), PaletteType::Triadic);
    /// assert_eq!(PaletteType::from_name("tetradic"), PaletteType::Complementary);
    /// ```
    pub fn from_name(name: &str) -> PaletteType {
        let wanted = name.trim();
        match PaletteType::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
        {
            Some(kind) => *kind,
            None => {
                debug!(name, "unknown palette type, using complementary");
                PaletteType::Complementary
            }
        }
    }

    /// The lowercase name of this palette type.
    pub fn name(self) -> &'static str {
        match self {
            PaletteType::Complementary => "complementary",
            PaletteType::Analogous => "analogous",
            PaletteType::Triadic => "triadic",
            PaletteType::Monochrome => "monochrome",
            PaletteType::Gradient => "gradient",
        }
    }

    /// How many swatches this palette has when nobody asks for a particular number. Triads come in
    /// threes and gradients need only their two ends.
    pub fn default_count(self) -> usize {
        match self {
            PaletteType::Triadic => 3,
            PaletteType::Gradient => 2,
            _ => 5,
        }
    }

    /// Builds a palette of this type. Same as [`generate_palette`].
    pub fn generate(self, base_hex: &str, count: usize) -> Vec<String> {
        generate_palette(self, base_hex, count)
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// parsing can't fail: unknown names fall back just like `from_name`
impl FromStr for PaletteType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<PaletteType, Infallible> {
        Ok(PaletteType::from_name(s))
    }
}

/// Builds a palette of `count` hex colors of the given type from a base color. `base_hex` can be
/// anything: it's normalized first, and unusable text means black.
///
/// # Example
/// ```
/// # use hueshift::{generate_palette, PaletteType};
/// let palette = generate_palette(PaletteType::Monochrome, "#336699", 5);
/// assert_eq!(palette, vec!["#080f17", "#24476b", "#407fbf", "#94b8db", "#e8f0f7"]);
/// ```
pub fn generate_palette(kind: PaletteType, base_hex: &str, count: usize) -> Vec<String> {
    debug!(kind = kind.name(), base = base_hex, count, "generating palette");
    match kind {
        PaletteType::Complementary => complementary(base_hex, count),
        PaletteType::Analogous => analogous(base_hex, count),
        PaletteType::Triadic => triadic(base_hex, count),
        PaletteType::Monochrome => monochrome(base_hex, count),
        PaletteType::Gradient => gradient(base_hex, count),
    }
}

/// Like [`generate_palette`], but with the palette type given by name. Unknown names build a
/// complementary palette.
pub fn generate_palette_named(name: &str, base_hex: &str, count: usize) -> Vec<String> {
    generate_palette(PaletteType::from_name(name), base_hex, count)
}

/// A sweep from the base color to its complement. Hue moves linearly from the base hue to the base
/// hue plus 180 degrees, and lightness drifts from 9 points darker to 9 points lighter than the
/// base, staying within 8-92. The sweep always runs from the base hue towards `base + 180` taken
/// mod 360, so bases with hues past 180 sweep backwards, and a red whose hue rounds up to 360
/// counts as 0 and sweeps forwards through yellow and green.
pub fn complementary(base_hex: &str, count: usize) -> Vec<String> {
    let base = base_hsl(base_hex);
    let complement = (base.h + 180.) % 360.;
    let span = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / span;
            let hue = round_half_up(base.h + (complement - base.h) * t);
            let lightness = round_half_up(clamp(base.l + (t - 0.5) * 18., 8., 92.));
            HSLColor::new(hue, base.s, lightness).to_hex()
        })
        .collect()
}

/// Colors clustered around the base hue, from 30 degrees below it to 30 degrees above it, getting
/// slightly lighter along the way (within 6-94). A single swatch is the midpoint, so it keeps the
/// base hue.
pub fn analogous(base_hex: &str, count: usize) -> Vec<String> {
    const SPREAD: f64 = 30.;
    let base = base_hsl(base_hex);
    (0..count)
        .map(|i| {
            let t = if count == 1 {
                0.5
            } else {
                i as f64 / (count - 1) as f64
            };
            let hue = round_half_up(base.h + (t - 0.5) * 2. * SPREAD);
            let lightness = round_half_up(clamp(base.l + (t - 0.5) * 12., 6., 94.));
            HSLColor::new(hue, base.s, lightness).to_hex()
        })
        .collect()
}

/// The base hue and the hues a third and two thirds of the way around the circle, cycled in that
/// order. Each completed cycle of three gets 6 points lighter (up to 94).
pub fn triadic(base_hex: &str, count: usize) -> Vec<String> {
    let base = base_hsl(base_hex);
    let triads = [
        base.h,
        wrap_hue(base.h + 120.),
        wrap_hue(base.h + 240.),
    ];
    (0..count)
        .map(|i| {
            let step = (i / 3) as f64;
            let lightness = round_half_up(clamp(base.l + step * 6., 6., 94.));
            HSLColor::new(triads[i % 3], base.s, lightness).to_hex()
        })
        .collect()
}

/// The base hue and saturation with lightness running evenly from 6 to 94.
pub fn monochrome(base_hex: &str, count: usize) -> Vec<String> {
    const MIN_L: f64 = 6.;
    const MAX_L: f64 = 94.;
    let base = base_hsl(base_hex);
    let span = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / span;
            let lightness = round_half_up(MIN_L + (MAX_L - MIN_L) * t);
            HSLColor::new(base.h, base.s, lightness).to_hex()
        })
        .collect()
}

/// The partner a gradient runs towards: 24 degrees around the hue circle and 12 points of
/// lightness away from the base. Light bases go backwards and darker, dark bases forwards and lighter.
fn gradient_partner(base: HSLColor) -> HSLColor {
    let light = base.l > 50.;
    let hue = wrap_hue(base.h + if light { -24. } else { 24. });
    let lightness = clamp(base.l + if light { -12. } else { 12. }, 6., 94.);
    HSLColor::new(hue, base.s, lightness)
}

/// Evenly spaced stops from the base color to its partner color (see `gradient_partner`). The
/// partner is picked in HSL, but the stops in between are interpolated channel by channel in RGB.
/// The first stop is always the base color itself.
pub fn gradient(base_hex: &str, count: usize) -> Vec<String> {
    let start = RGBColor::from_hex(base_hex);
    let end = gradient_partner(start.convert()).to_rgb();
    start
        .gradient_stops(end, count)
        .iter()
        .map(|stop| stop.to_hex())
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::hex::parse_hex;
    use float_cmp::approx_eq;

    fn hsl_of(hex: &str) -> HSLColor {
        HSLColor::from_hex(hex)
    }

    #[test]
    fn test_palette_lengths() {
        for kind in PaletteType::ALL.iter() {
            for count in 2..=8 {
                let palette = generate_palette(*kind, "#336699", count);
                assert_eq!(palette.len(), count, "{} with {}", kind, count);
                for hex in palette.iter() {
                    assert_eq!(hex.len(), 7);
                    assert!(parse_hex(hex).is_ok(), "{} is not a hex color", hex);
                    assert_eq!(hex, &hex.to_lowercase());
                }
            }
        }
    }

    #[test]
    fn test_complementary_endpoints() {
        let palette = complementary("#ff0000", 2);
        assert_eq!(palette, vec!["#d10000", "#2effff"]);
        let first = hsl_of(&palette[0]);
        let last = hsl_of(&palette[1]);
        assert!(approx_eq!(f64, first.h, 0., epsilon = 1.));
        assert!(approx_eq!(f64, last.h, 180., epsilon = 1.));
        assert!(approx_eq!(f64, first.s, 100., epsilon = 1.));
        assert!(approx_eq!(f64, last.s, 100., epsilon = 1.));
    }

    #[test]
    fn test_complementary_sweep() {
        assert_eq!(
            complementary("#336699", 5),
            vec!["#284f77", "#2e8a73", "#339933", "#8fac39", "#bb7d3e"]
        );
    }

    #[test]
    fn test_complementary_from_wrapped_hue() {
        // #c43f40 reads as hue 0, not 360, so the sweep heads through green
        assert_eq!(
            complementary("#c43f40", 3),
            vec!["#a43232", "#82c440", "#63cfcf"]
        );
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(
            generate_palette_named("not-a-type", "#123456", 4),
            complementary("#123456", 4)
        );
        assert_eq!("".parse::<PaletteType>(), Ok(PaletteType::Complementary));
        assert_eq!("GRADIENT".parse::<PaletteType>(), Ok(PaletteType::Gradient));
    }

    #[test]
    fn test_monochrome_sweep() {
        let palette = monochrome("#ff0000", 3);
        assert_eq!(palette, vec!["#1f0000", "#ff0000", "#ffe0e0"]);
        let lightness: Vec<f64> = palette.iter().map(|hex| hsl_of(hex).l).collect();
        for (actual, expected) in lightness.iter().zip([6., 50., 94.].iter()) {
            assert!(approx_eq!(f64, *actual, *expected, epsilon = 0.5));
        }
        for hex in palette.iter() {
            assert_eq!(hsl_of(hex).h, 0.);
        }
    }

    #[test]
    fn test_analogous_spread() {
        assert_eq!(
            analogous("#336699", 5),
            vec!["#2b8282", "#2f768e", "#336699", "#3752a4", "#3b3bb0"]
        );
        // a lone swatch sits in the middle of the spread
        assert_eq!(analogous("#ff0000", 1), vec!["#ff0000"]);
    }

    #[test]
    fn test_triadic_cycles() {
        let palette = triadic("#ff0000", 7);
        assert_eq!(&palette[..3], &["#ff0000", "#00ff00", "#0000ff"]);
        let hues: Vec<f64> = palette.iter().map(|hex| hsl_of(hex).h).collect();
        assert_eq!(hues, vec![0., 120., 240., 0., 120., 240., 0.]);
        // every full cycle is 6 points lighter
        assert!(hsl_of(&palette[3]).l > hsl_of(&palette[0]).l);
        assert!(approx_eq!(f64, hsl_of(&palette[6]).l, 62., epsilon = 0.5));
    }

    #[test]
    fn test_triadic_does_not_leak_between_calls() {
        let first = triadic("#336699", 3);
        triadic("#ff0000", 3);
        assert_eq!(triadic("#336699", 3), first);
    }

    #[test]
    fn test_gradient_partner() {
        // dark base: partner is lighter and further round the circle
        let partner = gradient_partner(hsl_of("#336699"));
        assert_eq!(partner, HSLColor::new(234., 50., 52.));
        // light base: partner is darker and backwards
        let partner = gradient_partner(HSLColor::new(10., 50., 90.));
        assert_eq!(partner, HSLColor::new(346., 50., 78.));
        // clamped lightness
        let partner = gradient_partner(HSLColor::new(0., 50., 2.));
        assert_eq!(partner.l, 14.);
        let partner = gradient_partner(HSLColor::new(0., 50., 99.));
        assert_eq!(partner.l, 87.);
    }

    #[test]
    fn test_gradient_stops() {
        let stops = gradient("#336699", 5);
        assert_eq!(
            stops,
            vec!["#336699", "#3862a3", "#3d5dae", "#4259b8", "#4754c2"]
        );
        assert_eq!(gradient("eee", 2), vec!["#eeeeee", "#cfcfcf"]);
        // shorthand base is normalized before it becomes the first stop
        assert_eq!(gradient("#F00", 3)[0], "#ff0000");
    }

    #[test]
    fn test_single_and_empty_counts() {
        assert_eq!(complementary("#ff0000", 1), vec!["#d10000"]);
        assert_eq!(monochrome("#ff0000", 1), vec!["#1f0000"]);
        assert_eq!(gradient("#ff0000", 1), vec!["#ff0000"]);
        for kind in PaletteType::ALL.iter() {
            assert!(kind.generate("#ff0000", 0).is_empty());
        }
    }

    #[test]
    fn test_invalid_base_is_black() {
        assert_eq!(
            generate_palette(PaletteType::Analogous, "zzz", 3),
            generate_palette(PaletteType::Analogous, "#000000", 3)
        );
    }

    #[test]
    fn test_names_round_trip() {
        for kind in PaletteType::ALL.iter() {
            assert_eq!(PaletteType::from_name(kind.name()), *kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(PaletteType::Triadic.default_count(), 3);
        assert_eq!(PaletteType::Gradient.default_count(), 2);
        assert_eq!(PaletteType::Analogous.default_count(), 5);
    }
}
