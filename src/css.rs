//! Helpers for the code that shows palettes to people: reading the requested swatch count, naming
//! swatches, and writing a palette out as CSS. None of this changes which colors a palette contains.
//!
//! The CSS block looks like this, with one custom property per swatch in palette order:
//!
//! ```css
//! :root {
//!   --color-1: #336699;
//!   --color-2: #993366;
//! }
//! /* Palette: triadic - base #336699 */
//! ```

use crate::hex::normalize_hex;
use crate::palette::PaletteType;

/// The fewest swatches a palette is built with.
pub const MIN_COUNT: usize = 2;
/// The most swatches a palette is built with.
pub const MAX_COUNT: usize = 8;
/// The swatch count used when none (or zero) is given.
pub const DEFAULT_COUNT: usize = 5;

/// Clamps a requested swatch count into [`MIN_COUNT`]..=[`MAX_COUNT`].
pub fn clamp_count(requested: i64) -> usize {
    requested.max(MIN_COUNT as i64).min(MAX_COUNT as i64) as usize
}

/// Reads a swatch count typed by a user. Leading whitespace is skipped and then the longest run of
/// an optional sign and digits is used, so `"7 swatches"` means 7. Text without a number, and zero,
/// mean [`DEFAULT_COUNT`]. The result is clamped with [`clamp_count`].
///
/// # Example
/// ```
/// # use hueshift::css::parse_count;
/// assert_eq!(parse_count("3"), 3);
/// assert_eq!(parse_count("12"), 8);
/// assert_eq!(parse_count("lots"), 5);
/// ```
pub fn parse_count(text: &str) -> usize {
    let trimmed = text.trim_start();
    let sign_len = if trimmed.starts_with('+') || trimmed.starts_with('-') {
        1
    } else {
        0
    };
    let end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |i| i + sign_len);
    // parsing as a float keeps very long digit runs from failing; the cast saturates
    let requested = trimmed[..end].parse::<f64>().unwrap_or(0.) as i64;
    if requested == 0 {
        clamp_count(DEFAULT_COUNT as i64)
    } else {
        clamp_count(requested)
    }
}

/// Writes a palette as a `:root` block of `--color-N` custom properties, numbered from 1, followed
/// by a comment naming the palette type and the (normalized) base color.
///
/// # Example
/// ```
/// # use hueshift::PaletteType;
/// # use hueshift::css::css_variables;
/// let css = css_variables(&["#ff0000", "#00ffff"], PaletteType::Complementary, "F00");
/// assert_eq!(
///     css,
///     ":root {\n  --color-1: #ff0000;\n  --color-2: #00ffff;\n}\n/* Palette: complementary - base #ff0000 */"
/// );
/// ```
pub fn css_variables<S: AsRef<str>>(colors: &[S], kind: PaletteType, base_hex: &str) -> String {
    let vars: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("  --color-{}: {};", i + 1, color.as_ref()))
        .collect();
    format!(
        ":root {{\n{}\n}}\n/* Palette: {} - base {} */",
        vars.join("\n"),
        kind,
        normalize_hex(base_hex)
    )
}

/// The display label for the swatch at `index`: gradient swatches are stops, everything else is a
/// colour. Labels count from 1.
pub fn swatch_label(kind: PaletteType, index: usize) -> String {
    match kind {
        PaletteType::Gradient => format!("Stop {}", index + 1),
        _ => format!("Colour {}", index + 1),
    }
}

/// A CSS `linear-gradient` running left to right from the first color to the last. Gives `None` for
/// an empty palette.
pub fn gradient_background<S: AsRef<str>>(colors: &[S]) -> Option<String> {
    let first = colors.first()?;
    let last = colors.last()?;
    Some(format!(
        "linear-gradient(90deg, {} 0%, {} 100%)",
        first.as_ref(),
        last.as_ref()
    ))
}
