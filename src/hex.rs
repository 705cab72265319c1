//! This module deals with hex color text: the `#rrggbb` strings that users type into a color field
//! and that every palette hands back. There are two entry points. [`normalize_hex`] never fails: any
//! text that isn't a usable hex color collapses to black, which is what a palette generator wants when
//! someone is halfway through typing a color. [`parse_hex`] is the strict version, and reports
//! exactly why some text was rejected.
//!
//! Both accept the same syntax: optional surrounding whitespace, an optional leading `#`, and either
//! six hex digits or the three-digit shorthand, where each digit is doubled (`#abc` is `#aabbcc`).
//! Case doesn't matter on the way in, and output is always lowercase.

use std::error::Error;
use std::fmt;
use std::iter;

use regex::Regex;

use crate::color::RGBColor;

/// The hex color substituted for anything that can't be parsed.
pub const DEFAULT_HEX: &str = "#000000";

lazy_static! {
    // full-length form only: shorthand is expanded before this is checked
    static ref HEX_DIGITS: Regex = Regex::new("^[0-9a-fA-F]{6}$").unwrap();
}

/// An error in strictly parsing a hex color.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// Nothing but whitespace (and maybe a `#`) was given.
    Empty,
    /// The digits were neither three nor six characters long.
    InvalidLength,
    /// The length was right, but some character wasn't a hex digit.
    InvalidDigits,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            RGBParseError::Empty => "empty hex color",
            RGBParseError::InvalidLength => "hex color must have 3 or 6 digits",
            RGBParseError::InvalidDigits => "invalid hex digits",
        };
        f.write_str(msg)
    }
}

impl Error for RGBParseError {}

/// Removes surrounding whitespace and a single leading `#`.
fn strip_hash(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

/// Doubles every digit of a three-character shorthand. Anything else passes through untouched.
fn expand_shorthand(digits: &str) -> String {
    if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| iter::repeat(c).take(2)).collect()
    } else {
        digits.to_string()
    }
}

/// Strictly parses hex color text into an [`RGBColor`].
///
/// # Errors
/// Returns [`RGBParseError::Empty`] for blank input, [`RGBParseError::InvalidLength`] when the digits
/// aren't 3 or 6 long, and [`RGBParseError::InvalidDigits`] when they aren't all hex.
///
/// # Example
/// ```
/// # use hueshift::hex::{parse_hex, RGBParseError};
/// let teal = parse_hex(" #0FA ").unwrap();
/// assert_eq!((teal.r, teal.g, teal.b), (0, 255, 170));
/// assert_eq!(parse_hex("#12345"), Err(RGBParseError::InvalidLength));
/// ```
pub fn parse_hex(text: &str) -> Result<RGBColor, RGBParseError> {
    let digits = strip_hash(text);
    if digits.is_empty() {
        return Err(RGBParseError::Empty);
    }
    let expanded = expand_shorthand(digits);
    if expanded.chars().count() != 6 {
        return Err(RGBParseError::InvalidLength);
    }
    if !HEX_DIGITS.is_match(&expanded) {
        return Err(RGBParseError::InvalidDigits);
    }
    // six validated hex digits always fit in 24 bits
    let packed = u32::from_str_radix(&expanded, 16).map_err(|_| RGBParseError::InvalidDigits)?;
    Ok(RGBColor::from_packed(packed))
}

/// Normalizes arbitrary text into a lowercase, `#`-prefixed, six-digit hex color. Text that isn't a
/// valid hex color (including the empty string) becomes [`DEFAULT_HEX`]. Normalizing twice is the
/// same as normalizing once.
///
/// # Example
/// ```
/// # use hueshift::hex::normalize_hex;
/// assert_eq!(normalize_hex("#ABC"), "#aabbcc");
/// assert_eq!(normalize_hex("  336699"), "#336699");
/// assert_eq!(normalize_hex("not a color"), "#000000");
/// ```
pub fn normalize_hex(text: &str) -> String {
    match parse_hex(text) {
        Ok(rgb) => rgb.to_string(),
        Err(e) => {
            trace!(input = text, error = %e, "hex input unusable, defaulting to black");
            DEFAULT_HEX.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_normalize_shorthand() {
        assert_eq!(normalize_hex("#abc"), "#aabbcc");
        assert_eq!(normalize_hex("F0c"), "#ff00cc");
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize_hex("  #33AAFF\n"), "#33aaff");
        assert_eq!(normalize_hex("33aaff"), "#33aaff");
    }

    #[test]
    fn test_normalize_invalid() {
        // every failure path lands on the same prefixed default
        assert_eq!(normalize_hex(""), DEFAULT_HEX);
        assert_eq!(normalize_hex("   "), DEFAULT_HEX);
        assert_eq!(normalize_hex("#"), DEFAULT_HEX);
        assert_eq!(normalize_hex("#1234"), DEFAULT_HEX);
        assert_eq!(normalize_hex("#1234567"), DEFAULT_HEX);
        assert_eq!(normalize_hex("#ggghhh"), DEFAULT_HEX);
        assert_eq!(normalize_hex("##abc"), DEFAULT_HEX);
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["", "#abc", "ABCDEF", " 012 ", "nope", "#12", "#0a0B0c", "é1é"];
        for input in inputs.iter() {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(" # "), Err(RGBParseError::Empty));
        assert_eq!(parse_hex("abcd"), Err(RGBParseError::InvalidLength));
        assert_eq!(parse_hex("xyz"), Err(RGBParseError::InvalidDigits));
        assert_eq!(parse_hex("#12345z"), Err(RGBParseError::InvalidDigits));
    }

    #[test]
    fn test_parse_channels() {
        let rgb = parse_hex("#102030").unwrap();
        assert_eq!((rgb.r, rgb.g, rgb.b), (0x10, 0x20, 0x30));
    }
}
