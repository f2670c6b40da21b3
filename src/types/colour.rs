//! Colour tokens and their canonical form.
//!
//! A [`RawColour`] is a colour expression exactly as the scanner found it.
//! Normalizing it yields a [`CanonicalColour`], the lowercase `#rrggbb` key
//! the palette counts by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named colours recognized after a `color:` keyword.
pub const NAMED_COLOURS: [&str; 13] = [
    "white", "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy",
    "olive", "orange", "purple",
];

/// How rgb components are converted to hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RgbPadding {
    /// Every component becomes exactly two hex digits: `rgb(0,128,255)` -> `#0080ff`.
    #[default]
    Padded,
    /// Components are not zero-padded: `rgb(0,128,255)` -> `#080ff`.
    ///
    /// Matches palettes produced by older tooling. A result of exactly three
    /// digits (`rgb(0,0,0)` -> `#000`) is still expanded.
    Legacy,
}

/// A colour expression as matched in stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawColour {
    /// Hex digits, with or without the leading `#`.
    Hex(String),
    /// Red, green and blue components as written. Alpha is not kept.
    Rgb(u16, u16, u16),
    /// One of [`NAMED_COLOURS`], in any case.
    Named(String),
}

impl RawColour {
    /// Normalize to the canonical key.
    ///
    /// Never fails. Hex literals of 4 or 5 digits are passed through
    /// lowercased, and names without a table entry (`aqua`, `navy`) come back
    /// as the lowercased name.
    pub fn normalize(&self, padding: RgbPadding) -> CanonicalColour {
        match self {
            RawColour::Hex(hex) => {
                let digits = hex.strip_prefix('#').unwrap_or(hex).to_ascii_lowercase();
                CanonicalColour(expand_short(&digits))
            }
            RawColour::Rgb(r, g, b) => {
                let digits = match padding {
                    RgbPadding::Padded => format!("{:02x}{:02x}{:02x}", r, g, b),
                    RgbPadding::Legacy => format!("{:x}{:x}{:x}", r, g, b),
                };
                CanonicalColour(expand_short(&digits))
            }
            RawColour::Named(name) => {
                let name = name.to_ascii_lowercase();
                match named_hex(&name) {
                    Some(hex) => CanonicalColour(hex.to_string()),
                    None => CanonicalColour(name),
                }
            }
        }
    }
}

/// Look up the hex value of a named colour.
///
/// `aqua` and `navy` are recognized by the scanner but have no entry here.
pub fn named_hex(name: &str) -> Option<&'static str> {
    let hex = match name {
        "white" => "#ffffff",
        "black" => "#000000",
        "blue" => "#0000ff",
        "fuchsia" => "#ff00ff",
        "gray" => "#808080",
        "green" => "#008000",
        "lime" => "#00ff00",
        "maroon" => "#800000",
        "olive" => "#808000",
        "orange" => "#ffa500",
        "purple" => "#800080",
        _ => return None,
    };
    Some(hex)
}

/// Prefix `#`, doubling each digit when there are exactly three.
fn expand_short(digits: &str) -> String {
    if digits.len() == 3 {
        let mut out = String::with_capacity(7);
        out.push('#');
        for c in digits.chars() {
            out.push(c);
            out.push(c);
        }
        out
    } else {
        format!("#{}", digits)
    }
}

/// A normalized colour, the aggregation key of a palette.
///
/// Normally lowercase `#rrggbb`; see [`RawColour::normalize`] for the two
/// inputs that keep a different shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalColour(String);

impl CanonicalColour {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this is a true `#rrggbb` colour.
    pub fn is_hex(&self) -> bool {
        self.0.len() == 7
            && self.0.starts_with('#')
            && self.0[1..].bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// RGB components, when the key is a true `#rrggbb` colour.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        if !self.is_hex() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).ok();
        Some((byte(1)?, byte(3)?, byte(5)?))
    }
}

impl From<&str> for CanonicalColour {
    /// Wrap an already-canonical key. No normalization is applied.
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CanonicalColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
