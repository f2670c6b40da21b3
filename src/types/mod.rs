//! Core domain types for swatch.
//!
//! - `RawColour` - a colour expression as found in stylesheet text
//! - `CanonicalColour` - the normalized `#rrggbb` counting key
//! - `Palette` / `PaletteBuilder` - frequency-ranked colour collections

mod colour;
mod palette;

pub use colour::{named_hex, CanonicalColour, RawColour, RgbPadding, NAMED_COLOURS};
pub use palette::{Palette, PaletteBuilder, PaletteEntry};
