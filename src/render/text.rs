//! Plain-text palette reports.

use std::fmt::Write as _;

use crate::types::Palette;

const RULE: &str = "--------|-----------";

/// Colour/frequency table, most frequent first.
pub fn render_text(palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "number of unique colors: {}", palette.len());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:.8}\t|{}", "Color", "Frequency");
    let _ = writeln!(out, "{}", RULE);
    for entry in palette {
        let _ = writeln!(out, "{:.8} |{}", entry.colour, entry.count);
    }
    out
}

/// One colour per line, most frequent first.
pub fn render_list(palette: &Palette) -> String {
    let mut out = String::new();
    for colour in palette.colours() {
        let _ = writeln!(out, "{}", colour);
    }
    out
}
