//! JSON palette report.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::Palette;

#[derive(Serialize)]
struct JsonReport<'a> {
    site: &'a str,
    unique: usize,
    total: usize,
    colours: &'a Palette,
}

/// Render the palette as pretty-printed JSON.
pub fn render_json(palette: &Palette, site: &str) -> Result<String> {
    let report = JsonReport {
        site,
        unique: palette.len(),
        total: palette.total(),
        colours: palette,
    };
    serde_json::to_string_pretty(&report).map_err(|e| SwatchError::Render {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })
}
