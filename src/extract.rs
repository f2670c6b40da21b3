//! Palette extraction over a set of fetched stylesheets.

use crate::fetch::Resource;
use crate::types::{Palette, PaletteBuilder, RgbPadding};

/// Result of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub palette: Palette,
    /// Stylesheet URL and the number of colours found in it.
    pub scanned: Vec<(String, usize)>,
    /// Stylesheet URL and why it was skipped.
    pub skipped: Vec<(String, String)>,
}

/// Scan every fetched stylesheet, in order, into a single palette.
pub fn extract_palette<I>(resources: I, padding: RgbPadding) -> Extraction
where
    I: IntoIterator<Item = Resource>,
{
    let mut builder = PaletteBuilder::new();
    let mut scanned = Vec::new();
    let mut skipped = Vec::new();

    for resource in resources {
        match resource {
            Resource::Fetched { url, text } => {
                let found = builder.record_text(&text, padding);
                log::debug!("{} colour(s) in {}", found, url);
                scanned.push((url, found));
            }
            Resource::Skipped { url, reason } => skipped.push((url, reason)),
        }
    }

    Extraction {
        palette: builder.finalize(),
        scanned,
        skipped,
    }
}
