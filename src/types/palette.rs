//! Frequency-ranked palettes.

use std::collections::HashMap;

use serde::Serialize;

use crate::parser::scan;

use super::colour::{CanonicalColour, RgbPadding};

/// One colour of a palette and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub colour: CanonicalColour,
    pub count: usize,
}

/// Colours ordered by count, most frequent first.
///
/// Equal counts keep the order in which the colours were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// All entries in rank order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all colours.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The `n` most frequent entries.
    pub fn top(&self, n: usize) -> &[PaletteEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// A copy holding only the `max` most frequent entries.
    pub fn limited(&self, max: usize) -> Palette {
        Palette {
            entries: self.top(max).to_vec(),
        }
    }

    /// Colours in rank order, without counts.
    pub fn colours(&self) -> impl Iterator<Item = &CanonicalColour> {
        self.entries.iter().map(|e| &e.colour)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates colour occurrences for one palette-building run.
///
/// Entries are kept in first-seen order; [`finalize`](Self::finalize) sorts a
/// copy, so it can be called repeatedly and always returns the same palette.
///
/// Finalizing does not close the builder. A later [`record`](Self::record)
/// still counts, and only shows up in the next `finalize`; palettes already
/// returned are unaffected. Use a fresh builder for each run.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    /// Colour -> position in `entries`
    index: HashMap<CanonicalColour, usize>,
    entries: Vec<PaletteEntry>,
}

impl PaletteBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a colour.
    pub fn record(&mut self, colour: CanonicalColour) {
        match self.index.get(&colour) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(colour.clone(), self.entries.len());
                self.entries.push(PaletteEntry { colour, count: 1 });
            }
        }
    }

    /// Scan one stylesheet and record every colour in it.
    ///
    /// Returns the number of colours recorded.
    pub fn record_text(&mut self, text: &str, padding: RgbPadding) -> usize {
        let mut recorded = 0;
        for raw in &scan(text) {
            self.record(raw.normalize(padding));
            recorded += 1;
        }
        recorded
    }

    /// Number of distinct colours seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences recorded so far.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Produce the ranked palette.
    pub fn finalize(&self) -> Palette {
        let mut entries = self.entries.clone();
        // sort_by is stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Palette { entries }
    }
}
