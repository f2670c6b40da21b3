//! swatch - Colour palette extraction for web pages
//!
//! A library for pulling colour declarations out of a page's stylesheets,
//! normalizing them to `#rrggbb`, and ranking them by frequency.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use config::{Config, Format, ReportConfig};
pub use error::{Result, SwatchError};
pub use extract::{extract_palette, Extraction};
pub use fetch::{collect_resources, normalize_target, site_name, Fetcher, HttpFetcher, Resource};
pub use parser::{scan, stylesheet_links};
pub use render::{render_html, render_json, render_list, render_text, write_html};
pub use types::{CanonicalColour, Palette, PaletteBuilder, PaletteEntry, RawColour, RgbPadding};
