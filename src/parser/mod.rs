//! Text scanners for swatch.
//!
//! Two pattern-driven scanners, neither of which is a full parser:
//! - `colour` pulls colour expressions out of stylesheet text
//! - `links` finds the stylesheets an HTML page links to
//!
//! # Usage
//!
//! ```
//! use swatch::parser::scan;
//! use swatch::types::RgbPadding;
//!
//! let colours: Vec<String> = scan("a { color: #FFF } b { color: white }")
//!     .into_iter()
//!     .map(|raw| raw.normalize(RgbPadding::Padded).to_string())
//!     .collect();
//! assert_eq!(colours, ["#ffffff", "#ffffff"]);
//! ```

pub mod colour;
pub mod links;

pub use colour::{scan, Scan, Tokens};
pub use links::stylesheet_links;
