//! Report rendering for swatch.
//!
//! Renderers consume a finalized palette and keep its order.

mod html;
mod json;
mod text;

pub use html::{render_html, write_html};
pub use json::render_json;
pub use text::{render_list, render_text};
