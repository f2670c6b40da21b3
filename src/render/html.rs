//! HTML swatch page.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use palette::{Hsl, IntoColor, Srgb};

use crate::config::ReportConfig;
use crate::error::{Result, SwatchError};
use crate::types::{CanonicalColour, Palette};

const DARK_TEXT: &str = "#000000";
const LIGHT_TEXT: &str = "#ffffff";

/// Render the palette as a standalone HTML page, one table row per colour.
pub fn render_html(palette: &Palette, report: &ReportConfig) -> String {
    let site = escape(&report.site_name);
    let mut html = String::new();

    html.push_str("<html>\n");
    let _ = writeln!(html, "<title>{} Color Page</title>", site);
    html.push_str("<body>\n");
    html.push_str("<table>\n");
    html.push_str("<tr>\n<th> Color </th>\n<th> Hex </th>\n<th> Frequency </th>\n</tr>\n");

    for entry in palette {
        let colour = escape(entry.colour.as_str());
        let _ = writeln!(html, "<tr>");
        let _ = writeln!(
            html,
            "<td style='width:50px; height:50px; background-color: {}; color: {}'>{}</td>",
            colour,
            text_colour(&entry.colour),
            colour
        );
        let _ = writeln!(html, "<td> {} </td>", colour);
        let _ = writeln!(html, "<td> {} </td>", entry.count);
        let _ = writeln!(html, "</tr>");
    }

    html.push_str("</table>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// Write the HTML page to `<output_dir>/<site_name>.html`.
pub fn write_html(palette: &Palette, report: &ReportConfig) -> Result<PathBuf> {
    fs::create_dir_all(&report.output_dir).map_err(|e| SwatchError::Io {
        path: report.output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let path = report.html_path();
    fs::write(&path, render_html(palette, report)).map_err(|e| SwatchError::Io {
        path: path.clone(),
        message: format!("Failed to write HTML report: {}", e),
    })?;

    Ok(path)
}

/// Pick black or white text for legibility over a swatch.
fn text_colour(colour: &CanonicalColour) -> &'static str {
    let Some((r, g, b)) = colour.to_rgb() else {
        return DARK_TEXT;
    };

    let rgb: Srgb<f32> = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsl: Hsl = rgb.into_color();

    if hsl.lightness > 0.5 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
